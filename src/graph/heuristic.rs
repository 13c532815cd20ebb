//! Distance estimates for A* over [`NodeKey`]s.

use crate::model::NodeKey;

/// Named A* heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Constant zero; A* degenerates to Dijkstra.
    Zero,
    /// |dx| + |dy| between coordinate nodes, zero when either node is a label.
    Manhattan,
}

impl Heuristic {
    /// Resolve a client-supplied name.
    ///
    /// Absent or `"zero"` selects [`Heuristic::Zero`]. Any other name selects
    /// [`Heuristic::Manhattan`], which itself falls back to zero on label
    /// nodes, so a misspelt name never fails a request.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("zero") => Heuristic::Zero,
            Some(_) => Heuristic::Manhattan,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::Manhattan => "manhattan",
        }
    }

    /// Estimated remaining cost from `node` to `goal`.
    pub fn estimate(&self, node: &NodeKey, goal: &NodeKey) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::Manhattan => node.manhattan(goal).unwrap_or(0.0),
        }
    }
}
