//! Response bodies, one per endpoint shape.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{NodeKey, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub algorithm: &'static str,
    /// Whether the array was sorted before searching.
    pub sorted_used: bool,
    /// The sorted copy that was searched; `null` when the input was used as-is.
    pub array_used: Option<Vec<Value>>,
    /// Index into `array_used` (or the input), `-1` if absent.
    pub index: i64,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortResponse {
    pub algorithm: &'static str,
    pub sorted: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphResponse {
    /// `bfs` / `dfs`
    Traversal {
        algorithm: &'static str,
        result: Vec<NodeKey>,
    },
    /// `dijkstra`; unreachable nodes are `null`.
    Distances {
        algorithm: &'static str,
        distances: BTreeMap<String, Option<f64>>,
    },
    /// `astar`; empty `path` and `null` cost when unreachable.
    Path {
        algorithm: &'static str,
        heuristic: &'static str,
        path: Vec<NodeKey>,
        cost: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringResponse {
    pub algorithm: &'static str,
    pub index: i64,
    pub found: bool,
}
