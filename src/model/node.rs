//! Graph node identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a node in a posted graph.
///
/// Nodes are opaque labels unless they spell a coordinate pair, in which
/// case position-aware heuristics can use them. Accepted JSON forms:
///
/// | JSON | Key |
/// |------|-----|
/// | `"A"` | `Label("A")` |
/// | `7` | `Label("7")` |
/// | `"3,4"` or `"(3, 4)"` | `Point { x: 3, y: 4 }` |
/// | `[3, 4]` | `Point { x: 3, y: 4 }` |
///
/// Object keys are always strings in JSON, so the string forms are the ones
/// that let adjacency maps and their neighbour lists name the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Label(String),
    Point { x: i64, y: i64 },
}

impl NodeKey {
    pub fn label(name: impl Into<String>) -> Self {
        NodeKey::Label(name.into())
    }

    pub fn point(x: i64, y: i64) -> Self {
        NodeKey::Point { x, y }
    }

    /// Interpret a string key. Two comma-separated integers (optionally
    /// parenthesised) become a point; anything else stays a label.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(trimmed);

        if let Some((x, y)) = inner.split_once(',') {
            if let (Ok(x), Ok(y)) = (x.trim().parse::<i64>(), y.trim().parse::<i64>()) {
                return NodeKey::Point { x, y };
            }
        }
        NodeKey::Label(raw.to_owned())
    }

    pub fn as_point(&self) -> Option<(i64, i64)> {
        match self {
            NodeKey::Point { x, y } => Some((*x, *y)),
            NodeKey::Label(_) => None,
        }
    }

    /// L1 distance between two coordinate nodes; `None` if either is a label.
    pub fn manhattan(&self, other: &NodeKey) -> Option<f64> {
        let (ax, ay) = self.as_point()?;
        let (bx, by) = other.as_point()?;
        Some(ax.abs_diff(bx) as f64 + ay.abs_diff(by) as f64)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Label(name) => f.write_str(name),
            NodeKey::Point { x, y } => write!(f, "{x},{y}"),
        }
    }
}

// ============================================================================
// Serde
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Pair(i64, i64),
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawKey::deserialize(deserializer)? {
            RawKey::Pair(x, y) => NodeKey::Point { x, y },
            RawKey::Int(i) => NodeKey::Label(i.to_string()),
            RawKey::Text(s) => NodeKey::parse(&s),
        })
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeKey::Label(name) => serializer.serialize_str(name),
            NodeKey::Point { x, y } => (x, y).serialize(serializer),
        }
    }
}
