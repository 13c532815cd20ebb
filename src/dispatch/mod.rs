//! # Request Dispatch
//!
//! Maps `(family, algorithm name, JSON body)` to one pure algorithm call.
//!
//! Every request goes through the same phases:
//!
//! 1. **Parse**: body → [`Fields`] (must be a JSON object)
//! 2. **Resolve**: name → closed enum variant, or `UnknownAlgorithm`
//! 3. **Extract**: required fields present and well-typed
//! 4. **Execute**: call the algorithm, wrap the result in a response DTO
//!
//! Name resolution is a `match` over string literals into enums; there is no
//! runtime function table.

pub mod fields;
pub mod handlers;
pub mod response;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

pub use fields::Fields;
pub use handlers::{handle_graph, handle_search, handle_sort, handle_string};
pub use response::{GraphResponse, SearchResponse, SortResponse, StringResponse};

// ============================================================================
// Families
// ============================================================================

/// Top-level endpoint family; also the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Search,
    Sort,
    Graph,
    String,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Search, Family::Sort, Family::Graph, Family::String];

    pub fn name(&self) -> &'static str {
        match self {
            Family::Search => "search",
            Family::Sort => "sort",
            Family::Graph => "graph",
            Family::String => "string",
        }
    }

    pub fn algorithm_names(&self) -> Vec<&'static str> {
        match self {
            Family::Search => SearchAlgorithm::ALL.iter().map(|a| a.name()).collect(),
            Family::Sort => SortAlgorithm::ALL.iter().map(|a| a.name()).collect(),
            Family::Graph => GraphAlgorithm::ALL.iter().map(|a| a.name()).collect(),
            Family::String => StringAlgorithm::ALL.iter().map(|a| a.name()).collect(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Algorithms
// ============================================================================

macro_rules! named_algorithms {
    ($(#[$meta:meta])* $name:ident, $family:expr, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name, as used in the URL.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Like [`Self::from_name`], but unknown names become a 404-class error.
            pub fn resolve(name: &str) -> Result<Self> {
                Self::from_name(name).ok_or_else(|| Error::UnknownAlgorithm {
                    family: $family,
                    name: name.to_owned(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_algorithms!(
    /// `/search/{name}`
    SearchAlgorithm, Family::Search, {
        Linear => "linear",
        Binary => "binary",
        Jump => "jump",
        Interpolation => "interpolation",
        Exponential => "exponential",
        Fibonacci => "fibonacci",
    }
);

named_algorithms!(
    /// `/sort/{name}`
    SortAlgorithm, Family::Sort, {
        Bubble => "bubble",
        Selection => "selection",
        Insertion => "insertion",
        Merge => "merge",
        Quick => "quick",
        Heap => "heap",
    }
);

named_algorithms!(
    /// `/graph/{name}`
    GraphAlgorithm, Family::Graph, {
        Bfs => "bfs",
        Dfs => "dfs",
        Dijkstra => "dijkstra",
        AStar => "astar",
    }
);

named_algorithms!(
    /// `/string/{name}`
    StringAlgorithm, Family::String, {
        Naive => "naive",
        Kmp => "kmp",
        RabinKarp => "rabin",
    }
);

impl SearchAlgorithm {
    /// Whether the boundary must hand this algorithm a sorted copy.
    pub fn requires_sorted(&self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }
}

// ============================================================================
// Catalogue
// ============================================================================

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub service: &'static str,
    pub endpoints: BTreeMap<&'static str, Vec<String>>,
}

pub const SERVICE_NAME: &str = "search-algorithms-api";

/// Every endpoint, grouped by family.
pub fn catalog() -> Catalog {
    let endpoints = Family::ALL
        .iter()
        .map(|family| {
            let paths = family
                .algorithm_names()
                .into_iter()
                .map(|name| format!("/{family}/{name}"))
                .collect();
            (family.name(), paths)
        })
        .collect();
    Catalog { service: SERVICE_NAME, endpoints }
}
