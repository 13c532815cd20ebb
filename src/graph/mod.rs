//! # Graph Suite
//!
//! Traversal and shortest-path search over caller-supplied adjacency maps.
//! Every function is generic over the node type; the HTTP layer uses
//! [`NodeKey`](crate::model::NodeKey), tests mostly use `&str`.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`bfs`] | [`AdjacencyList`] | visitation order |
//! | [`dfs`] | [`AdjacencyList`] | visitation order |
//! | [`dijkstra`] | [`WeightedGraph`] | [`Distances`] |
//! | [`a_star`] | neighbour + heuristic callbacks | path |

pub mod astar;
pub mod dijkstra;
pub mod heuristic;
pub mod traversal;

use hashbrown::HashMap;

pub use astar::{a_star, a_star_search, Route};
pub use dijkstra::dijkstra;
pub use heuristic::Heuristic;
pub use traversal::{bfs, dfs};

/// node → neighbours, in the order they should be explored.
pub type AdjacencyList<N> = HashMap<N, Vec<N>>;

/// node → (neighbour → non-negative edge weight).
pub type WeightedGraph<N> = HashMap<N, HashMap<N, f64>>;

/// node → shortest known cost from the start; `f64::INFINITY` if unreached.
pub type Distances<N> = HashMap<N, f64>;
