//! # Request Model
//!
//! DTOs that cross the boundary between the HTTP layer and the algorithms.
//!
//! Design rule: pure data. No I/O, no state, no async.

pub mod node;
pub mod value;

pub use node::NodeKey;
pub use value::Value;
