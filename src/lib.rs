//! # algo-catalog: Textbook Algorithms over HTTP
//!
//! A catalogue of classic search, sort, graph and string-matching algorithms,
//! each a pure function, plus a thin JSON dispatch layer that exposes every
//! one of them as an endpoint.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `search`, `sort`, `graph` and `text` hold no state, do no
//!    I/O and never fail; edge cases are values (`None`, empty path)
//! 2. **Closed dispatch**: algorithm names resolve to enum variants, not
//!    string-keyed function tables
//! 3. **Explicit state**: configuration reaches handlers through the router
//!    state, never through globals
//!
//! ## Quick Start
//!
//! ```rust
//! use algo_catalog::{search, sort, text};
//!
//! let sorted = sort::merge_sort(&[23, 5, 91, 2]);
//! assert_eq!(sorted, vec![2, 5, 23, 91]);
//! assert_eq!(search::binary_search(&sorted, &23), Some(2));
//! assert_eq!(text::kmp_search("lazy dog", "dog"), Some(5));
//! ```
//!
//! ## Endpoint Families
//!
//! | Family | Path | Algorithms |
//! |--------|------|------------|
//! | Search | `/search/{algo}` | linear, binary, jump, interpolation, exponential, fibonacci |
//! | Sort | `/sort/{algo}` | bubble, selection, insertion, merge, quick, heap |
//! | Graph | `/graph/{algo}` | bfs, dfs, dijkstra, astar |
//! | String | `/string/{algo}` | naive, kmp, rabin |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod search;
pub mod sort;
pub mod graph;
pub mod text;
pub mod dispatch;
pub mod server;
pub mod config;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{NodeKey, Value};

// ============================================================================
// Re-exports: Dispatch + Server
// ============================================================================

pub use dispatch::Family;
pub use server::{router, AppState};
pub use config::{ConfigError, ServiceConfig};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Please provide {}", quote_fields(.0))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid '{field}' field: {message}")]
    InvalidField { field: &'static str, message: String },

    #[error("Unknown {family} algorithm '{name}'")]
    UnknownAlgorithm { family: Family, name: String },

    #[error("Unknown endpoint '{0}'")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl Error {
    /// True for errors caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Io(_) | Error::Worker(_))
    }
}

/// Quote field names for the "Please provide ..." message.
fn quote_fields(fields: &[&'static str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    let noun = if fields.len() == 1 { "field" } else { "fields" };
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last} {noun}", rest.join(", ")),
        Some((last, _)) => format!("{last} {noun}"),
        None => noun.to_owned(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
