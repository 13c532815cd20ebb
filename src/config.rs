//! # Service Configuration
//!
//! Everything the HTTP layer needs, resolved once at startup and handed to
//! the router as explicit state.
//!
//! Priority: CLI flags > environment > defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ALGO_CATALOG_BIND` | `0.0.0.0:5000` |
//! | `ALGO_CATALOG_MAX_BODY_BYTES` | `2097152` |
//! | `ALGO_CATALOG_RABIN_BASE` | `256` |
//! | `ALGO_CATALOG_RABIN_MODULUS` | `101` |
//! | `ALGO_CATALOG_LOG` | `info` |

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::text::RabinKarp;

pub const ENV_BIND: &str = "ALGO_CATALOG_BIND";
pub const ENV_MAX_BODY_BYTES: &str = "ALGO_CATALOG_MAX_BODY_BYTES";
pub const ENV_RABIN_BASE: &str = "ALGO_CATALOG_RABIN_BASE";
pub const ENV_RABIN_MODULUS: &str = "ALGO_CATALOG_RABIN_MODULUS";
pub const ENV_LOG: &str = "ALGO_CATALOG_LOG";

pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 5000));
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Runtime configuration for the algorithm service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: SocketAddr,
    /// Request bodies above this size are refused before parsing.
    pub max_body_bytes: usize,
    /// Hash parameters used by the `rabin` string endpoint.
    pub rabin_karp: RabinKarp,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            rabin_karp: RabinKarp::default(),
            log_filter: "info".to_owned(),
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a valid {expected}")]
    Unparseable { var: &'static str, value: String, expected: &'static str },

    #[error("max_body_bytes cannot be zero")]
    InvalidBodyLimit,

    #[error("rabin-karp base must be >= 1 and modulus >= 2 (got base={base}, modulus={modulus})")]
    InvalidRabinKarp { base: u64, modulus: u64 },
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, falling back to defaults per key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup(ENV_BIND) {
            Some(raw) => parse(ENV_BIND, &raw, "socket address")?,
            None => defaults.bind_address,
        };
        let max_body_bytes = match lookup(ENV_MAX_BODY_BYTES) {
            Some(raw) => parse(ENV_MAX_BODY_BYTES, &raw, "byte count")?,
            None => defaults.max_body_bytes,
        };
        let base = match lookup(ENV_RABIN_BASE) {
            Some(raw) => parse(ENV_RABIN_BASE, &raw, "unsigned integer")?,
            None => defaults.rabin_karp.base(),
        };
        let modulus = match lookup(ENV_RABIN_MODULUS) {
            Some(raw) => parse(ENV_RABIN_MODULUS, &raw, "unsigned integer")?,
            None => defaults.rabin_karp.modulus(),
        };
        let rabin_karp = RabinKarp::new(base, modulus)
            .ok_or(ConfigError::InvalidRabinKarp { base, modulus })?;
        let log_filter = lookup(ENV_LOG).unwrap_or(defaults.log_filter);

        let config = Self { bind_address, max_body_bytes, rabin_karp, log_filter };
        config.validate()?;
        Ok(config)
    }

    /// Replace the bind address (CLI `--bind`).
    pub fn with_bind(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.bind_address = parse("--bind", raw, "socket address")?;
        Ok(self)
    }

    /// Replace only the port (CLI `--port`).
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_address.set_port(port);
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidBodyLimit);
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, raw: &str, expected: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Unparseable {
        var,
        value: raw.to_owned(),
        expected,
    })
}
