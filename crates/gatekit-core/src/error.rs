//! Wrap-time configuration errors.
//!
//! Gates validate their configuration when they are constructed, never
//! when they are called. Failures of the wrapped callable itself are not
//! modelled here: they propagate as panics to whichever caller (or
//! scheduler tick) triggered the forwarded invocation.

use thiserror::Error;

/// Errors raised while constructing a gate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Call-count thresholds must be non-negative.
    #[error("threshold must be a non-negative integer, got {n}")]
    NegativeThreshold { n: i64 },
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
