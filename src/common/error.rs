//! Errors raised while building geometry or validating configuration.
//!
//! The per-frame physics itself is infallible: degenerate geometry is
//! treated as "no hit" rather than surfaced here.

use thiserror::Error;

/// Errors produced by constructors and config validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A box was given a zero, negative, or non-finite size
    #[error("box size must be positive and finite, got {width}x{height}")]
    NonPositiveSize {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },

    /// Paddle-hit speed multiplier would slow the ball down or is not a number
    #[error("speed multiplier must be finite and >= 1.0, got {0}")]
    InvalidMultiplier(f64),

    /// The resolution loop needs at least one pass per frame
    #[error("max_passes must be at least 1")]
    ZeroPassLimit,

    /// A tunable that must be a non-negative finite number
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeParameter {
        /// Config field name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PhysicsError>;
