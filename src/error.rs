//! Error types for the confetti simulator.
//!
//! Stepping never fails. The only errors come from validating configuration
//! handed in by the host page, which happens before the simulator runs.

use std::fmt;

/// Errors produced when validating a [`ConfettiConfig`](crate::ConfettiConfig)
/// or a duration supplied at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Duration was zero or negative (milliseconds as supplied).
    NonPositiveDuration(i64),
    /// A probability-like value fell outside `[0, 1]`.
    OutOfUnitRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A scalar was negative, NaN or infinite where a finite non-negative value is required.
    InvalidScalar {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A random range was empty or started below its minimum.
    InvalidRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the range.
        range: String,
    },
    /// Particles would spawn above the culling boundary and vanish immediately.
    SpawnOutsideBounds {
        /// Configured spawn height.
        spawn_height: f32,
        /// Configured cull margin.
        cull_margin: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDuration(ms) => {
                write!(f, "Duration must be positive, got {}ms", ms)
            }
            ConfigError::OutOfUnitRange { name, value } => {
                write!(f, "`{}` must be within [0, 1], got {}", name, value)
            }
            ConfigError::InvalidScalar { name, value } => {
                write!(f, "`{}` must be finite and non-negative, got {}", name, value)
            }
            ConfigError::InvalidRange { name, range } => {
                write!(f, "`{}` must be a non-empty positive range, got {}", name, range)
            }
            ConfigError::SpawnOutsideBounds {
                spawn_height,
                cull_margin,
            } => write!(
                f,
                "Spawn height {} lies above the cull boundary (-{})",
                spawn_height, cull_margin
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_parameter() {
        let err = ConfigError::OutOfUnitRange {
            name: "spawn_chance",
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("spawn_chance"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_duration_message() {
        assert_eq!(
            ConfigError::NonPositiveDuration(-5).to_string(),
            "Duration must be positive, got -5ms"
        );
    }
}
