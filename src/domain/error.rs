//! Error types for the simulator.

use thiserror::Error;

/// Contract violations the simulator reports instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A simulation was asked to run backwards.
    #[error("iteration count must be non-negative, got {0}")]
    NegativeIterations(i64),

    /// No seed pattern registered under this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A value that could not be parsed or is out of range.
    #[error("invalid value for {name}: {value}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

impl LifeError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LifeError::NegativeIterations(-3).to_string(),
            "iteration count must be non-negative, got -3"
        );
        assert_eq!(
            LifeError::invalid("density", "1.5").to_string(),
            "invalid value for density: 1.5"
        );
    }
}
