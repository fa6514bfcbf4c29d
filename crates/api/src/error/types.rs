//! Error type definitions for signature and protocol operations

use thiserror::Error as ThisError;

/// Primary error type for edblind operations
///
/// Cryptographic rejection is not an error: verification reports an
/// invalid signature as `Ok(false)`. The variants below cover malformed
/// input and failures of the environment.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Seed, key, signature, or protocol message of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Encoding does not decompress to a curve point
    #[error("Invalid point: {context}")]
    InvalidPoint { context: &'static str },

    /// Scalar encoding is not reduced modulo the group order
    #[error("Invalid scalar: {context}")]
    InvalidScalar { context: &'static str },

    /// The secure random source could not produce output
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// A protocol response failed its consistency check
    #[error("Invalid signature: {context}")]
    InvalidSignature { context: &'static str },
}

/// Result type for edblind operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Random source produced output that cannot be used
    pub fn random_generation(context: &'static str, message: &str) -> Self {
        Self::RandomGeneration {
            context,
            message: message.to_owned(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidScalar { .. } => Self::InvalidScalar { context },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
        }
    }

    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidPoint { context }
            | Self::InvalidScalar { context }
            | Self::RandomGeneration { context, .. }
            | Self::InvalidSignature { context } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_sizes() {
        let err = Error::InvalidLength {
            context: "Ed25519 seed",
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "Ed25519 seed: invalid length (expected 32, got 31)"
        );
    }

    #[test]
    fn test_with_context_keeps_payload() {
        let err = Error::RandomGeneration {
            context: "a",
            message: "entropy unavailable".into(),
        }
        .with_context("blind commit");

        assert_eq!(err.context(), "blind commit");
        assert!(matches!(
            err,
            Error::RandomGeneration { ref message, .. } if message == "entropy unavailable"
        ));
    }

    #[test]
    fn test_random_generation_constructor() {
        let err = Error::random_generation("Scalar::random", "zero scalar");
        assert_eq!(
            err,
            Error::RandomGeneration {
                context: "Scalar::random",
                message: "zero scalar".to_owned(),
            }
        );
    }
}
