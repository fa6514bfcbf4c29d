//! Error handling for the edblind crates

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

pub use validate as validation;

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGeneration {
            context: "secure random source",
            message: e.to_string(),
        }
    }
}
