//! Public API traits and types for the edblind library
//!
//! This crate provides the public API surface shared by the edblind crates:
//! the error type, the `Result` alias, and the signature trait implemented
//! by the Ed25519 scheme.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validation, Error, Result};
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::signature;
