//! Trait definitions for the edblind signature schemes

pub mod signature;

pub use signature::Signature;
