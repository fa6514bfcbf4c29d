//! Constants for Edwards-curve signatures

pub mod blind;
pub mod ed25519;
