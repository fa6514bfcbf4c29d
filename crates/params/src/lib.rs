//! Constant values for the edblind library
//!
//! Sizes and byte-level encodings shared by the signature crate and its
//! callers. Arithmetic representations of these constants live next to the
//! arithmetic that consumes them.

#![no_std]

pub mod traditional;
pub mod utils;

pub use traditional::blind::*;
pub use traditional::ed25519::*;
pub use utils::hash::*;
