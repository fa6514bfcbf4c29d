//! Internal utilities shared by the edblind crates
//!
//! Nothing here is part of the public cryptographic API.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;
