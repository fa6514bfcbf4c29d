//! # edblind
//!
//! Ed25519 signatures and a three-move blind signature protocol whose
//! output verifies as an ordinary Ed25519 signature.
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: serialization of public keys, signatures and protocol messages
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edblind-api`]: Error type and the `Signature` trait
//! - [`edblind-internal`]: Constant-time and byte-order helpers
//! - [`edblind-params`]: Sizes and curve constants
//! - [`edblind-sign`]: Curve arithmetic, Ed25519 and the blind protocol

#![cfg_attr(not(feature = "std"), no_std)]

pub use edblind_api as api;
pub use edblind_internal as internal;
pub use edblind_params as params;
pub use edblind_sign as sign;

// RNG traits and sources accepted by `keypair`, `commit` and `blind`
pub use rand;

/// Common imports for edblind users
pub mod prelude {
    pub use crate::api::{Error, Result, Signature};

    pub use crate::sign::blind::{
        Challenge, Commitment, Issuer, IssuerSession, ProtocolState, Response, SignedSession, User,
        UserSession,
    };
    pub use crate::sign::eddsa::{
        secret_to_public, sign, verify, Ed25519, Ed25519PublicKey, Ed25519SecretKey,
        Ed25519Signature,
    };
}
