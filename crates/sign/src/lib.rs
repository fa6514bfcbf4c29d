//! Ed25519 and blind Ed25519 signatures
//!
//! This crate implements the curve arithmetic, Ed25519 signing and
//! verification, and a three-move blind signature protocol whose output is
//! an ordinary Ed25519 signature.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod blind;
pub mod eddsa;

pub use blind::{
    Challenge, Commitment, Issuer, IssuerSession, ProtocolState, Response, SignedSession, User,
    UserSession,
};
pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
