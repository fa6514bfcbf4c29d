//! Ed25519 over the twisted Edwards form of Curve25519
//!
//! The arithmetic layers are public so the blind protocol, and callers who
//! need them, can work with scalars and points directly.
//!
//! # Example
//!
//! ```
//! use edblind_sign::eddsa::Ed25519;
//! use edblind_api::Signature;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> edblind_api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = Ed25519::keypair(&mut rng)?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign(message, &secret_key)?;
//!
//! assert!(Ed25519::verify(message, &signature, &public_key)?);
//! # Ok(())
//! # }
//! ```

pub(crate) mod constants;
pub mod ed25519;
pub mod field;
pub mod keys;
pub mod point;
pub mod scalar;

pub use ed25519::{
    secret_to_public, sign, verify, Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature,
};
pub use field::FieldElement;
pub use keys::{derive_public, expand_secret, ExpandedSecret};
pub use point::{CompressedPoint, EdwardsPoint};
pub use scalar::{hash_to_scalar, Scalar};
