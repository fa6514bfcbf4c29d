//! Three-move blind Schnorr signatures over Ed25519
//!
//! The issuer signs a message it never sees; the user ends up with an
//! ordinary Ed25519 signature the issuer cannot link to the session.
//!
//! ```text
//! Issuer                                  User
//! k <- random, R = k·G
//!                 ---- R (Commitment) ---->
//!                                         a, b <- random
//!                                         R' = R + a·G + b·P
//!                                         e  = H(R' ‖ M) + b
//!                 <---- e (Challenge) -----
//! s = k + e·x
//!                 ---- s (Response) ------>
//!                                         check s·G == R + e·P
//!                                         signature = R' ‖ (s + a)
//! ```
//!
//! Session states: `IssuerSession` is `InitialCommit`, `UserSession` is
//! `Blinded`, and `SignedSession` (after `UserSession::receive`) is `Signed`.
//!
//! Each move consumes the session produced by the previous one, so a
//! nonce or blinding factor is used at most once.
//!
//! # Example
//!
//! ```
//! use edblind_sign::blind::{Issuer, User};
//! use edblind_sign::eddsa::{verify, Ed25519SecretKey};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> edblind_api::Result<()> {
//! let mut rng = OsRng;
//! let secret_key = Ed25519SecretKey::from_seed(&[7u8; 32])?;
//! let issuer = Issuer::new(&secret_key);
//! let user = User::new(&issuer.public_key())?;
//!
//! let (issuer_session, commitment) = issuer.commit(&mut rng)?;
//! let (user_session, challenge) = user.blind(&commitment, b"ballot", &mut rng)?;
//! let response = issuer_session.respond(&challenge)?;
//! let signature = user_session.unblind(&response)?;
//!
//! assert!(verify(&issuer.public_key().to_bytes(), b"ballot", &signature.to_bytes())?);
//! # Ok(())
//! # }
//! ```

mod issuer;
mod messages;
mod user;

pub use issuer::{Issuer, IssuerSession};
pub use messages::{Challenge, Commitment, Response};
pub use user::{SignedSession, User, UserSession};

/// Position of a session in the protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolState {
    /// Issuer has committed to its nonce
    InitialCommit,
    /// User has sent the blinded challenge
    Blinded,
    /// User holds a verified issuer response, ready to unblind
    Signed,
}

impl core::fmt::Display for ProtocolState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ProtocolState::InitialCommit => "initial-commit",
            ProtocolState::Blinded => "blinded",
            ProtocolState::Signed => "signed",
        };
        f.write_str(name)
    }
}
