//! Issuer side of the blind signature protocol

use super::messages::{Challenge, Commitment, Response};
use super::ProtocolState;
use crate::eddsa::{Ed25519PublicKey, Ed25519SecretKey, EdwardsPoint, Scalar};
use edblind_api::Result;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Signer holding the secret key
///
/// The issuer never sees the message being signed. It only answers a
/// blinded challenge for a commitment it produced.
#[derive(Clone)]
pub struct Issuer {
    secret_key: Ed25519SecretKey,
}

/// Issuer state between commit and respond
///
/// Holds the one-time nonce k. Responding consumes the session, so a nonce
/// can never answer two challenges.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct IssuerSession {
    k: Scalar,
    x: Scalar,
}

impl Issuer {
    /// Create an issuer for a secret key
    pub fn new(secret_key: &Ed25519SecretKey) -> Self {
        Issuer {
            secret_key: secret_key.clone(),
        }
    }

    /// Public key the resulting signatures verify under
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.secret_key.public_key()
    }

    /// First move: draw a fresh nonce k and publish R = k·G
    pub fn commit<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(IssuerSession, Commitment)> {
        let k = Scalar::random(rng).map_err(|e| e.with_context("Issuer::commit"))?;
        let commitment = Commitment::from_point(&EdwardsPoint::mul_base(&k));

        let session = IssuerSession {
            k,
            x: *self.secret_key.scalar(),
        };
        debug!(state = %session.state(), "issuer committed");

        Ok((session, commitment))
    }
}

impl IssuerSession {
    /// Current protocol state
    pub fn state(&self) -> ProtocolState {
        ProtocolState::InitialCommit
    }

    /// Third move: answer the blinded challenge with s = k + e·x
    ///
    /// Fails with `InvalidScalar` if the challenge is not reduced modulo q.
    pub fn respond(self, challenge: &Challenge) -> Result<Response> {
        let e = challenge.to_scalar()?;
        let s = self.k.add(&e.mul(&self.x));

        debug!("issuer responded");
        Ok(Response::from_scalar(&s))
    }
}

impl core::fmt::Debug for IssuerSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IssuerSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for Issuer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Issuer")
            .field("public_key", &self.public_key())
            .finish()
    }
}
