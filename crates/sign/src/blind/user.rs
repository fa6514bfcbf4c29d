//! User side of the blind signature protocol

use super::messages::{Challenge, Commitment, Response};
use super::ProtocolState;
use crate::eddsa::ed25519::challenge;
use crate::eddsa::{Ed25519PublicKey, Ed25519Signature, EdwardsPoint, Scalar};
use edblind_api::{Error, Result};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Requester of a blind signature under a fixed issuer key
#[derive(Clone, Debug)]
pub struct User {
    public_key: Ed25519PublicKey,
    public: EdwardsPoint,
}

/// User state between blind and unblind
///
/// Keeps the blinding scalar a and the blinded commitment R'. The issuer's
/// commitment R and the sent challenge e are kept to check the response.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct UserSession {
    a: Scalar,
    e: Scalar,
    commitment: EdwardsPoint,
    blinded_commitment: EdwardsPoint,
    public: EdwardsPoint,
}

/// User state after an issuer response has passed its consistency check
///
/// Holds s and a until they are combined into the final signature.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SignedSession {
    s: Scalar,
    a: Scalar,
    blinded_commitment: EdwardsPoint,
}

impl User {
    /// Create a user for an issuer public key
    ///
    /// Fails with `InvalidPoint` if the key does not decode.
    pub fn new(public_key: &Ed25519PublicKey) -> Result<Self> {
        Ok(User {
            public_key: *public_key,
            public: public_key.to_point()?,
        })
    }

    /// Issuer public key
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Second move: blind the issuer's commitment for `message`
    ///
    /// Draws a and b, forms R' = R + a·G + b·P and sends
    /// e = H(compress(R') ‖ message) + b.
    pub fn blind<R: CryptoRng + RngCore>(
        &self,
        commitment: &Commitment,
        message: &[u8],
        rng: &mut R,
    ) -> Result<(UserSession, Challenge)> {
        let r = commitment.to_point()?;

        let a = Scalar::random(rng).map_err(|e| e.with_context("User::blind"))?;
        let mut b = Scalar::random(rng).map_err(|e| e.with_context("User::blind"))?;

        let blinded_commitment = r
            .add(&EdwardsPoint::mul_base(&a))
            .add(&self.public.scalar_mul(&b));
        let e = challenge(&blinded_commitment.compress(), message).add(&b);
        b.zeroize();

        let session = UserSession {
            a,
            e,
            commitment: r,
            blinded_commitment,
            public: self.public,
        };
        debug!(state = %session.state(), message_len = message.len(), "user blinded commitment");

        Ok((session, Challenge::from_scalar(&e)))
    }
}

impl UserSession {
    /// Current protocol state
    pub fn state(&self) -> ProtocolState {
        ProtocolState::Blinded
    }

    /// Accept the issuer's response s
    ///
    /// The response must satisfy s·G == R + e·P, otherwise `InvalidSignature`
    /// is returned and the session is consumed without producing anything.
    pub fn receive(self, response: &Response) -> Result<SignedSession> {
        let s = response.to_scalar()?;

        let lhs = EdwardsPoint::mul_base(&s);
        let rhs = self.commitment.add(&self.public.scalar_mul(&self.e));
        if !lhs.equals(&rhs) {
            debug!("issuer response failed the consistency check");
            return Err(Error::InvalidSignature {
                context: "blind response",
            });
        }

        let session = SignedSession {
            s,
            a: self.a,
            blinded_commitment: self.blinded_commitment,
        };
        debug!(state = %session.state(), "user accepted response");

        Ok(session)
    }

    /// Accept the response and unblind it in one step
    pub fn unblind(self, response: &Response) -> Result<Ed25519Signature> {
        self.receive(response).map(SignedSession::unblind)
    }
}

impl SignedSession {
    /// Current protocol state
    pub fn state(&self) -> ProtocolState {
        ProtocolState::Signed
    }

    /// Final local step: `compress(R') ‖ (s + a)`
    ///
    /// The result is an ordinary Ed25519 signature over the blinded message.
    pub fn unblind(self) -> Ed25519Signature {
        let unblinded = self.s.add(&self.a);
        debug!("user unblinded signature");

        Ed25519Signature::from_parts(&self.blinded_commitment.compress(), &unblinded)
    }
}

impl core::fmt::Debug for SignedSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignedSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for UserSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
