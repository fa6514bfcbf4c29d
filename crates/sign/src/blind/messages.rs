//! Wire messages exchanged between issuer and user
//!
//! Only these three values ever cross the boundary. The message, the
//! blinded commitment and the blinding factors stay with the user.

use crate::eddsa::{CompressedPoint, EdwardsPoint, Scalar};
use edblind_api::{validation, Error, Result};
use edblind_params::{BLIND_CHALLENGE_SIZE, BLIND_COMMITMENT_SIZE, BLIND_RESPONSE_SIZE};

/// Issuer commitment R = k·G (compressed point)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commitment(pub [u8; BLIND_COMMITMENT_SIZE]);

/// Blinded challenge e (scalar)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Challenge(pub [u8; BLIND_CHALLENGE_SIZE]);

/// Issuer response s = k + e·x (scalar)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response(pub [u8; BLIND_RESPONSE_SIZE]);

impl Commitment {
    /// Parse a commitment, checking its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::fixed("blind commitment", bytes).map(Commitment)
    }

    /// Convert commitment to bytes
    pub fn to_bytes(&self) -> [u8; BLIND_COMMITMENT_SIZE] {
        self.0
    }

    pub(crate) fn from_point(point: &EdwardsPoint) -> Self {
        Commitment(point.compress().to_bytes())
    }

    pub(crate) fn to_point(&self) -> Result<EdwardsPoint> {
        CompressedPoint(self.0)
            .decompress()
            .map_err(|e| e.with_context("blind commitment"))
    }
}

impl Challenge {
    /// Parse a challenge, checking its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::fixed("blind challenge", bytes).map(Challenge)
    }

    /// Convert challenge to bytes
    pub fn to_bytes(&self) -> [u8; BLIND_CHALLENGE_SIZE] {
        self.0
    }

    pub(crate) fn from_scalar(scalar: &Scalar) -> Self {
        Challenge(scalar.to_bytes())
    }

    pub(crate) fn to_scalar(&self) -> Result<Scalar> {
        Scalar::from_canonical_bytes(&self.0).ok_or(Error::InvalidScalar {
            context: "blind challenge",
        })
    }
}

impl Response {
    /// Parse a response, checking its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::fixed("blind response", bytes).map(Response)
    }

    /// Convert response to bytes
    pub fn to_bytes(&self) -> [u8; BLIND_RESPONSE_SIZE] {
        self.0
    }

    pub(crate) fn from_scalar(scalar: &Scalar) -> Self {
        Response(scalar.to_bytes())
    }

    pub(crate) fn to_scalar(&self) -> Result<Scalar> {
        Scalar::from_canonical_bytes(&self.0).ok_or(Error::InvalidScalar {
            context: "blind response",
        })
    }
}
