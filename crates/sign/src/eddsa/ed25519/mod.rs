//! Ed25519 signatures with a deterministic nonce
//!
//! A signature over `message` is `compress(R) ‖ s` where
//! `r = H(prefix ‖ message) mod q`, `R = r·G`, `h = H(compress(R) ‖ message) mod q`
//! and `s = r + h·x mod q`. The challenge binds only the commitment and the
//! message, so signatures produced by the blind protocol verify here unchanged.

use super::keys::{derive_public, expand_secret, ExpandedSecret};
use super::point::{CompressedPoint, EdwardsPoint};
use super::scalar::{hash_to_scalar, Scalar};
use edblind_api::{validation, Error, Result, Signature as SignatureTrait};
use edblind_params::{ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SIGNATURE_SIZE};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

/// Ed25519 signature scheme
pub struct Ed25519;

/// Ed25519 public key (compressed point, 32 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

impl core::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Ed25519PublicKey")
            .field(&CompressedPoint(self.0))
            .finish()
    }
}

/// Ed25519 secret key
///
/// Holds the seed together with its expansion and the matching public key.
/// Only the seed needs to be stored for persistence.
#[derive(Clone)]
pub struct Ed25519SecretKey {
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    expanded: ExpandedSecret,
    public: Ed25519PublicKey,
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.expanded.zeroize();
    }
}

impl Drop for Ed25519SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// Ed25519 signature (64 bytes: R || s)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ed25519Signature(")?;
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Ed25519PublicKey {
    /// Create a public key from bytes
    ///
    /// Only the length is checked here; an encoding that is not a curve
    /// point makes verification return `false`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::fixed("Ed25519 public key", bytes).map(Ed25519PublicKey)
    }

    /// Convert public key to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Decompress to the public point P
    pub fn to_point(&self) -> Result<EdwardsPoint> {
        CompressedPoint(self.0)
            .decompress()
            .map_err(|e| e.with_context("Ed25519 public key"))
    }
}

impl Ed25519SecretKey {
    /// Create a secret key from a 32-byte seed
    pub fn from_seed(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> Result<Self> {
        let expanded = expand_secret(seed)?;
        let public = Ed25519PublicKey(derive_public(&expanded.scalar).to_bytes());

        Ok(Ed25519SecretKey {
            seed: *seed,
            expanded,
            public,
        })
    }

    /// Create a secret key from a seed slice, checking its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let seed = Zeroizing::new(validation::fixed::<ED25519_SECRET_KEY_SIZE>(
            "Ed25519 seed",
            bytes,
        )?);
        Self::from_seed(&seed)
    }

    /// Get the 32-byte seed value
    pub fn seed(&self) -> &[u8; ED25519_SECRET_KEY_SIZE] {
        &self.seed
    }

    /// Get the public key corresponding to this secret key
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.expanded.scalar
    }
}

impl Ed25519Signature {
    /// Create a signature from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::fixed("Ed25519 signature", bytes).map(Ed25519Signature)
    }

    /// Convert signature to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.0
    }

    /// Assemble a signature from its commitment and response
    pub(crate) fn from_parts(r: &CompressedPoint, s: &Scalar) -> Self {
        let mut bytes = [0u8; ED25519_SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(r.as_bytes());
        bytes[32..].copy_from_slice(&s.to_bytes());
        Ed25519Signature(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ed25519Signature {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        struct SignatureVisitor;

        impl<'de> serde::de::Visitor<'de> for SignatureVisitor {
            type Value = Ed25519Signature;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} signature bytes", ED25519_SIGNATURE_SIZE)
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                v: &[u8],
            ) -> core::result::Result<Self::Value, E> {
                Ed25519Signature::from_bytes(v).map_err(E::custom)
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> core::result::Result<Self::Value, A::Error> {
                let mut bytes = [0u8; ED25519_SIGNATURE_SIZE];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Ed25519Signature(bytes))
            }
        }

        deserializer.deserialize_bytes(SignatureVisitor)
    }
}

/// Challenge h = H(compress(R) ‖ message) mod q
pub(crate) fn challenge(r: &CompressedPoint, message: &[u8]) -> Scalar {
    hash_to_scalar(&[&r.as_bytes()[..], message])
}

fn sign_expanded(expanded: &ExpandedSecret, message: &[u8]) -> Ed25519Signature {
    let r = Zeroizing::new(hash_to_scalar(&[&expanded.prefix[..], message]));
    let big_r = EdwardsPoint::mul_base(&r).compress();
    let h = challenge(&big_r, message);
    let s = r.add(&h.mul(&expanded.scalar));

    trace!(message_len = message.len(), "produced Ed25519 signature");
    Ed25519Signature::from_parts(&big_r, &s)
}

/// Check s·G == R + h·A for a decoded public point
pub(crate) fn verify_with_point(
    public: &EdwardsPoint,
    message: &[u8],
    signature: &Ed25519Signature,
) -> bool {
    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature.0[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature.0[32..]);

    let compressed_r = CompressedPoint(r_bytes);
    let r = match compressed_r.decompress() {
        Ok(point) => point,
        Err(e) => {
            debug!(error = %e, "signature commitment does not decode");
            return false;
        }
    };

    let s = match Scalar::from_canonical_bytes(&s_bytes) {
        Some(s) => s,
        None => {
            debug!("signature response is not reduced modulo the group order");
            return false;
        }
    };

    let h = challenge(&compressed_r, message);
    let lhs = EdwardsPoint::mul_base(&s);
    let rhs = r.add(&public.scalar_mul(&h));

    lhs.equals(&rhs)
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;

    fn name() -> &'static str {
        "Ed25519"
    }

    /// Generate an Ed25519 key pair from 32 random seed bytes
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)> {
        let mut seed = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        rng.try_fill_bytes(&mut seed[..])
            .map_err(|e| Error::from(e).with_context("Ed25519 keypair generation"))?;

        let secret = Ed25519SecretKey::from_seed(&seed)?;
        debug!("generated Ed25519 key pair");
        Ok((secret.public_key(), secret))
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        Ok(sign_expanded(&secret_key.expanded, message))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool> {
        let public = match public_key.to_point() {
            Ok(point) => point,
            Err(e) => {
                debug!(error = %e, "public key does not decode");
                return Ok(false);
            }
        };

        Ok(verify_with_point(&public, message, signature))
    }
}

/// Compressed public key for a 32-byte seed
pub fn secret_to_public(seed: &[u8]) -> Result<[u8; ED25519_PUBLIC_KEY_SIZE]> {
    let expanded = expand_secret(seed)?;
    Ok(derive_public(&expanded.scalar).to_bytes())
}

/// Sign a message with a 32-byte seed
pub fn sign(seed: &[u8], message: &[u8]) -> Result<[u8; ED25519_SIGNATURE_SIZE]> {
    let expanded = expand_secret(seed)?;
    Ok(sign_expanded(&expanded, message).to_bytes())
}

/// Verify a signature over a message
///
/// Wrong input lengths are errors. Everything else that fails, whether a
/// point that does not decode, a response not below q, or an unsatisfied
/// equation, yields `Ok(false)`.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let public_key = Ed25519PublicKey::from_bytes(public_key)?;
    let signature = Ed25519Signature::from_bytes(signature)?;
    Ed25519::verify(message, &signature, &public_key)
}
