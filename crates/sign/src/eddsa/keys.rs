//! Secret key expansion and public key derivation

use super::point::{CompressedPoint, EdwardsPoint};
use super::scalar::Scalar;
use edblind_api::{validation, Result};
use edblind_params::{ED25519_SECRET_KEY_SIZE, SHA512_OUTPUT_SIZE};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key material expanded from a 32-byte seed
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedSecret {
    /// Clamped secret scalar, reduced modulo q
    pub(crate) scalar: Scalar,
    /// Upper half of the seed hash, used for nonce derivation
    pub(crate) prefix: [u8; 32],
}

impl ExpandedSecret {
    /// Secret scalar x
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Nonce prefix
    pub fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }
}

impl core::fmt::Debug for ExpandedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExpandedSecret").finish_non_exhaustive()
    }
}

/// Expand a seed into the secret scalar and nonce prefix
///
/// SHA-512 of the seed is split in half. The lower half is clamped
/// (bits 0..2 and 255 cleared, bit 254 set) and reduced modulo q.
pub fn expand_secret(seed: &[u8]) -> Result<ExpandedSecret> {
    validation::length("Ed25519 seed", seed.len(), ED25519_SECRET_KEY_SIZE)?;

    let mut hash = [0u8; SHA512_OUTPUT_SIZE];
    hash.copy_from_slice(&Sha512::digest(seed));

    let mut lower = [0u8; 32];
    lower.copy_from_slice(&hash[..32]);
    lower[0] &= 248;
    lower[31] &= 127;
    lower[31] |= 64;

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&hash[32..]);

    let expanded = ExpandedSecret {
        scalar: Scalar::from_bytes_mod_order(&lower),
        prefix,
    };

    hash.zeroize();
    lower.zeroize();

    Ok(expanded)
}

/// Public point P = x·G for a secret scalar
pub fn derive_public_point(scalar: &Scalar) -> EdwardsPoint {
    EdwardsPoint::mul_base(scalar)
}

/// Compressed public key for a secret scalar
pub fn derive_public(scalar: &Scalar) -> CompressedPoint {
    derive_public_point(scalar).compress()
}

#[cfg(test)]
mod tests {
    use super::*;
    use edblind_api::Error;

    #[test]
    fn test_expand_secret_rejects_wrong_length() {
        for len in [0usize, 31, 33, 64] {
            let seed = vec![7u8; len];
            let err = expand_secret(&seed).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidLength {
                    context: "Ed25519 seed",
                    expected: 32,
                    actual: len,
                }
            );
        }
    }

    #[test]
    fn test_expand_secret_is_deterministic() {
        let a = expand_secret(&[1u8; 32]).unwrap();
        let b = expand_secret(&[1u8; 32]).unwrap();
        let c = expand_secret(&[2u8; 32]).unwrap();

        assert_eq!(a.scalar, b.scalar);
        assert_eq!(a.prefix, b.prefix);
        assert_ne!(a.scalar, c.scalar);
        assert_ne!(a.prefix, c.prefix);
    }

    #[test]
    fn test_rfc8032_public_key() {
        let seed =
            hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
                .unwrap();
        let expanded = expand_secret(&seed).unwrap();
        let public = derive_public(expanded.scalar());

        assert_eq!(
            hex::encode(public.to_bytes()),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let expanded = expand_secret(&[9u8; 32]).unwrap();
        let rendered = format!("{:?}", expanded);
        assert_eq!(rendered, "ExpandedSecret { .. }");
    }
}
