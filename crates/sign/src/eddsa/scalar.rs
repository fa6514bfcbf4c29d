//! Scalar arithmetic modulo q = 2^252 + 27742317777372353535851937790883648493
//!
//! Scalars are four little-endian u64 limbs holding a value in [0, q).
//! Reduction of wide values is a plain shift-and-subtract over the bits of
//! the input; it runs a fixed number of iterations regardless of the value.

use super::constants::GROUP_ORDER;
use edblind_api::{Error, Result};
use edblind_internal::endian::{limbs_from_le_bytes, limbs_to_le_bytes, u64_from_le_bytes};
use edblind_params::SHA512_OUTPUT_SIZE;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// Scalar value modulo q
#[derive(Clone, Copy, Zeroize)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// Zero scalar
    pub const ZERO: Scalar = Scalar([0, 0, 0, 0]);

    /// One scalar
    pub const ONE: Scalar = Scalar([1, 0, 0, 0]);

    /// Create a scalar from a small integer
    pub fn from_u64(value: u64) -> Self {
        Scalar([value, 0, 0, 0])
    }

    /// Interpret 32 little-endian bytes as an integer and reduce it mod q
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let limbs = limbs_from_le_bytes(bytes);
        let mut wide = [0u64; 8];
        wide[..4].copy_from_slice(&limbs);
        Scalar(reduce_wide(&wide))
    }

    /// Interpret 64 little-endian bytes (a hash digest) as an integer and reduce it mod q
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let mut wide = [0u64; 8];
        for (i, limb) in wide.iter_mut().enumerate() {
            *limb = u64_from_le_bytes(bytes, i * 8);
        }
        Scalar(reduce_wide(&wide))
    }

    /// Decode a scalar that must already be reduced
    ///
    /// Returns `None` for encodings of values `>= q`.
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = limbs_from_le_bytes(bytes);
        let (_, borrow) = sub_limbs(&limbs, &GROUP_ORDER);
        if borrow == 1 {
            Some(Scalar(limbs))
        } else {
            None
        }
    }

    /// Little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs_to_le_bytes(&self.0)
    }

    /// Draw a random nonzero scalar
    ///
    /// Reads 64 bytes and reduces them mod q, so the bias is below 2^-250
    /// and exactly one read is made. A failing source, or one whose output
    /// reduces to zero, is reported as `RandomGeneration`; nothing retries.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; 64]);
        rng.try_fill_bytes(&mut bytes[..])
            .map_err(|e| Error::from(e).with_context("Scalar::random"))?;

        let scalar = Scalar::from_bytes_mod_order_wide(&bytes);
        if scalar.is_zero() {
            return Err(Error::random_generation(
                "Scalar::random",
                "random source produced a zero scalar",
            ));
        }
        Ok(scalar)
    }

    /// Add two scalars modulo q
    pub fn add(&self, other: &Scalar) -> Scalar {
        // Both operands are below q < 2^253, so the sum cannot carry out
        let (sum, _) = add_limbs(&self.0, &other.0);
        Scalar(reduce_once(sum))
    }

    /// Subtract two scalars modulo q
    pub fn sub(&self, other: &Scalar) -> Scalar {
        let (diff, borrow) = sub_limbs(&self.0, &other.0);
        let (wrapped, _) = add_limbs(&diff, &GROUP_ORDER);
        Scalar(select_limbs(&diff, &wrapped, Choice::from(borrow as u8)))
    }

    /// Multiply two scalars modulo q
    pub fn mul(&self, other: &Scalar) -> Scalar {
        Scalar(reduce_wide(&mul_wide(&self.0, &other.0)))
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Scalar::ZERO).into()
    }

    /// Bit `i` of the little-endian representation
    pub(crate) fn bit(&self, i: usize) -> u8 {
        ((self.0[i / 64] >> (i % 64)) & 1) as u8
    }
}

/// Hash the concatenation of `parts` with SHA-512 and reduce the digest mod q
///
/// This is a reduction of a wide hash, not a uniform sample; it is how
/// nonces and challenges are derived.
pub fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut digest = [0u8; SHA512_OUTPUT_SIZE];
    digest.copy_from_slice(&hasher.finalize());
    Scalar::from_bytes_mod_order_wide(&digest)
}

/// Returns (a + b, carry)
#[inline(always)]
fn add_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (s1, c1) = a[i].overflowing_add(b[i]);
        let (s2, c2) = s1.overflowing_add(carry);
        out[i] = s2;
        carry = (c1 | c2) as u64;
    }
    (out, carry)
}

/// Returns (a - b, borrow)
#[inline(always)]
fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    (out, borrow)
}

#[inline(always)]
fn select_limbs(a: &[u64; 4], b: &[u64; 4], choice: Choice) -> [u64; 4] {
    let mut out = [0u64; 4];
    for (i, limb) in out.iter_mut().enumerate() {
        *limb = u64::conditional_select(&a[i], &b[i], choice);
    }
    out
}

/// Subtract q once if the value is `>= q`; input must be below 2q
#[inline(always)]
fn reduce_once(value: [u64; 4]) -> [u64; 4] {
    let (diff, borrow) = sub_limbs(&value, &GROUP_ORDER);
    // borrow == 1 means value < q, keep it
    select_limbs(&diff, &value, Choice::from(borrow as u8))
}

/// Schoolbook 256x256 -> 512-bit product
fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let t = (a[i] as u128) * (b[j] as u128) + (out[i + j] as u128) + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }
        out[i + 4] = carry as u64;
    }
    out
}

/// Reduce a 512-bit value mod q, most significant bit first
fn reduce_wide(wide: &[u64; 8]) -> [u64; 4] {
    let mut r = [0u64; 4];
    for i in (0..512).rev() {
        let mut carry = (wide[i / 64] >> (i % 64)) & 1;
        // r < q < 2^253, so 2r + 1 fits in four limbs
        for limb in r.iter_mut() {
            let next = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        r = reduce_once(r);
    }
    r
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

// Scalars are frequently secret (keys, nonces, blinding factors)
impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Scalar(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edblind_params::ED25519_GROUP_ORDER;
    use proptest::prelude::*;
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn q_minus_one() -> Scalar {
        Scalar::ZERO.sub(&Scalar::ONE)
    }

    #[test]
    fn test_group_order_limbs_match_params() {
        assert_eq!(limbs_to_le_bytes(&GROUP_ORDER), ED25519_GROUP_ORDER);
    }

    #[test]
    fn test_scalar_arithmetic() {
        let two = Scalar::from_u64(2);
        let three = Scalar::from_u64(3);

        assert_eq!(two.add(&three), Scalar::from_u64(5));
        assert_eq!(three.sub(&two), Scalar::ONE);
        assert_eq!(two.mul(&three), Scalar::from_u64(6));
        assert_eq!(q_minus_one().add(&Scalar::ONE), Scalar::ZERO);
        assert_eq!(q_minus_one().mul(&q_minus_one()), Scalar::ONE);
    }

    #[test]
    fn test_scalar_reduction() {
        // q reduces to zero, q + 5 to five
        assert!(Scalar::from_bytes_mod_order(&ED25519_GROUP_ORDER).is_zero());

        let mut q_plus_five = ED25519_GROUP_ORDER;
        q_plus_five[0] += 5;
        assert_eq!(Scalar::from_bytes_mod_order(&q_plus_five), Scalar::from_u64(5));

        // 2^256 - 1 is below 16q, the result must be canonical
        let reduced = Scalar::from_bytes_mod_order(&[0xff; 32]);
        assert!(Scalar::from_canonical_bytes(&reduced.to_bytes()).is_some());
    }

    #[test]
    fn test_wide_reduction_matches_narrow() {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&[0xab; 32]);
        assert_eq!(
            Scalar::from_bytes_mod_order_wide(&wide),
            Scalar::from_bytes_mod_order(&[0xab; 32])
        );
    }

    #[test]
    fn test_canonical_decoding() {
        assert!(Scalar::from_canonical_bytes(&ED25519_GROUP_ORDER).is_none());
        assert!(Scalar::from_canonical_bytes(&[0xff; 32]).is_none());
        assert_eq!(
            Scalar::from_canonical_bytes(&q_minus_one().to_bytes()),
            Some(q_minus_one())
        );
    }

    #[test]
    fn test_hash_to_scalar_known_answer() {
        // SHA-512("abc") interpreted little-endian, reduced mod q
        let expected =
            hex::decode("d15dbef29abf1ff29f9cf91c4b75ee0bb1012cb031d9605d684e841df034de0b")
                .unwrap();
        assert_eq!(hash_to_scalar(&[b"abc"]).to_bytes().to_vec(), expected);
        assert_eq!(hash_to_scalar(&[b"a", b"bc"]), hash_to_scalar(&[b"abc"]));
    }

    #[test]
    fn test_random_scalars_are_valid_and_distinct() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let a = Scalar::random(&mut rng).unwrap();
        let b = Scalar::random(&mut rng).unwrap();
        assert!(!a.is_zero());
        assert!(Scalar::from_canonical_bytes(&a.to_bytes()).is_some());
        assert_ne!(a, b);

        let c = Scalar::random(&mut OsRng).unwrap();
        assert!(!c.is_zero());
    }

    #[test]
    fn test_random_reports_source_failure() {
        struct FailingRng;

        impl rand::RngCore for FailingRng {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0)
            }
            fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
                Err(rand::Error::new("entropy source unavailable"))
            }
        }
        impl rand::CryptoRng for FailingRng {}

        let err = Scalar::random(&mut FailingRng).unwrap_err();
        assert!(matches!(
            err,
            Error::RandomGeneration {
                context: "Scalar::random",
                ..
            }
        ));
    }

    #[test]
    fn test_random_rejects_constant_source() {
        // Succeeds on every call but only ever yields zero bytes
        struct ZeroRng {
            calls: usize,
        }

        impl rand::RngCore for ZeroRng {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0)
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
                self.calls += 1;
                dest.fill(0);
                Ok(())
            }
        }
        impl rand::CryptoRng for ZeroRng {}

        let mut rng = ZeroRng { calls: 0 };
        let err = Scalar::random(&mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::RandomGeneration {
                context: "Scalar::random",
                message: "random source produced a zero scalar".to_owned(),
            }
        );
        assert_eq!(rng.calls, 1, "a stuck source must not be polled again");
    }

    #[test]
    fn test_random_accepts_high_constant_source() {
        // All-ones input is far above q but still reduces to a usable scalar
        struct OnesRng;

        impl rand::RngCore for OnesRng {
            fn next_u32(&mut self) -> u32 {
                u32::MAX
            }
            fn next_u64(&mut self) -> u64 {
                u64::MAX
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0xff)
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
                dest.fill(0xff);
                Ok(())
            }
        }
        impl rand::CryptoRng for OnesRng {}

        let scalar = Scalar::random(&mut OnesRng).unwrap();
        assert_eq!(scalar, Scalar::from_bytes_mod_order_wide(&[0xff; 64]));
        assert!(Scalar::from_canonical_bytes(&scalar.to_bytes()).is_some());
    }

    proptest! {
        #[test]
        fn prop_add_sub_inverse(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let a = Scalar::from_bytes_mod_order(&a);
            let b = Scalar::from_bytes_mod_order(&b);
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }

        #[test]
        fn prop_mul_distributes_over_add(
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
            c in any::<[u8; 32]>(),
        ) {
            let a = Scalar::from_bytes_mod_order(&a);
            let b = Scalar::from_bytes_mod_order(&b);
            let c = Scalar::from_bytes_mod_order(&c);
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }
    }
}
