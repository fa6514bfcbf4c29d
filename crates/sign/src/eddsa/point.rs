//! Edwards curve point operations for Ed25519
//!
//! This module implements point arithmetic on the twisted Edwards curve
//! -x² + y² = 1 + d·x²·y² where d = -121665/121666, in extended
//! coordinates (X:Y:Z:T) with x = X/Z, y = Y/Z, x·y = T/Z.

use super::constants::{BASE_T, BASE_X, BASE_Y, D, D2};
use super::field::FieldElement;
use super::scalar::Scalar;
use edblind_api::{Error, Result};
use edblind_internal::constant_time::{ct_eq, ct_select};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Point on the twisted Edwards curve
#[derive(Clone, Copy, Zeroize)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Compressed point representation (32 bytes)
///
/// Little-endian y with the low bit of x in bit 255.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct CompressedPoint(pub [u8; 32]);

impl EdwardsPoint {
    /// Identity element (0, 1, 1, 0)
    pub const IDENTITY: EdwardsPoint = EdwardsPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Base point generator G
    pub const BASEPOINT: EdwardsPoint = EdwardsPoint {
        x: BASE_X,
        y: BASE_Y,
        z: FieldElement::ONE,
        t: BASE_T,
    };

    /// Add two points
    ///
    /// Unified formula (add-2008-hwcd-3 with k = 2d): valid for doubling and
    /// for the identity on either side, no case analysis needed.
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&D2).mul(&other.t);
        let d = self.z.double().mul(&other.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Double a point (dbl-2008-hwcd for a = -1)
    pub fn double(&self) -> EdwardsPoint {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let h = a.add(&b);
        let e = h.sub(&self.x.add(&self.y).square());
        let g = a.sub(&b);
        let f = c.add(&g);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Negate a point: (x, y) -> (-x, y)
    pub fn neg(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Scalar multiplication using double-and-add, least significant bit first
    pub fn scalar_mul(&self, scalar: &Scalar) -> EdwardsPoint {
        let mut result = EdwardsPoint::IDENTITY;
        let mut addend = *self;

        for i in 0..256 {
            let sum = result.add(&addend);
            result = EdwardsPoint::conditional_select(&result, &sum, Choice::from(scalar.bit(i)));
            addend = addend.double();
        }

        result
    }

    /// Scalar multiplication of the base point
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        EdwardsPoint::BASEPOINT.scalar_mul(scalar)
    }

    /// Group equality without normalizing either point
    ///
    /// X1·Z2 == X2·Z1 and Y1·Z2 == Y2·Z1.
    pub fn equals(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }

    /// Compress point to 32 bytes
    pub fn compress(&self) -> CompressedPoint {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);

        let mut bytes = y.to_bytes();
        bytes[31] |= x.is_negative() << 7;

        CompressedPoint(bytes)
    }

    /// Check the curve equation in projective form:
    /// (-X² + Y²)·Z² = Z⁴ + d·X²·Y² and X·Y = Z·T
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&D.mul(&xx).mul(&yy));
        let extended = self.x.mul(&self.y) == self.z.mul(&self.t);

        lhs == rhs && extended
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1z2 = self.x.mul(&other.z);
        let x2z1 = other.x.mul(&self.z);
        let y1z2 = self.y.mul(&other.z);
        let y2z1 = other.y.mul(&self.z);

        x1z2.ct_eq(&x2z1) & y1z2.ct_eq(&y2z1)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl core::fmt::Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("EdwardsPoint")
            .field(&self.compress())
            .finish()
    }
}

impl CompressedPoint {
    /// Create from bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        CompressedPoint(*bytes)
    }

    /// Get bytes
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Borrow the encoding
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Decompress to point
    ///
    /// Fails with `InvalidPoint` when the encoded y is not below p or when
    /// no x satisfies the curve equation with the requested sign.
    pub fn decompress(&self) -> Result<EdwardsPoint> {
        let sign = self.0[31] >> 7;
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes);
        if !ct_eq(y.to_bytes(), y_bytes) {
            return Err(Error::InvalidPoint {
                context: "y coordinate is not below p",
            });
        }

        let x = recover_x(&y, sign).ok_or(Error::InvalidPoint {
            context: "no x coordinate for y",
        })?;

        Ok(EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        })
    }
}

impl core::fmt::Debug for CompressedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedPoint(")?;
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// Recover x from y and the requested low bit, or `None` if there is none
fn recover_x(y: &FieldElement, sign: u8) -> Option<FieldElement> {
    let yy = y.square();
    let u = yy.sub(&FieldElement::ONE);
    // d·y² + 1 never vanishes: -1/d is not a square
    let v = D.mul(&yy).add(&FieldElement::ONE);
    let x2 = u.mul(&v.invert());

    if x2.is_zero() {
        return if sign == 1 {
            None
        } else {
            Some(FieldElement::ZERO)
        };
    }

    let x = x2.sqrt()?;
    let flip = Choice::from(x.is_negative() ^ sign);
    Some(ct_select(x, x.neg(), flip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edblind_params::{ED25519_BASEPOINT_COMPRESSED, ED25519_FIELD_PRIME};
    use proptest::prelude::*;

    fn naive_mul(n: u64, point: &EdwardsPoint) -> EdwardsPoint {
        let mut acc = EdwardsPoint::IDENTITY;
        for _ in 0..n {
            acc = acc.add(point);
        }
        acc
    }

    #[test]
    fn test_basepoint_encoding() {
        assert!(EdwardsPoint::BASEPOINT.is_on_curve());
        assert_eq!(
            EdwardsPoint::BASEPOINT.compress().to_bytes(),
            ED25519_BASEPOINT_COMPRESSED
        );
        let decoded = CompressedPoint(ED25519_BASEPOINT_COMPRESSED)
            .decompress()
            .unwrap();
        assert_eq!(decoded, EdwardsPoint::BASEPOINT);
    }

    #[test]
    fn test_identity_laws() {
        let g = EdwardsPoint::BASEPOINT;
        assert_eq!(g.add(&EdwardsPoint::IDENTITY), g);
        assert_eq!(EdwardsPoint::IDENTITY.add(&g), g);
        assert_eq!(g.add(&g.neg()), EdwardsPoint::IDENTITY);
        assert_eq!(EdwardsPoint::IDENTITY.double(), EdwardsPoint::IDENTITY);

        let mut identity = [0u8; 32];
        identity[0] = 1;
        assert_eq!(EdwardsPoint::IDENTITY.compress().to_bytes(), identity);
    }

    #[test]
    fn test_double_matches_add() {
        let mut p = EdwardsPoint::BASEPOINT;
        for _ in 0..8 {
            let doubled = p.double();
            assert_eq!(doubled, p.add(&p));
            assert!(doubled.is_on_curve());
            p = doubled.add(&EdwardsPoint::BASEPOINT);
        }
    }

    #[test]
    fn test_two_g_known_answer() {
        let expected =
            hex::decode("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022")
                .unwrap();
        let two_g = EdwardsPoint::BASEPOINT.double();
        assert_eq!(two_g.compress().to_bytes().to_vec(), expected);
    }

    #[test]
    fn test_scalar_mul_small_values() {
        let g = EdwardsPoint::BASEPOINT;
        assert_eq!(g.scalar_mul(&Scalar::ZERO), EdwardsPoint::IDENTITY);
        assert_eq!(g.scalar_mul(&Scalar::ONE), g);
        for n in [2u64, 3, 7, 16, 31] {
            assert_eq!(g.scalar_mul(&Scalar::from_u64(n)), naive_mul(n, &g));
        }
    }

    #[test]
    fn test_group_order_annihilates_basepoint() {
        // q - 1 times G plus G is the identity
        let q_minus_one = Scalar::ZERO.sub(&Scalar::ONE);
        let p = EdwardsPoint::mul_base(&q_minus_one);
        assert_eq!(p, EdwardsPoint::BASEPOINT.neg());
        assert_eq!(p.add(&EdwardsPoint::BASEPOINT), EdwardsPoint::IDENTITY);
    }

    #[test]
    fn test_decompress_rejects_y_not_below_p() {
        // y = p and y = 2^255 - 1 are both out of range
        let err = CompressedPoint(ED25519_FIELD_PRIME).decompress().unwrap_err();
        assert!(matches!(err, Error::InvalidPoint { .. }));

        let mut all_ones = [0xff; 32];
        all_ones[31] = 0x7f;
        assert!(CompressedPoint(all_ones).decompress().is_err());
    }

    #[test]
    fn test_decompress_rejects_non_square() {
        // y = 2 gives x² = 3/(4d + 1), which is not a square
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        let err = CompressedPoint(bytes).decompress().unwrap_err();
        assert!(matches!(err, Error::InvalidPoint { .. }));
    }

    #[test]
    fn test_decompress_zero_x_with_odd_sign() {
        // y = 1 forces x = 0; only the even sign is valid
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(
            CompressedPoint(bytes).decompress().unwrap(),
            EdwardsPoint::IDENTITY
        );

        bytes[31] |= 0x80;
        assert!(CompressedPoint(bytes).decompress().is_err());
    }

    #[test]
    fn test_equality_ignores_projective_scaling() {
        let p = EdwardsPoint::BASEPOINT.double();
        let k = FieldElement::from_u64(12345);
        let scaled = EdwardsPoint {
            x: p.x.mul(&k),
            y: p.y.mul(&k),
            z: p.z.mul(&k),
            t: p.t.mul(&k),
        };
        assert_eq!(p, scaled);
        assert_ne!(p, EdwardsPoint::BASEPOINT);
        assert_eq!(p.compress(), scaled.compress());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_compress_round_trip(bytes in any::<[u8; 32]>()) {
            let p = EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(&bytes));
            prop_assert!(p.is_on_curve());
            let decoded = p.compress().decompress().unwrap();
            prop_assert_eq!(decoded, p);
        }

        #[test]
        fn prop_scalar_mul_matches_repeated_addition(n in 0u64..40) {
            let g = EdwardsPoint::BASEPOINT;
            prop_assert_eq!(g.scalar_mul(&Scalar::from_u64(n)), naive_mul(n, &g));
        }

        #[test]
        fn prop_scalar_mul_is_linear(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let a = Scalar::from_bytes_mod_order(&a);
            let b = Scalar::from_bytes_mod_order(&b);
            let lhs = EdwardsPoint::mul_base(&a.add(&b));
            let rhs = EdwardsPoint::mul_base(&a).add(&EdwardsPoint::mul_base(&b));
            prop_assert_eq!(lhs, rhs);
        }
    }
}
