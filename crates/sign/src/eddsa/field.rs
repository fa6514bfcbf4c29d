//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held as five 51-bit limbs, little-endian. Every operation
//! returns limbs below 2^52, which keeps the u128 accumulators in `mul` far
//! from overflow. Canonical reduction into [0, p) happens only when an
//! element is encoded or compared.

use super::constants::{P_MINUS_2, P_PLUS_3_DIV_8, SQRT_M1};
use edblind_internal::constant_time::{ct_eq_choice, ct_is_zero};
use edblind_internal::endian::u64_from_le_bytes;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BITS: u64 = (1 << 51) - 1;

/// 16·p in limb form, added before subtraction so limbs never underflow
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// Zero element
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// One element
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Create a field element from a small integer
    pub fn from_u64(value: u64) -> Self {
        FieldElement([value & LOW_51_BITS, value >> 51, 0, 0, 0])
    }

    /// Create a field element from 32 little-endian bytes
    ///
    /// Bit 255 is ignored. Values in [p, 2^255) are accepted and reduced
    /// lazily; callers that need canonical input compare against `to_bytes`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        FieldElement([
            u64_from_le_bytes(bytes, 0) & LOW_51_BITS,
            (u64_from_le_bytes(bytes, 6) >> 3) & LOW_51_BITS,
            (u64_from_le_bytes(bytes, 12) >> 6) & LOW_51_BITS,
            (u64_from_le_bytes(bytes, 19) >> 1) & LOW_51_BITS,
            (u64_from_le_bytes(bytes, 24) >> 12) & LOW_51_BITS,
        ])
    }

    /// Canonical little-endian encoding of the value in [0, p)
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut l = weak_reduce(self.0);

        // q = 1 iff the value is at least p, computed as (value + 19) >> 255
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;
        l[1] += l[0] >> 51;
        l[0] &= LOW_51_BITS;
        l[2] += l[1] >> 51;
        l[1] &= LOW_51_BITS;
        l[3] += l[2] >> 51;
        l[2] &= LOW_51_BITS;
        l[4] += l[3] >> 51;
        l[3] &= LOW_51_BITS;
        l[4] &= LOW_51_BITS;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut idx = 0;
        for limb in l {
            acc |= (limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;
        out
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut limbs = self.0;
        for (limb, rhs) in limbs.iter_mut().zip(other.0.iter()) {
            *limb += rhs;
        }
        FieldElement(weak_reduce(limbs))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut limbs = [0u64; 5];
        for i in 0..5 {
            limbs[i] = (self.0[i] + SIXTEEN_P[i]) - other.0[i];
        }
        FieldElement(weak_reduce(limbs))
    }

    /// Negate
    pub fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// Double a field element
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &other.0;

        // 2^255 = 19 mod p, so limbs that wrap past position 4 fold back times 19
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];
        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BITS;
        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BITS;
        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BITS;
        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BITS;
        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BITS;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BITS;

        FieldElement(out)
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Raise to a 256-bit little-endian exponent (square-and-multiply, MSB first)
    pub fn pow(&self, exponent: &[u8; 32]) -> FieldElement {
        let mut result = FieldElement::ONE;
        for bit in (0..256).rev() {
            result = result.square();
            if (exponent[bit >> 3] >> (bit & 7)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Multiplicative inverse using Fermat's little theorem: a^(p-2)
    ///
    /// Zero has no inverse; callers only invert values they know to be
    /// nonzero (projective Z coordinates, d·y² + 1).
    pub fn invert(&self) -> FieldElement {
        debug_assert!(!self.is_zero(), "inversion of zero field element");
        self.pow(&P_MINUS_2)
    }

    /// Square-root candidate a^((p+3)/8)
    ///
    /// The candidate squares to either `a` or `-a` when `a` is a square.
    pub fn sqrt_candidate(&self) -> FieldElement {
        self.pow(&P_PLUS_3_DIV_8)
    }

    /// Square root, corrected by sqrt(-1) when the candidate squares to -a
    ///
    /// Returns `None` when `a` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<FieldElement> {
        let candidate = self.sqrt_candidate();
        if candidate.square() == *self {
            return Some(candidate);
        }

        let corrected = candidate.mul(&SQRT_M1);
        if corrected.square() == *self {
            Some(corrected)
        } else {
            None
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        ct_is_zero(&self.to_bytes())
    }

    /// Low bit of the canonical encoding (the "sign" of x in compression)
    pub fn is_negative(&self) -> u8 {
        self.to_bytes()[0] & 1
    }
}

/// Propagate carries so every limb is below 2^51 plus a small excess
#[inline(always)]
fn weak_reduce(mut limbs: [u64; 5]) -> [u64; 5] {
    let c0 = limbs[0] >> 51;
    let c1 = limbs[1] >> 51;
    let c2 = limbs[2] >> 51;
    let c3 = limbs[3] >> 51;
    let c4 = limbs[4] >> 51;

    limbs[0] &= LOW_51_BITS;
    limbs[1] &= LOW_51_BITS;
    limbs[2] &= LOW_51_BITS;
    limbs[3] &= LOW_51_BITS;
    limbs[4] &= LOW_51_BITS;

    limbs[0] += c4 * 19;
    limbs[1] += c0;
    limbs[2] += c1;
    limbs[3] += c2;
    limbs[4] += c3;

    limbs
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(self.to_bytes(), other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}

impl core::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement(")?;
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
