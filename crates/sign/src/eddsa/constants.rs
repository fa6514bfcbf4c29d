//! Curve constants for Ed25519 in the internal limb representations
//!
//! Field constants are radix-2^51 limbs, little-endian; the group order is
//! four 64-bit limbs. All values are fully reduced.

use super::field::FieldElement;

/// Curve constant d = -121665/121666 mod p
pub(crate) const D: FieldElement = FieldElement([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// 2·d, used by the unified addition formula
pub(crate) const D2: FieldElement = FieldElement([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// sqrt(-1) = 2^((p-1)/4) mod p
pub(crate) const SQRT_M1: FieldElement = FieldElement([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// Affine x coordinate of the base point
pub(crate) const BASE_X: FieldElement = FieldElement([
    1738742601995546,
    1146398526822698,
    2070867633025821,
    562264141797630,
    587772402128613,
]);

/// Affine y coordinate of the base point (4/5)
pub(crate) const BASE_Y: FieldElement = FieldElement([
    1801439850948184,
    1351079888211148,
    450359962737049,
    900719925474099,
    1801439850948198,
]);

/// x·y of the base point
pub(crate) const BASE_T: FieldElement = FieldElement([
    1841354044333475,
    16398895984059,
    755974180946558,
    900171276175154,
    1821297809914039,
]);

/// Group order q as four little-endian u64 limbs
pub(crate) const GROUP_ORDER: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];

/// p - 2 = 2^255 - 21, the Fermat inversion exponent (little-endian)
pub(crate) const P_MINUS_2: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// (p + 3) / 8 = 2^252 - 2, the square-root candidate exponent (little-endian)
pub(crate) const P_PLUS_3_DIV_8: [u8; 32] = [
    0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x0f,
];

/// (p - 1) / 4 = 2^253 - 5 (little-endian); 2 raised to it is sqrt(-1)
#[cfg(test)]
pub(crate) const P_MINUS_1_DIV_4: [u8; 32] = [
    0xfb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x1f,
];
