//! Constants for Ed25519

/// Size of an Ed25519 secret seed in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Size of an Ed25519 public key (compressed point) in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 signature (`R || s`) in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Size of an encoded scalar in bytes
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Size of a compressed point in bytes
pub const ED25519_POINT_SIZE: usize = 32;

/// Base field prime p = 2^255 - 19, little-endian
pub const ED25519_FIELD_PRIME: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// Prime subgroup order q = 2^252 + 27742317777372353535851937790883648493, little-endian
pub const ED25519_GROUP_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Compressed encoding of the base point G (y = 4/5, x even)
pub const ED25519_BASEPOINT_COMPRESSED: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];
