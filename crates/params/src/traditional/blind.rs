//! Constants for the Ed25519 blind signature protocol

/// Size of the Issuer's commitment `R` (compressed point) in bytes
pub const BLIND_COMMITMENT_SIZE: usize = 32;

/// Size of the User's blinded challenge `e` in bytes
pub const BLIND_CHALLENGE_SIZE: usize = 32;

/// Size of the Issuer's response `s` in bytes
pub const BLIND_RESPONSE_SIZE: usize = 32;
