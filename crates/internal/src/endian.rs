//! Endianness utility functions

/// Read a little-endian u64 starting at `offset`
///
/// Panics if fewer than eight bytes are available; callers index fixed-size
/// buffers with constant offsets.
#[inline(always)]
pub fn u64_from_le_bytes(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

/// Split 32 little-endian bytes into four u64 limbs
#[inline(always)]
pub fn limbs_from_le_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    [
        u64_from_le_bytes(bytes, 0),
        u64_from_le_bytes(bytes, 8),
        u64_from_le_bytes(bytes, 16),
        u64_from_le_bytes(bytes, 24),
    ]
}

/// Pack four u64 limbs into 32 little-endian bytes
#[inline(always)]
pub fn limbs_to_le_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let limbs = limbs_from_le_bytes(&bytes);
        assert_eq!(limbs[0], 0x0706050403020100);
        assert_eq!(limbs_to_le_bytes(&limbs), bytes);
    }
}
