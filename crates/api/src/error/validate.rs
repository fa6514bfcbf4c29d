//! Validation utilities for byte-level inputs

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a length and copy the input into a fixed-size array
#[inline(always)]
pub fn fixed<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
