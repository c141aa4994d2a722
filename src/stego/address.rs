// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Channel position addressing.
//!
//! Embedding touches an arithmetic sequence of positions in the flattened
//! channel byte stream: `start, start + step, start + 2*step, ...`, one
//! position per bitstream bit. The start offset is derived from a 2-D
//! starting coordinate as `x0 * y0`.
//!
//! # Weak pseudo-key
//!
//! Deriving the offset by multiplication means either coordinate being zero
//! collapses the start to 0 regardless of the other. This is kept as-is so
//! that images encoded with earlier tools extract bit-identically; treat the
//! coordinate pair as a convenience, not as real key material.

use crate::stego::error::StegoError;

/// Validated embedding parameters: starting coordinate and step size.
///
/// The triple `(x0, y0, step)` must be identical on the encoding and the
/// decoding side.
#[derive(Debug, Clone, Copy)]
pub struct EmbedParams {
    x0: u32,
    y0: u32,
    step: usize,
}

impl EmbedParams {
    /// Build embedding parameters, validating them up front.
    ///
    /// Coordinates are unsigned by type; a `step` of zero fails with
    /// [`StegoError::InvalidStep`] here rather than deep inside address
    /// sequencing.
    pub fn new(x0: u32, y0: u32, step: usize) -> Result<Self, StegoError> {
        if step == 0 {
            return Err(StegoError::InvalidStep);
        }
        Ok(Self { x0, y0, step })
    }

    /// Linear start offset into the channel byte stream, `x0 * y0`.
    pub fn start(&self) -> usize {
        self.x0 as usize * self.y0 as usize
    }

    /// Distance between consecutively embedded bits.
    pub fn step(&self) -> usize {
        self.step
    }
}

/// Compute the sequence `start, start+step, ..., start+(count-1)*step`.
///
/// `limit` is the channel byte stream length; every generated position must
/// stay below it.
///
/// # Errors
/// - [`StegoError::InvalidStep`] if `step` is 0.
/// - [`StegoError::OutOfRange`] if any position would reach `limit`, or the
///   arithmetic overflows.
pub fn positions(
    start: usize,
    step: usize,
    count: usize,
    limit: usize,
) -> Result<Vec<usize>, StegoError> {
    if step == 0 {
        return Err(StegoError::InvalidStep);
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    // The sequence is monotonic, so checking the last term covers them all.
    let span = (count - 1)
        .checked_mul(step)
        .ok_or(StegoError::OutOfRange)?;
    let last = start.checked_add(span).ok_or(StegoError::OutOfRange)?;
    if last >= limit {
        return Err(StegoError::OutOfRange);
    }

    Ok((0..count).map(|k| start + k * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_sequence() {
        assert_eq!(positions(0, 1, 5, 10).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn strided_sequence() {
        assert_eq!(positions(3, 4, 4, 100).unwrap(), vec![3, 7, 11, 15]);
    }

    #[test]
    fn exact_boundary_fit() {
        // Last position 9 with limit 10 is in range; limit 9 is not.
        assert!(positions(0, 3, 4, 10).is_ok());
        assert!(matches!(
            positions(0, 3, 4, 9),
            Err(StegoError::OutOfRange)
        ));
    }

    #[test]
    fn start_beyond_limit() {
        assert!(matches!(
            positions(50, 1, 1, 50),
            Err(StegoError::OutOfRange)
        ));
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(positions(7, 2, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn zero_step_rejected() {
        assert!(matches!(
            positions(0, 0, 3, 10),
            Err(StegoError::InvalidStep)
        ));
        assert!(matches!(
            EmbedParams::new(1, 1, 0),
            Err(StegoError::InvalidStep)
        ));
    }

    #[test]
    fn overflow_is_out_of_range() {
        assert!(matches!(
            positions(usize::MAX, 2, 2, usize::MAX),
            Err(StegoError::OutOfRange)
        ));
    }

    #[test]
    fn start_is_coordinate_product() {
        let params = EmbedParams::new(99, 77, 120).unwrap();
        assert_eq!(params.start(), 99 * 77);
        assert_eq!(params.step(), 120);
    }

    #[test]
    fn zero_coordinate_collapses_start() {
        // The degenerate case of the multiplicative convention.
        assert_eq!(EmbedParams::new(123, 0, 1).unwrap().start(), 0);
        assert_eq!(EmbedParams::new(0, 456, 1).unwrap().start(), 0);
    }
}
