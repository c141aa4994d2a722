// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! LSB embed/extract pipeline over the flat channel byte stream.
//!
//! Encoding runs the stages in order:
//! 1. Serialize the message into a marker-terminated bitstream.
//! 2. Compute the channel positions from the embedding parameters.
//! 3. Copy the channel byte stream and overwrite the LSB at each position
//!    with the corresponding bitstream bit.
//!
//! Extraction cannot know the message length up front. It streams LSBs out
//! of the channel byte sequence one 9-bit group at a time and stops as soon
//! as a group carries the end marker.

use log::debug;

use crate::cover::CoverImage;
use crate::stego::address::{self, EmbedParams};
use crate::stego::error::StegoError;
use crate::stego::payload::{self, GROUP_BITS, MARKER_END};

/// Overwrite the LSB of `channel_bytes[pos]` with `bit` for each pair, in
/// sequence order, returning a fresh copy of the stream.
///
/// The upper 7 bits of touched bytes and all untouched bytes are preserved
/// exactly. The input is never mutated, so the caller keeps the original.
///
/// # Errors
/// [`StegoError::OutOfRange`] if any position reaches past the end of the
/// stream.
pub fn embed_bits(
    channel_bytes: &[u8],
    positions: &[usize],
    bits: &[u8],
) -> Result<Vec<u8>, StegoError> {
    debug_assert_eq!(positions.len(), bits.len(), "one position per bitstream bit");

    let mut stego = channel_bytes.to_vec();
    for (&pos, &bit) in positions.iter().zip(bits) {
        let byte = stego.get_mut(pos).ok_or(StegoError::OutOfRange)?;
        *byte = (*byte & 0b1111_1110) | (bit & 1);
    }
    Ok(stego)
}

/// Embed a message into a channel byte stream.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] / [`StegoError::UnsupportedCharacter`]
///   from bitstream encoding.
/// - [`StegoError::OutOfRange`] if the message does not fit the stream at
///   the given parameters.
pub fn embed_message(
    channel_bytes: &[u8],
    params: &EmbedParams,
    message: &str,
) -> Result<Vec<u8>, StegoError> {
    let bits = payload::encode_message(message)?;
    let positions = address::positions(
        params.start(),
        params.step(),
        bits.len(),
        channel_bytes.len(),
    )?;
    debug!(
        "embedding {} bits from offset {} with step {}",
        bits.len(),
        params.start(),
        params.step()
    );
    embed_bits(channel_bytes, &positions, &bits)
}

/// Extract a message from a channel byte stream.
///
/// Reads the LSB at `start, start+step, ...`, accumulating 9-bit groups
/// until one carries the end marker, then decodes the bitstream.
///
/// # Errors
/// [`StegoError::TruncatedBitstream`] if the stream runs out before an end
/// marker is found (never encoded, corrupted, or wrong parameters).
pub fn extract_message(
    channel_bytes: &[u8],
    params: &EmbedParams,
) -> Result<String, StegoError> {
    let step = params.step();
    let mut bitstream = Vec::with_capacity(GROUP_BITS * 32);
    let mut pos = params.start();

    loop {
        for _ in 0..GROUP_BITS {
            let byte = channel_bytes
                .get(pos)
                .ok_or(StegoError::TruncatedBitstream)?;
            bitstream.push(byte & 1);
            pos = pos.checked_add(step).ok_or(StegoError::TruncatedBitstream)?;
        }
        if bitstream[bitstream.len() - 1] == MARKER_END {
            break;
        }
    }

    debug!("end marker found after {} bits", bitstream.len());
    payload::decode_message(&bitstream)
}

/// Encode a text message into a cover image, returning the stego image as
/// PNG bytes.
///
/// The cover may be in any supported container format; the output is always
/// PNG so the LSB plane survives.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if the cover cannot be decoded.
/// - [`StegoError::EmptyMessage`] / [`StegoError::UnsupportedCharacter`]
///   for unencodable messages.
/// - [`StegoError::OutOfRange`] if the message does not fit.
pub fn veil_encode(
    image_bytes: &[u8],
    message: &str,
    params: &EmbedParams,
) -> Result<Vec<u8>, StegoError> {
    let cover = CoverImage::from_bytes(image_bytes)?;
    let stego_channels = embed_message(cover.channels(), params, message)?;
    cover.with_channels(stego_channels).to_png()
}

/// Decode a hidden message from a stego image.
///
/// `params` must match the triple used at encoding time.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if the image cannot be decoded.
/// - [`StegoError::TruncatedBitstream`] if no complete encoding is present
///   at the given parameters.
pub fn veil_decode(image_bytes: &[u8], params: &EmbedParams) -> Result<String, StegoError> {
    let cover = CoverImage::from_bytes(image_bytes)?;
    extract_message(cover.channels(), params)
}
