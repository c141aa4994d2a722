// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Message bitstream encoding and decoding.
//!
//! Each character is serialized as one 9-bit group:
//!
//! ```text
//! [8 bits] character code point (MSB first)
//! [1 bit ] marker: 0 = another character follows, 1 = end of message
//! ```
//!
//! Groups are concatenated in message order, so a well-formed bitstream is
//! `9 × len(message)` bits long, contains exactly one `1` marker, and that
//! marker is the final bit. The decoder stops immediately after consuming
//! the terminating group; any trailing bits are ignored.
//!
//! There is no length prefix. The end of the message is discovered lazily,
//! which is what allows extraction to stream bits out of a channel byte
//! sequence without knowing the message length up front. The price is that
//! an empty message has no group to carry the `1` marker, so empty messages
//! are rejected at encode time with [`StegoError::EmptyMessage`].

use crate::stego::bits;
use crate::stego::error::StegoError;

/// Bits per encoded character: 8 data bits plus the marker bit.
pub const GROUP_BITS: usize = 9;

/// Marker bit value indicating that another character follows.
pub const MARKER_CONTINUE: u8 = 0;

/// Marker bit value indicating the last character of the message.
pub const MARKER_END: u8 = 1;

/// Encode a message into a marker-terminated bitstream.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] if the message has no characters.
/// - [`StegoError::UnsupportedCharacter`] if any character's code point
///   exceeds 255.
pub fn encode_message(message: &str) -> Result<Vec<u8>, StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }

    let count = message.chars().count();
    let mut bitstream = Vec::with_capacity(count * GROUP_BITS);

    for (i, ch) in message.chars().enumerate() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(StegoError::UnsupportedCharacter(ch));
        }
        bitstream.extend_from_slice(&bits::byte_to_bits(code as u8));
        bitstream.push(if i + 1 == count {
            MARKER_END
        } else {
            MARKER_CONTINUE
        });
    }

    Ok(bitstream)
}

/// Decode a marker-terminated bitstream back into a message.
///
/// Consumes 9-bit groups until a group's marker bit is [`MARKER_END`].
///
/// # Errors
/// - [`StegoError::TruncatedBitstream`] if the input ends mid-group, or is
///   exhausted without ever carrying an end marker.
/// - [`StegoError::InvalidBitstring`] on malformed bit values.
pub fn decode_message(bitstream: &[u8]) -> Result<String, StegoError> {
    let mut message = String::new();
    let mut offset = 0;

    loop {
        let group = bitstream
            .get(offset..offset + GROUP_BITS)
            .ok_or(StegoError::TruncatedBitstream)?;
        let byte = bits::bits_to_byte(&group[..8])?;
        message.push(char::from(byte));

        match group[8] {
            MARKER_CONTINUE => offset += GROUP_BITS,
            MARKER_END => return Ok(message),
            _ => return Err(StegoError::InvalidBitstring),
        }
    }
}
