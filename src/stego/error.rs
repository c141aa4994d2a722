// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from cover decoding through
//! bitstream extraction.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The cover image could not be decoded.
    InvalidImage(image::ImageError),
    /// A message character's code point does not fit in a single byte.
    UnsupportedCharacter(char),
    /// The message is empty. The inline marker scheme cannot terminate an
    /// empty payload, so empty messages are rejected before encoding.
    EmptyMessage,
    /// The step size is zero. Every embedded bit must advance the channel
    /// position by at least one.
    InvalidStep,
    /// A computed channel position falls outside the channel byte stream.
    /// Typically the message is too long for the image, the step is too
    /// large, or the starting coordinate lies beyond the image bounds.
    OutOfRange,
    /// The channel byte stream ended before an end-of-message marker was
    /// found. The image was never encoded, the data is corrupted, or the
    /// extraction parameters are wrong.
    TruncatedBitstream,
    /// Malformed intermediate bit representation.
    InvalidBitstring,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImage(e) => write!(f, "invalid cover image: {e}"),
            Self::UnsupportedCharacter(c) => {
                write!(f, "character {c:?} does not fit in a single byte")
            }
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::InvalidStep => write!(f, "step size must be at least 1"),
            Self::OutOfRange => write!(f, "channel position out of range (message too long for this image?)"),
            Self::TruncatedBitstream => {
                write!(f, "channel stream ended before the end-of-message marker")
            }
            Self::InvalidBitstring => write!(f, "malformed bit value in bitstream"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::InvalidImage(e)
    }
}
