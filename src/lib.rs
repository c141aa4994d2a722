// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! # veil-core
//!
//! Pure-Rust LSB steganography engine for hiding short text messages in the
//! least-significant bits of an image's RGB channel bytes.
//!
//! A message is serialized into a bitstream of 9-bit groups (8 data bits plus
//! an inline end-of-message marker), then written into the LSBs of the cover's
//! flattened channel byte stream at positions `start, start+step, ...`, where
//! `start` is derived from a 2-D coordinate pair. The `(x0, y0, step)` triple
//! acts as a shared secret: extraction with different parameters yields
//! garbage or an error, never the hidden message.
//!
//! The stego image is always written as PNG. A lossy container would destroy
//! the embedded LSB plane.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{veil_encode, veil_decode, EmbedParams};
//!
//! let cover = std::fs::read("photo.jpg").unwrap();
//! let params = EmbedParams::new(99, 77, 120).unwrap();
//! let stego_png = veil_encode(&cover, "secret message", &params).unwrap();
//! let decoded = veil_decode(&stego_png, &params).unwrap();
//! assert_eq!(decoded, "secret message");
//! ```

pub mod cover;
pub mod stego;

pub use cover::CoverImage;
pub use stego::capacity::max_message_chars as veil_capacity;
pub use stego::{veil_decode, veil_encode, EmbedParams, StegoError};
