// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! LSB steganographic encoding and decoding.
//!
//! The core is a stateless bit-level codec over the flattened channel byte
//! stream of a cover image:
//!
//! - [`bits`]: fixed-width byte/bit conversion.
//! - [`payload`]: message to bitstream codec with inline per-character
//!   continuation/termination markers.
//! - [`address`]: arithmetic channel position sequencing from a validated
//!   `(x0, y0, step)` parameter triple.
//! - [`capacity`]: advisory capacity estimate.
//! - The pipeline ties them together: [`embed_message`] / [`extract_message`]
//!   over raw channel bytes, and [`veil_encode`] / [`veil_decode`] over
//!   image container bytes.
//!
//! Every call is pure: inputs are never mutated, and identical inputs give
//! identical outputs. There is no key derivation and no payload encryption;
//! the parameter triple is the only thing shared between the two sides.

pub mod address;
pub mod bits;
pub mod capacity;
pub mod error;
pub mod payload;
mod pipeline;

pub use address::EmbedParams;
pub use error::StegoError;
pub use pipeline::{embed_bits, embed_message, extract_message, veil_decode, veil_encode};
