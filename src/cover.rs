// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Cover image decoding and stego re-encoding.
//!
//! The steganography core works on the flat channel byte stream: all pixels
//! in row-major order, each contributing its red, green and blue channel
//! bytes in that fixed order. Index `i` maps to pixel `i / 3`, channel
//! `i % 3`, and the stream is `width * height * 3` bytes long. Alpha is
//! dropped on load.
//!
//! Covers may arrive in any container the `image` crate can decode. The
//! stego output is always PNG: a lossy container would destroy the LSB
//! plane on save.

use std::io::Cursor;

use crate::stego::error::StegoError;

/// A decoded cover image: dimensions plus the flattened RGB channel bytes.
#[derive(Debug, Clone)]
pub struct CoverImage {
    width: u32,
    height: u32,
    channels: Vec<u8>,
}

impl CoverImage {
    /// Decode an image from raw container bytes and flatten it into the
    /// channel byte stream.
    ///
    /// # Errors
    /// [`StegoError::InvalidImage`] if the bytes are not a decodable image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Self {
            width,
            height,
            channels: rgb.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The flattened channel byte stream.
    pub fn channels(&self) -> &[u8] {
        &self.channels
    }

    /// Build the embedded sibling of this cover: same dimensions, new
    /// channel byte stream. The stream length must match.
    pub fn with_channels(&self, channels: Vec<u8>) -> CoverImage {
        debug_assert_eq!(
            channels.len(),
            self.channels.len(),
            "channel stream length must match dimensions"
        );
        CoverImage {
            width: self.width,
            height: self.height,
            channels,
        }
    }

    /// Re-encode the channel byte stream as a PNG image.
    ///
    /// # Errors
    /// [`StegoError::InvalidImage`] if PNG encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>, StegoError> {
        let buffer: image::RgbImage =
            image::ImageBuffer::from_raw(self.width, self.height, self.channels.clone())
                .expect("channel stream length matches dimensions");
        let mut out = Vec::new();
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
        Ok(out)
    }
}
