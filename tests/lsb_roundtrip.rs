// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Round-trip integration tests for LSB encode/decode over real image
//! containers.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use veil_core::{veil_capacity, veil_decode, veil_encode, CoverImage, EmbedParams, StegoError};

fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()])
    })
}

fn to_container(img: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut out), format)
        .unwrap();
    out
}

fn png_cover(width: u32, height: u32, seed: u64) -> Vec<u8> {
    to_container(noise_image(width, height, seed), ImageFormat::Png)
}

#[test]
fn roundtrip_basic() {
    let cover = png_cover(64, 64, 1);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    let message = "Hello, steganography!";

    let stego = veil_encode(&cover, message, &params).unwrap();
    assert_eq!(veil_decode(&stego, &params).unwrap(), message);
}

#[test]
fn roundtrip_with_origin_and_step() {
    // start = 99 * 77 = 7623, step 120: a long reach into a larger cover.
    let cover = png_cover(160, 160, 2);
    let params = EmbedParams::new(99, 77, 120).unwrap();
    let message = "meet at the old bridge";

    let stego = veil_encode(&cover, message, &params).unwrap();
    assert_eq!(veil_decode(&stego, &params).unwrap(), message);
}

#[test]
fn roundtrip_multiline_message() {
    let cover = png_cover(64, 64, 3);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    let message = "first line\nsecond line\n\tindented";

    let stego = veil_encode(&cover, message, &params).unwrap();
    assert_eq!(veil_decode(&stego, &params).unwrap(), message);
}

#[test]
fn roundtrip_latin1_message() {
    let cover = png_cover(64, 64, 4);
    let params = EmbedParams::new(1, 9, 2).unwrap();
    let message = "déjà vu: ÿ±§"; // all code points fit one byte

    let stego = veil_encode(&cover, message, &params).unwrap();
    assert_eq!(veil_decode(&stego, &params).unwrap(), message);
}

#[test]
fn roundtrip_various_lengths() {
    let cover = png_cover(96, 96, 5);
    let params = EmbedParams::new(0, 0, 1).unwrap();

    for len in [1, 10, 100, 1000] {
        let message: String = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let stego = veil_encode(&cover, &message, &params).unwrap();
        assert_eq!(
            veil_decode(&stego, &params).unwrap(),
            message,
            "failed for message length {len}"
        );
    }
}

#[test]
fn jpeg_cover_png_stego() {
    // Covers may be lossy on input; embedding happens after decode and the
    // output container is PNG, so the round trip is exact.
    let cover = to_container(noise_image(80, 60, 6), ImageFormat::Jpeg);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    let message = "survives the container switch";

    let stego = veil_encode(&cover, message, &params).unwrap();
    assert!(matches!(
        image::guess_format(&stego),
        Ok(ImageFormat::Png)
    ));
    assert_eq!(veil_decode(&stego, &params).unwrap(), message);
}

#[test]
fn stego_preserves_dimensions_and_untouched_bits() {
    let cover_bytes = png_cover(32, 32, 7);
    let params = EmbedParams::new(0, 0, 3).unwrap();
    let message = "short";

    let stego_bytes = veil_encode(&cover_bytes, message, &params).unwrap();
    let cover = CoverImage::from_bytes(&cover_bytes).unwrap();
    let stego = CoverImage::from_bytes(&stego_bytes).unwrap();

    assert_eq!(stego.width(), cover.width());
    assert_eq!(stego.height(), cover.height());
    assert_eq!(stego.channels().len(), cover.channels().len());

    // Only LSBs may differ anywhere, and only at the strided positions.
    let bit_count = 9 * message.chars().count();
    for (i, (&old, &new)) in cover.channels().iter().zip(stego.channels()).enumerate() {
        assert_eq!(new >> 1, old >> 1, "upper bits changed at index {i}");
        if i % 3 != 0 || i / 3 >= bit_count {
            assert_eq!(new, old, "byte outside the position sequence changed at {i}");
        }
    }
}

#[test]
fn capacity_boundary() {
    // 9x3 pixels: 81 channel bytes, so exactly 9 characters fit at the
    // default parameters and a 10th does not.
    let cover = png_cover(9, 3, 8);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    assert_eq!(veil_capacity(9, 3), 9);

    let exact = "x".repeat(9);
    let stego = veil_encode(&cover, &exact, &params).unwrap();
    assert_eq!(veil_decode(&stego, &params).unwrap(), exact);

    assert!(matches!(
        veil_encode(&cover, &"x".repeat(10), &params),
        Err(StegoError::OutOfRange)
    ));
}

#[test]
fn empty_message_rejected() {
    let cover = png_cover(16, 16, 9);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    assert!(matches!(
        veil_encode(&cover, "", &params),
        Err(StegoError::EmptyMessage)
    ));
}

#[test]
fn wide_unicode_rejected() {
    let cover = png_cover(16, 16, 10);
    let params = EmbedParams::new(0, 0, 1).unwrap();
    assert!(matches!(
        veil_encode(&cover, "日本語", &params),
        Err(StegoError::UnsupportedCharacter(_))
    ));
}

#[test]
fn garbage_bytes_rejected() {
    let params = EmbedParams::new(0, 0, 1).unwrap();
    assert!(matches!(
        veil_encode(b"not an image at all", "hi", &params),
        Err(StegoError::InvalidImage(_))
    ));
    assert!(matches!(
        veil_decode(b"not an image at all", &params),
        Err(StegoError::InvalidImage(_))
    ));
}
