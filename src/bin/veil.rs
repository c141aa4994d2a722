// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Command-line runner for hiding and recovering text messages.
//!
//! ## Usage
//!
//! ```bash
//! veil encode --cover photo.jpg --output encoded.png --message "hello" \
//!   --x0 99 --y0 77 --step 120
//! veil decode --stego encoded.png --x0 99 --y0 77 --step 120
//! ```
//!
//! The origin and step default to `(0, 0)` and 1. They must match between
//! encode and decode; treat them as a shared secret.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use veil_core::{veil_capacity, veil_decode, veil_encode, CoverImage, EmbedParams, StegoError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hide and recover text messages in image LSBs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Embed a message into a cover image, writing a PNG stego image.
    Encode {
        /// Path of the cover image (any common raster format).
        #[arg(short, long)]
        cover: PathBuf,
        /// Path of the stego image to write. Always written as PNG.
        #[arg(short, long)]
        output: PathBuf,
        /// The message to hide.
        #[arg(short, long)]
        message: String,
        /// X coordinate of the embedding origin.
        #[arg(long, default_value_t = 0)]
        x0: u32,
        /// Y coordinate of the embedding origin.
        #[arg(long, default_value_t = 0)]
        y0: u32,
        /// Distance between embedded bits in the channel byte stream.
        #[arg(long, default_value_t = 1)]
        step: usize,
    },
    /// Recover a hidden message from a stego image.
    Decode {
        /// Path of the stego image.
        #[arg(short, long)]
        stego: PathBuf,
        /// X coordinate of the embedding origin.
        #[arg(long, default_value_t = 0)]
        x0: u32,
        /// Y coordinate of the embedding origin.
        #[arg(long, default_value_t = 0)]
        y0: u32,
        /// Distance between embedded bits in the channel byte stream.
        #[arg(long, default_value_t = 1)]
        step: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    match Args::parse().command {
        Command::Encode {
            cover,
            output,
            message,
            x0,
            y0,
            step,
        } => encode(&cover, &output, &message, x0, y0, step),
        Command::Decode { stego, x0, y0, step } => decode(&stego, x0, y0, step),
    }
}

fn encode(
    cover_path: &Path,
    output: &Path,
    message: &str,
    x0: u32,
    y0: u32,
    step: usize,
) -> anyhow::Result<()> {
    let params = EmbedParams::new(x0, y0, step)?;
    let cover_bytes = fs::read(cover_path)
        .with_context(|| format!("reading cover image {}", cover_path.display()))?;
    let cover = CoverImage::from_bytes(&cover_bytes)?;

    let pixels = cover.width() as u64 * cover.height() as u64;
    info!("pixel count: {pixels}");
    info!(
        "maximum characters storable: {}",
        veil_capacity(cover.width(), cover.height())
    );
    info!("message length: {}", message.chars().count());

    if output.extension().map_or(true, |e| !e.eq_ignore_ascii_case("png")) {
        warn!("output is written as PNG regardless of extension; a lossy container would destroy the hidden bits");
    }

    let stego = veil_encode(&cover_bytes, message, &params)?;
    fs::write(output, &stego)
        .with_context(|| format!("writing stego image {}", output.display()))?;
    info!("stego image written to {}", output.display());
    Ok(())
}

fn decode(stego_path: &Path, x0: u32, y0: u32, step: usize) -> anyhow::Result<()> {
    let params = EmbedParams::new(x0, y0, step)?;
    let stego_bytes = fs::read(stego_path)
        .with_context(|| format!("reading stego image {}", stego_path.display()))?;

    match veil_decode(&stego_bytes, &params) {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(StegoError::TruncatedBitstream | StegoError::OutOfRange) => {
            anyhow::bail!("no hidden message found (or wrong parameters)")
        }
        Err(e) => Err(e.into()),
    }
}
