// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Advisory capacity estimation.

/// Maximum number of message characters storable in an image of the given
/// dimensions, assuming the default origin `(0, 0)` and step 1.
///
/// Each character occupies 9 channel bytes of the `3 * width * height`
/// available, so the bound works out to `floor(width * height / 3)`.
///
/// This is advisory only. The binding check happens during address
/// sequencing, which also accounts for the actual origin and step and fails
/// with [`StegoError::OutOfRange`](crate::StegoError::OutOfRange) when the
/// message does not fit.
pub fn max_message_chars(width: u32, height: u32) -> usize {
    (width as usize * height as usize) / 3
}
