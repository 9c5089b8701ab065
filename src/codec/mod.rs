// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Capability traits and shared wire-format helpers for codecs built on
//! the buffer contract.
//!
//! A format is a pair of independent impls — one per message variant —
//! rather than a hierarchy rooted in the buffer type: encoders take a
//! `&mut ByteBuffer` to append into, decoders consume one by advancing
//! its read cursor.

pub mod strings;
pub mod text;

use crate::buffer::ByteBuffer;
use crate::error::CodecError;

/// Shorthand name for what an encoding operation should return.
pub type EncodeResult = std::result::Result<(), CodecError>;

/// Shorthand name for what a decoding operation should return.
pub type DecodeResult<T> = std::result::Result<T, CodecError>;

/// Trait for types that can be serialized into a byte buffer.
///
/// Encoding appends at the buffer's current write cursor; growth is the
/// buffer's concern, so encoders never run out of space.
pub trait EncodeTo {
    /// Serialize to the buffer at its write cursor.
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult;
}

/// Trait for types that can be parsed out of a byte buffer.
pub trait DecodeFrom: Sized {
    /// Parse from the buffer, advancing its read cursor past the
    /// consumed bytes.
    fn decode_from(buf: &mut ByteBuffer) -> DecodeResult<Self>;
}
