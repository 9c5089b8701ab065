// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Length-prefixed, null-terminated strings.
//!
//! The length prefix is a u32 counting the trailing null (strlen + 1),
//! matching the chat-protocol wire layout.

use crate::buffer::ByteBuffer;
use crate::codec::DecodeResult;
use crate::error::CodecError;

/// Buffer a string at the write cursor, preceded by its length and
/// followed by a null byte.
pub fn buffer_string(buf: &mut ByteBuffer, s: &str) {
    buf.put_u32(s.len() as u32 + 1);
    buf.put_bytes(s.as_bytes());
    buf.put_u8(0);
}

/// Unbuffer a string from the read cursor: length prefix, content, null
/// terminator.
///
/// Fails when the prefix is zero, runs past the bytes remaining, or the
/// terminator is missing.
pub fn unbuffer_string(buf: &mut ByteBuffer) -> DecodeResult<String> {
    let len = buf.get_u32() as usize;
    if len == 0 {
        return Err(CodecError::UnterminatedString);
    }

    let remaining = buf.bytes_remaining();
    if len > remaining {
        return Err(CodecError::NeedMoreData {
            needed: len,
            remaining,
        });
    }

    let mut raw = vec![0u8; len];
    buf.get_bytes(&mut raw);
    if raw.pop() != Some(0) {
        return Err(CodecError::UnterminatedString);
    }

    Ok(String::from_utf8_lossy(&raw).into_owned())
}
