// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use std::num::ParseIntError;

use thiserror::Error;

/// Error type returned by the codec layers built on the buffer.
///
/// The buffer engine itself never fails: out-of-range reads yield zero
/// values and out-of-range writes grow the storage. Everything here is a
/// recoverable parse failure reported by a consumer of that contract.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decoding needs {needed} bytes but only {remaining} remain")]
    NeedMoreData { needed: usize, remaining: usize },
    #[error("length-prefixed string missing its null terminator")]
    UnterminatedString,
    #[error("unknown packet opcode 0x{0:04x}")]
    UnknownOpcode(u16),
    #[error("message start line is missing its {0}")]
    MissingElement(&'static str),
    #[error("unrecognized request method '{0}'")]
    InvalidMethod(String),
    #[error("unsupported protocol version '{0}'")]
    InvalidVersion(String),
    #[error("Content-Length {declared} exceeds the {remaining} bytes remaining")]
    ContentLengthMismatch { declared: usize, remaining: usize },
    #[error("error parsing {parsing_kind}: {s}")]
    ParseError {
        parsing_kind: &'static str,
        s: String,
    },
}

impl From<ParseIntError> for CodecError {
    fn from(e: ParseIntError) -> Self {
        CodecError::ParseError {
            parsing_kind: "integer",
            s: e.to_string(),
        }
    }
}
