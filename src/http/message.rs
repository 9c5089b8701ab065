// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Header map and the framing helpers shared by requests and responses.

use std::collections::BTreeMap;

use crate::buffer::ByteBuffer;
use crate::codec::text::{get_line, put_blank_line, put_line};
use crate::codec::DecodeResult;
use crate::error::CodecError;

/// Header keys longer than this are rejected.
const MAX_KEY_LEN: usize = 32;
/// Header values longer than this are rejected.
const MAX_VALUE_LEN: usize = 4096;

/// An ordered map of message headers.
///
/// Iteration order is stable (sorted by key), which is what makes encoded
/// output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    map: BTreeMap<String, String>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers {
            map: BTreeMap::new(),
        }
    }

    /// Add a header. The first value added for a key wins; later adds
    /// for the same key are ignored.
    pub fn add(&mut self, key: &str, value: &str) {
        self.map
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Parse and add a formatted `Key: value` line.
    ///
    /// Returns false, leaving the map alone, for lines without a colon,
    /// empty or over-length keys, and empty or over-length values.
    /// Leading spaces of the value are trimmed.
    pub fn add_line(&mut self, line: &str) -> bool {
        let kpos = match line.find(':') {
            Some(p) => p,
            None => return false,
        };
        if kpos == 0 || kpos > MAX_KEY_LEN {
            return false;
        }

        let key = &line[..kpos];
        let value = line[kpos + 1..].trim_start_matches(' ');
        if value.is_empty() || value.len() > MAX_VALUE_LEN {
            return false;
        }

        self.add(key, value);
        true
    }

    /// Look up a header value, falling back to the all-lowercase key for
    /// peers with nonstandard capitalization.
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.map.get(key) {
            Some(v) => Some(v.as_str()),
            None => self.map.get(&key.to_lowercase()).map(|v| v.as_str()),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Write every header as a `Key: value` line, then the blank line that
/// ends the header section.
pub(crate) fn put_headers(buf: &mut ByteBuffer, headers: &Headers) {
    for (key, value) in headers.iter() {
        put_line(buf, &format!("{}: {}", key, value));
    }
    put_blank_line(buf);
}

/// Read header lines until the blank line that ends the section, leaving
/// the read cursor just past it.
///
/// A value line ending in a comma continues on the following line.
/// Malformed lines are skipped, not fatal.
pub(crate) fn parse_headers(buf: &mut ByteBuffer) -> Headers {
    let mut headers = Headers::new();

    while let Some(line) = get_line(buf) {
        if line.is_empty() {
            break;
        }

        let mut joined = line;
        while joined.ends_with(',') {
            match get_line(buf) {
                Some(ref next) if !next.is_empty() => joined.push_str(next),
                _ => break,
            }
        }

        headers.add_line(&joined);
    }

    headers
}

/// Read the message body from the read cursor, gated on Content-Length.
///
/// No Content-Length header means no body. A declared length larger than
/// the bytes remaining cannot be parsed reliably and is an error.
pub(crate) fn parse_body(buf: &mut ByteBuffer, headers: &Headers) -> DecodeResult<Vec<u8>> {
    let declared = match headers.value("Content-Length") {
        None => return Ok(Vec::new()),
        Some(v) => v.trim().parse::<usize>()?,
    };

    let remaining = buf.bytes_remaining();
    if declared > remaining {
        return Err(CodecError::ContentLengthMismatch {
            declared,
            remaining,
        });
    }

    let mut body = vec![0u8; declared];
    buf.get_bytes(&mut body);
    Ok(body)
}
