// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use super::message::{parse_body, parse_headers, put_headers};
use super::{Headers, Status, DEFAULT_VERSION};
use crate::buffer::ByteBuffer;
use crate::codec::text::{get_line, get_token, put_line};
use crate::codec::{DecodeFrom, DecodeResult, EncodeResult, EncodeTo};
use crate::error::CodecError;

/// An HTTP response message.
///
/// The reason phrase is derived from `status`, so a decoded response
/// re-encodes with the canonical phrase for whatever its parsed phrase
/// mapped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub version: String,
    pub status: Status,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: Status) -> Response {
        Response {
            version: DEFAULT_VERSION.to_string(),
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }
}

impl EncodeTo for Response {
    /// `<version> <code> <reason>`, headers, blank line, body.
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult {
        put_line(
            buf,
            &format!(
                "{} {} {}",
                self.version,
                self.status.code(),
                self.status.reason()
            ),
        );
        put_headers(buf, &self.headers);
        if !self.body.is_empty() {
            buf.put_bytes(&self.body);
        }
        Ok(())
    }
}

impl DecodeFrom for Response {
    fn decode_from(buf: &mut ByteBuffer) -> DecodeResult<Response> {
        let version = get_token(buf, b' ')
            .filter(|s| !s.is_empty())
            .ok_or(CodecError::MissingElement("version"))?;

        // The numeric code is consumed but the status is mapped from the
        // reason phrase, which survives nonstandard codes.
        let _code = get_token(buf, b' ')
            .filter(|s| !s.is_empty())
            .ok_or(CodecError::MissingElement("status code"))?;

        let reason = get_line(buf).ok_or(CodecError::MissingElement("reason phrase"))?;
        let status = Status::from_reason(&reason);

        let headers = parse_headers(buf);
        let body = parse_body(buf, &headers)?;

        Ok(Response {
            version,
            status,
            headers,
            body,
        })
    }
}
