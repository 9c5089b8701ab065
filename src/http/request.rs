// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use super::message::{parse_body, parse_headers, put_headers};
use super::{Headers, Method, DEFAULT_VERSION};
use crate::buffer::ByteBuffer;
use crate::codec::text::{get_line, get_token, put_line};
use crate::codec::{DecodeFrom, DecodeResult, EncodeResult, EncodeTo};
use crate::error::CodecError;

/// An HTTP request message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub uri: String,
    pub version: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, uri: &str) -> Request {
        Request {
            method,
            uri: uri.to_string(),
            version: DEFAULT_VERSION.to_string(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }
}

impl EncodeTo for Request {
    /// `<method> <uri> <version>`, headers, blank line, body.
    fn encode_to(&self, buf: &mut ByteBuffer) -> EncodeResult {
        put_line(
            buf,
            &format!("{} {} {}", self.method, self.uri, self.version),
        );
        put_headers(buf, &self.headers);
        if !self.body.is_empty() {
            buf.put_bytes(&self.body);
        }
        Ok(())
    }
}

impl DecodeFrom for Request {
    fn decode_from(buf: &mut ByteBuffer) -> DecodeResult<Request> {
        let method_name = get_token(buf, b' ')
            .filter(|s| !s.is_empty())
            .ok_or(CodecError::MissingElement("method"))?;
        let method = Method::from_name(&method_name)
            .ok_or_else(|| CodecError::InvalidMethod(method_name))?;

        let uri = get_token(buf, b' ')
            .filter(|s| !s.is_empty())
            .ok_or(CodecError::MissingElement("request URI"))?;

        let version = get_line(buf)
            .filter(|s| !s.is_empty())
            .ok_or(CodecError::MissingElement("version"))?;
        if !version.starts_with("HTTP/1") {
            return Err(CodecError::InvalidVersion(version));
        }

        let headers = parse_headers(buf);

        // Only POST and PUT carry content after the headers.
        let body = if method == Method::Post || method == Method::Put {
            parse_body(buf, &headers)?
        } else {
            Vec::new()
        };

        Ok(Request {
            method,
            uri,
            version,
            headers,
            body,
        })
    }
}
