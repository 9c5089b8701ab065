// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! HTTP/1.x message codec: a worked consumer of the buffer contract.
//!
//! Requests and responses are independent types implementing the codec
//! capability traits; all byte handling goes through the buffer's public
//! operations and the `codec::text` line helpers.

mod message;
mod request;
mod response;

pub use self::message::Headers;
pub use self::request::Request;
pub use self::response::Response;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::CodecError;

pub const VERSION_10: &str = "HTTP/1.0";
pub const VERSION_11: &str = "HTTP/1.1";
pub const DEFAULT_VERSION: &str = VERSION_11;

/// Request methods.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Method {
    Head,
    Get,
    Post,
    Put,
    Delete,
    Trace,
    Options,
    Connect,
    Patch,
}

impl Method {
    /// The method name as it appears on the start line.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Patch => "PATCH",
        }
    }

    /// Look up a method by name.
    ///
    /// Names outside 1..=9 characters are rejected before any
    /// comparison.
    pub fn from_name(name: &str) -> Option<Method> {
        if name.is_empty() || name.len() >= 10 {
            return None;
        }
        match name {
            "HEAD" => Some(Method::Head),
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "TRACE" => Some(Method::Trace),
            "OPTIONS" => Some(Method::Options),
            "CONNECT" => Some(Method::Connect),
            "PATCH" => Some(Method::Patch),
            _ => None,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Method, CodecError> {
        Method::from_name(s).ok_or_else(|| CodecError::InvalidMethod(s.to_string()))
    }
}

/// Response status codes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Status {
    Continue,
    Ok,
    BadRequest,
    NotFound,
    ServerError,
    NotImplemented,
}

impl Status {
    /// The numeric status code.
    pub fn code(self) -> u16 {
        match self {
            Status::Continue => 100,
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::ServerError => 500,
            Status::NotImplemented => 501,
        }
    }

    /// The canonical reason phrase.
    pub fn reason(self) -> &'static str {
        match self {
            Status::Continue => "Continue",
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::ServerError => "Internal Server Error",
            Status::NotImplemented => "Not Implemented",
        }
    }

    /// Look up a status by numeric code.
    pub fn from_code(code: u16) -> Option<Status> {
        match code {
            100 => Some(Status::Continue),
            200 => Some(Status::Ok),
            400 => Some(Status::BadRequest),
            404 => Some(Status::NotFound),
            500 => Some(Status::ServerError),
            501 => Some(Status::NotImplemented),
            _ => None,
        }
    }

    /// Map a parsed reason phrase to a status by substring containment.
    ///
    /// Reason phrases on the wire are not standardized; anything
    /// unrecognized collapses to `NotImplemented`.
    pub fn from_reason(reason: &str) -> Status {
        if reason.contains("Continue") {
            Status::Continue
        } else if reason.contains("OK") {
            Status::Ok
        } else if reason.contains("Bad Request") {
            Status::BadRequest
        } else if reason.contains("Not Found") {
            Status::NotFound
        } else if reason.contains("Server Error") {
            Status::ServerError
        } else {
            Status::NotImplemented
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
