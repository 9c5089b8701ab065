// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! CRLF line and delimiter-bounded token extraction over the buffer
//! contract.

use crate::buffer::ByteBuffer;

pub const CRLF: &[u8] = b"\r\n";

/// Append `line` at the write cursor, terminated with CRLF.
pub fn put_line(buf: &mut ByteBuffer, line: &str) {
    buf.put_bytes(line.as_bytes());
    buf.put_bytes(CRLF);
}

/// Append a bare CRLF (a blank line).
pub fn put_blank_line(buf: &mut ByteBuffer) {
    buf.put_bytes(CRLF);
}

/// Read one line from the read cursor: everything up to the next CR or
/// LF, whichever comes first.
///
/// Consumes the line and at most one CR/LF pair, so a blank `\r\n` line
/// reads as `Some("")` rather than being skipped. Returns `None` with
/// the cursor restored when no terminator exists before the end of the
/// buffer — there is no complete line left to read.
pub fn get_line(buf: &mut ByteBuffer) -> Option<String> {
    let start = buf.read_pos();
    let mut line = String::new();
    let mut terminated = false;

    while buf.read_pos() < buf.size() {
        let c = buf.peek();
        if c == b'\r' || c == b'\n' {
            terminated = true;
            break;
        }
        line.push(buf.get_u8() as char);
    }

    if !terminated {
        buf.set_read_pos(start);
        return None;
    }

    // Step past the terminator, two characters at most so a following
    // blank line stays readable.
    let mut consumed = 0;
    while buf.read_pos() < buf.size() && consumed < 2 {
        let c = buf.get_u8();
        consumed += 1;
        if c != b'\r' && c != b'\n' {
            buf.set_read_pos(buf.read_pos() - 1);
            break;
        }
    }

    Some(line)
}

/// Read a token from the read cursor up to (not including) `delim`,
/// leaving the cursor just past the delimiter.
///
/// The delimiter is located with the engine's linear scan, so this
/// inherits the zero-sentinel early exit: a stored zero byte before the
/// delimiter means no token. Returns `None` when the delimiter is never
/// reached; the cursor does not move in that case.
pub fn get_token(buf: &mut ByteBuffer, delim: u8) -> Option<String> {
    let start = buf.read_pos();
    let end = buf.find(delim, start)?;

    let mut raw = vec![0u8; end - start];
    buf.get_bytes(&mut raw);
    buf.set_read_pos(end + 1);

    Some(String::from_utf8_lossy(&raw).into_owned())
}
