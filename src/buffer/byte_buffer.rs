// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The core growable byte buffer with independent read and write cursors.

use std::fmt::{self, Write as _};

use bytes::{Bytes, BytesMut};

use super::primitives::BufferPrimitive;
use crate::constants::DEFAULT_CAPACITY;

/// A growable sequence of bytes addressed through two independent cursors.
///
/// The write cursor advances with every relative write, the read cursor
/// with every relative read. The storage length (`size()`) is the
/// capacity-in-use: every allocated byte counts as valid data, and there
/// is no separate used-length bookkeeping.
///
/// Multi-byte values are stored in the host's native byte order, copied
/// verbatim. Out-of-range reads yield zero values, out-of-range writes
/// grow the storage; see the module documentation for the two policies.
pub struct ByteBuffer {
    storage: BytesMut,
    rpos: usize,
    wpos: usize,
}

impl ByteBuffer {
    /// Create an empty buffer with the default reserved capacity.
    pub fn new() -> ByteBuffer {
        ByteBuffer::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with `capacity` bytes reserved.
    ///
    /// The reservation is a hint: `size()` starts at zero and grows only
    /// as writes land.
    pub fn with_capacity(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            storage: BytesMut::with_capacity(capacity),
            rpos: 0,
            wpos: 0,
        }
    }

    /// Create a buffer pre-loaded with a copy of `data`.
    ///
    /// Afterward the write cursor sits at `data.len()` and the read
    /// cursor at zero, as if every byte had just been written relatively.
    pub fn from_bytes(data: &[u8]) -> ByteBuffer {
        let mut buf = ByteBuffer::with_capacity(data.len());
        buf.put_bytes(data);
        buf
    }

    /// Current storage length. Not a used-byte count: the whole allocated
    /// region is valid data.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Number of bytes from the read cursor to the end of storage.
    ///
    /// Saturates at zero when the read cursor has been moved past the
    /// end.
    pub fn bytes_remaining(&self) -> usize {
        self.size().saturating_sub(self.rpos)
    }

    /// Current read cursor.
    pub fn read_pos(&self) -> usize {
        self.rpos
    }

    /// Move the read cursor. No bounds validation: a cursor past the end
    /// makes subsequent relative reads yield zero values.
    pub fn set_read_pos(&mut self, pos: usize) {
        self.rpos = pos;
    }

    /// Current write cursor.
    pub fn write_pos(&self) -> usize {
        self.wpos
    }

    /// Move the write cursor. No bounds validation: a cursor past the end
    /// makes the next relative write grow the storage, zero-filling the
    /// gap.
    pub fn set_write_pos(&mut self, pos: usize) {
        self.wpos = pos;
    }

    /// Discard all content and reset both cursors to zero.
    ///
    /// Reserved capacity is retained.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.rpos = 0;
        self.wpos = 0;
    }

    /// Reallocate storage to exactly `new_size` bytes and reset both
    /// cursors to zero.
    ///
    /// Content below `new_size` is preserved; any newly added bytes are
    /// zero.
    pub fn resize(&mut self, new_size: usize) {
        self.storage.resize(new_size, 0);
        self.rpos = 0;
        self.wpos = 0;
    }

    /// Absolute read at `index`: zero-on-out-of-range-read, cursors
    /// untouched.
    pub(crate) fn read_at<T: BufferPrimitive>(&self, index: usize) -> T {
        match index.checked_add(T::WIDTH) {
            Some(end) if end <= self.storage.len() => T::load_native(&self.storage[index..end]),
            _ => T::ZERO,
        }
    }

    /// Relative read at the read cursor. The cursor advances by the
    /// value's width whether or not the read was in range.
    pub(crate) fn read_next<T: BufferPrimitive>(&mut self) -> T {
        let value = self.read_at(self.rpos);
        self.rpos += T::WIDTH;
        value
    }

    /// Relative write at the write cursor: grow-on-write, then advance
    /// the cursor by the value's width.
    pub(crate) fn append<T: BufferPrimitive>(&mut self, value: T) {
        let end = self.wpos + T::WIDTH;
        if self.storage.len() < end {
            self.storage.resize(end, 0);
        }
        value.store_native(&mut self.storage[self.wpos..end]);
        self.wpos = end;
    }

    /// Absolute write at `index`, growing storage to exactly
    /// `index + width` when needed. Relocates the write cursor to just
    /// past the written value.
    pub(crate) fn insert_at<T: BufferPrimitive>(&mut self, value: T, index: usize) {
        let end = index + T::WIDTH;
        if self.storage.len() < end {
            self.storage.resize(end, 0);
        }
        value.store_native(&mut self.storage[index..end]);
        self.wpos = end;
    }

    /// Read the byte at the read cursor without advancing it.
    pub fn peek(&self) -> u8 {
        self.read_at(self.rpos)
    }

    /// Relative bulk read: fill `out` from the read cursor, advancing it
    /// by `out.len()`.
    ///
    /// Bytes past the end of storage read as zero, and the cursor still
    /// advances by the full length, exactly as repeating the single-byte
    /// relative read would.
    pub fn get_bytes(&mut self, out: &mut [u8]) {
        let avail = self.bytes_remaining().min(out.len());
        if avail > 0 {
            out[..avail].copy_from_slice(&self.storage[self.rpos..self.rpos + avail]);
        }
        for b in &mut out[avail..] {
            *b = 0;
        }
        self.rpos += out.len();
    }

    /// Relative bulk write of `src` at the write cursor, advancing it by
    /// `src.len()`.
    pub fn put_bytes(&mut self, src: &[u8]) {
        if src.is_empty() {
            return;
        }
        let end = self.wpos + src.len();
        if self.storage.len() < end {
            self.storage.resize(end, 0);
        }
        self.storage[self.wpos..end].copy_from_slice(src);
        self.wpos = end;
    }

    /// Move the write cursor to `index`, then bulk-write `src` from
    /// there, ending with the cursor at `index + src.len()`.
    pub fn put_bytes_at(&mut self, src: &[u8], index: usize) {
        self.wpos = index;
        self.put_bytes(src);
    }

    /// Relative bulk copy of another buffer's entire content.
    ///
    /// Reads `src` absolutely, so its cursors are unperturbed.
    pub fn put_buffer(&mut self, src: &ByteBuffer) {
        self.put_bytes(src.as_slice());
    }

    /// Linear scan for `key` over absolute positions `start..size()`,
    /// returning the first index whose decoded value equals it.
    ///
    /// Compatibility behavior: the scan treats a decoded all-zero value
    /// as an end-of-data sentinel and aborts (reporting not-found) when
    /// `key` itself is non-zero. A non-zero key located after the first
    /// zero-decoding position is therefore unfindable.
    pub fn find<T: BufferPrimitive>(&self, key: T, start: usize) -> Option<usize> {
        for i in start..self.storage.len() {
            let data: T = self.read_at(i);
            if key != T::ZERO && data == T::ZERO {
                return None;
            }
            if data == key {
                return Some(i);
            }
        }
        None
    }

    /// Overwrite occurrences of the byte `key` with `rep`, in place.
    ///
    /// Scans like [`find`](Self::find), including the zero-sentinel early
    /// exit. Neither cursor moves and the storage never grows. With
    /// `first_only` set, stops after one replacement.
    pub fn replace(&mut self, key: u8, rep: u8, start: usize, first_only: bool) {
        for i in start..self.storage.len() {
            let data = self.storage[i];
            if key != 0 && data == 0 {
                return;
            }
            if data == key {
                self.storage[i] = rep;
                if first_only {
                    return;
                }
            }
        }
    }

    /// View the entire storage as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Consume the buffer, yielding its content as an immutable `Bytes`.
    pub fn freeze(self) -> Bytes {
        self.storage.freeze()
    }

    /// Hex rendering of every stored byte, in index order.
    pub fn hex_dump(&self) -> String {
        let mut out = String::with_capacity(self.storage.len() * 5);
        for (i, b) in self.storage.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "0x{:02x}", b);
        }
        out
    }

    /// ASCII rendering of every stored byte, in index order.
    pub fn ascii_dump(&self) -> String {
        self.storage.iter().map(|&b| b as char).collect()
    }
}

impl Default for ByteBuffer {
    fn default() -> ByteBuffer {
        ByteBuffer::new()
    }
}

/// Copies content only: the clone's cursors start at zero regardless of
/// the source's cursor state. This asymmetry is part of the contract.
impl Clone for ByteBuffer {
    fn clone(&self) -> ByteBuffer {
        ByteBuffer {
            storage: self.storage.clone(),
            rpos: 0,
            wpos: 0,
        }
    }
}

/// Equal iff the lengths match and every stored byte matches. Cursor
/// positions are deliberately excluded.
impl PartialEq for ByteBuffer {
    fn eq(&self, other: &ByteBuffer) -> bool {
        self.storage == other.storage
    }
}

impl Eq for ByteBuffer {}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.storage.len())
            .field("read_pos", &self.rpos)
            .field("write_pos", &self.wpos)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_bytes() {
        let mut buf = ByteBuffer::with_capacity(30);
        buf.put_u8(0xDE);
        buf.put_u8(0xAD);
        buf.put_u8(0xBA);
        buf.put_u8(0xBE);
        assert_eq!(buf.size(), 4);
        assert_eq!(buf.write_pos(), 4);

        assert_eq!(buf.get_u8(), 0xDE);
        assert_eq!(buf.get_u8(), 0xAD);
        assert_eq!(buf.get_u8(), 0xBA);
        assert_eq!(buf.get_u8(), 0xBE);
        assert_eq!(buf.read_pos(), 4);
    }

    #[test]
    fn out_of_range_read_is_zero_and_advances() {
        let mut buf = ByteBuffer::from_bytes(&[1, 2]);
        assert_eq!(buf.get_u32(), 0);
        assert_eq!(buf.read_pos(), 4);

        // Absolute variant leaves the cursor alone.
        assert_eq!(buf.get_u32_at(1), 0);
        assert_eq!(buf.read_pos(), 4);
    }

    #[test]
    fn relative_write_grows_exactly() {
        let mut buf = ByteBuffer::with_capacity(2);
        buf.put_u64(7);
        assert_eq!(buf.size(), 8);
        assert_eq!(buf.write_pos(), 8);
    }

    #[test]
    fn write_cursor_past_end_zero_fills_gap() {
        let mut buf = ByteBuffer::from_bytes(&[0xFF]);
        buf.set_write_pos(3);
        buf.put_u8(0xAA);
        assert_eq!(buf.as_slice(), &[0xFF, 0, 0, 0xAA]);
    }

    #[test]
    fn absolute_write_grows_to_index_plus_width() {
        let mut buf = ByteBuffer::with_capacity(0);
        buf.put_u32_at(0xCAFE, 10);
        assert_eq!(buf.size(), 14);
        assert_eq!(buf.write_pos(), 14);
        assert_eq!(buf.get_u32_at(10), 0xCAFE);
    }

    #[test]
    fn absolute_write_relocates_write_cursor() {
        let mut buf = ByteBuffer::from_bytes(&[0; 16]);
        buf.put_u16_at(0x0102, 4);
        assert_eq!(buf.write_pos(), 6);
        assert_eq!(buf.size(), 16);
    }

    #[test]
    fn clear_discards_content_and_cursors() {
        let mut buf = ByteBuffer::with_capacity(0);
        assert_eq!(buf.size(), 0);
        buf.clear();
        assert_eq!(buf.size(), 0);

        let mut buf = ByteBuffer::from_bytes(&[1, 2, 3]);
        buf.get_u8();
        buf.clear();
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.read_pos(), 0);
        assert_eq!(buf.write_pos(), 0);
    }

    #[test]
    fn resize_preserves_prefix_and_resets_cursors() {
        let mut buf = ByteBuffer::from_bytes(&[1, 2, 3, 4]);
        buf.set_read_pos(2);
        buf.resize(6);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 0, 0]);
        assert_eq!(buf.read_pos(), 0);
        assert_eq!(buf.write_pos(), 0);

        buf.resize(2);
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn clone_copies_content_not_cursors() {
        let mut buf = ByteBuffer::from_bytes(&[9, 8, 7]);
        buf.set_read_pos(2);
        buf.set_write_pos(1);

        let copy = buf.clone();
        assert_eq!(copy, buf);
        assert_eq!(copy.read_pos(), 0);
        assert_eq!(copy.write_pos(), 0);

        // Mutating the clone never touches the source.
        let mut copy = copy;
        copy.put_u8_at(0xFF, 0);
        assert_eq!(buf.as_slice(), &[9, 8, 7]);
    }

    #[test]
    fn equality_ignores_cursors_but_not_length() {
        let mut a = ByteBuffer::from_bytes(&[1, 2, 3]);
        let b = ByteBuffer::from_bytes(&[1, 2, 3]);
        a.set_read_pos(3);
        assert_eq!(a, b);
        assert_eq!(b, a);

        let c = ByteBuffer::from_bytes(&[1, 2, 3, 0]);
        assert_ne!(a, c);
    }

    #[test]
    fn find_scans_and_respects_zero_sentinel() {
        let buf = ByteBuffer::from_bytes(&[5, 6, 7, 8]);
        assert_eq!(buf.find(7u8, 0), Some(2));
        assert_eq!(buf.find(7u8, 3), None);

        // All-zero storage: a non-zero key is reported missing immediately.
        let zeroed = ByteBuffer::from_bytes(&[0, 0, 9, 0]);
        assert_eq!(zeroed.find(9u8, 0), None);
        // A zero key is exempt from the sentinel.
        assert_eq!(zeroed.find(0u8, 0), Some(0));
    }

    #[test]
    fn replace_first_only_and_all() {
        let mut buf = ByteBuffer::from_bytes(b"abcabc");
        buf.replace(b'a', b'x', 0, true);
        assert_eq!(buf.as_slice(), b"xbcabc");

        let mut buf = ByteBuffer::from_bytes(b"abcabc");
        buf.replace(b'a', b'x', 0, false);
        assert_eq!(buf.as_slice(), b"xbcxbc");

        // Sentinel stops the scan before the second occurrence.
        let mut buf = ByteBuffer::from_bytes(&[b'a', 0, b'a']);
        buf.replace(b'a', b'x', 0, false);
        assert_eq!(buf.as_slice(), &[b'x', 0, b'a']);
    }

    #[test]
    fn bulk_reads_zero_fill_past_end() {
        let mut buf = ByteBuffer::from_bytes(&[1, 2]);
        let mut out = [0xFFu8; 4];
        buf.get_bytes(&mut out);
        assert_eq!(out, [1, 2, 0, 0]);
        assert_eq!(buf.read_pos(), 4);

        // Cursor already past the end: all zeros, cursor still moves.
        buf.set_read_pos(10);
        let mut out = [0xEEu8; 2];
        buf.get_bytes(&mut out);
        assert_eq!(out, [0, 0]);
        assert_eq!(buf.read_pos(), 12);
    }

    #[test]
    fn find_multibyte_values() {
        let mut buf = ByteBuffer::with_capacity(8);
        buf.put_u16(0x1111);
        buf.put_u16(0x2222);
        buf.put_u16(0x3333);
        assert_eq!(buf.find(0x2222u16, 0), Some(2));
        // The tail positions decode as zero once the span runs past the
        // end, so a missing key exits via the sentinel.
        assert_eq!(buf.find(0x4444u16, 0), None);
    }

    #[test]
    fn put_bytes_at_relocates_and_writes() {
        let mut buf = ByteBuffer::with_capacity(4);
        buf.put_bytes_at(b"hi", 3);
        assert_eq!(buf.as_slice(), &[0, 0, 0, b'h', b'i']);
        assert_eq!(buf.write_pos(), 5);
    }

    #[test]
    fn put_buffer_leaves_source_cursors_alone() {
        let mut src = ByteBuffer::from_bytes(&[1, 2, 3]);
        src.set_read_pos(1);
        let mut dst = ByteBuffer::with_capacity(8);
        dst.put_buffer(&src);
        assert_eq!(dst.as_slice(), &[1, 2, 3]);
        assert_eq!(src.read_pos(), 1);
        assert_eq!(src.write_pos(), 3);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut buf = ByteBuffer::from_bytes(&[42, 43]);
        assert_eq!(buf.peek(), 42);
        assert_eq!(buf.peek(), 42);
        assert_eq!(buf.get_u8(), 42);
        assert_eq!(buf.peek(), 43);
    }

    #[test]
    fn bytes_remaining_saturates() {
        let mut buf = ByteBuffer::from_bytes(&[0; 4]);
        assert_eq!(buf.bytes_remaining(), 4);
        buf.set_read_pos(10);
        assert_eq!(buf.bytes_remaining(), 0);
    }
}
