// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The fixed-width primitive protocol and the typed accessors built on it.
//!
//! Values cross the byte boundary via explicit `to_ne_bytes`/`from_ne_bytes`
//! packing: native byte order, defined bit-casts for floats, no pointer
//! reinterpretation.

use std::mem::size_of;

use super::byte_buffer::ByteBuffer;

/// A fixed-width value the buffer can store and decode in native byte
/// order.
///
/// `ZERO` is the all-zero-bits value: what out-of-range reads yield, and
/// what the linear scan treats as its end-of-data sentinel.
pub trait BufferPrimitive: Copy + PartialEq + Sized {
    /// Serialized width in bytes.
    const WIDTH: usize;
    /// The value with an all-zero byte representation.
    const ZERO: Self;

    /// Copy the native-order byte representation into `out` (exactly
    /// `WIDTH` bytes).
    fn store_native(self, out: &mut [u8]);

    /// Reassemble a value from exactly `WIDTH` native-order bytes.
    fn load_native(src: &[u8]) -> Self;
}

macro_rules! buffer_primitive {
    ($t:ty, $zero:expr) => {
        impl BufferPrimitive for $t {
            const WIDTH: usize = size_of::<$t>();
            const ZERO: Self = $zero;

            fn store_native(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn load_native(src: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$t>()];
                raw.copy_from_slice(src);
                <$t>::from_ne_bytes(raw)
            }
        }
    };
}

buffer_primitive!(u8, 0);
buffer_primitive!(i8, 0);
buffer_primitive!(u16, 0);
buffer_primitive!(u32, 0);
buffer_primitive!(u64, 0);
buffer_primitive!(f32, 0.0);
buffer_primitive!(f64, 0.0);

macro_rules! typed_accessors {
    ($t:ty, $get:ident, $get_at:ident, $put:ident, $put_at:ident) => {
        impl ByteBuffer {
            /// Relative read: zero value when out of range, read cursor
            /// advances either way.
            pub fn $get(&mut self) -> $t {
                self.read_next::<$t>()
            }

            /// Absolute read at `index`; cursors untouched.
            pub fn $get_at(&self, index: usize) -> $t {
                self.read_at::<$t>(index)
            }

            /// Relative write; grows storage as needed and advances the
            /// write cursor.
            pub fn $put(&mut self, value: $t) {
                self.append::<$t>(value)
            }

            /// Absolute write at `index`; grows storage as needed and
            /// relocates the write cursor to `index` plus the width.
            pub fn $put_at(&mut self, value: $t, index: usize) {
                self.insert_at::<$t>(value, index)
            }
        }
    };
}

typed_accessors!(u8, get_u8, get_u8_at, put_u8, put_u8_at);
typed_accessors!(i8, get_i8, get_i8_at, put_i8, put_i8_at);
typed_accessors!(u16, get_u16, get_u16_at, put_u16, put_u16_at);
typed_accessors!(u32, get_u32, get_u32_at, put_u32, put_u32_at);
typed_accessors!(u64, get_u64, get_u64_at, put_u64, put_u64_at);
typed_accessors!(f32, get_f32, get_f32_at, put_f32, put_f32_at);
typed_accessors!(f64, get_f64, get_f64_at, put_f64, put_f64_at);
