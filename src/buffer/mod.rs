// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The byte buffer engine: growable storage addressed through two
//! independent cursors, with native-order typed access on top.
//!
//! Two conventions hold everywhere in this module and are relied on by
//! every consumer:
//!
//! - **grow-on-write**: a write whose span ends past the current storage
//!   length grows the storage to exactly accommodate it, zero-filling any
//!   gap. Writes never fail and never truncate.
//! - **zero-on-out-of-range-read**: a read whose span ends past the
//!   current storage length yields the target type's zero value. Reads
//!   never fail, and a relative read advances the read cursor even when
//!   it was out of range.
//!
//! Both policies are implemented once, in the private primitives that all
//! typed accessors route through.

mod byte_buffer;
mod primitives;

pub use self::byte_buffer::ByteBuffer;
pub use self::primitives::BufferPrimitive;
