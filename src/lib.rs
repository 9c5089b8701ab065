// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! A growable byte buffer addressed through two independent cursors,
//! with native-order typed access for fixed-width primitives, plus the
//! codec layers (HTTP messages, chat packets) built on its public
//! contract.
//!
//! The engine never fails on out-of-range access: reads past the end
//! yield zero values and writes past the end grow the storage. See the
//! [`buffer`] module documentation for the two policies.

pub mod buffer;
pub mod codec;
pub mod constants;
pub mod error;
pub mod http;
pub mod packet;

pub use crate::{
    buffer::{BufferPrimitive, ByteBuffer},
    codec::{DecodeFrom, DecodeResult, EncodeResult, EncodeTo},
    error::CodecError,
};
