// Copyright 2018-2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

/// Bytes reserved in the backing storage when no capacity is provided.
pub const DEFAULT_CAPACITY: usize = 4096;
