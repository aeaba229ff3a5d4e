// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::result;

use thiserror::Error;

/// Result type for heap operations that can fail with a [`HeapError`].
pub type Result<T, E = HeapError> = result::Result<T, E>;

/// The ways a heap operation can be refused.
///
/// A failed call never leaves the heap partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// An item was requested from a heap holding no items.
    #[error("cannot remove from an empty heap")]
    EmptyContainer,
    /// A rank outside `1..=len` was requested.
    #[error("rank {rank} is out of range for a heap of {len} items")]
    InvalidRank { rank: usize, len: usize },
}
