// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocation sizes for the short strings and lists this crate builds on every
//! render call. Code strings like `"1;4;38"` and set-only sequences like `"\x1b[35;1m"`
//! are tiny, so they almost never spill to the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: If you make this number too large, eg: more than 16, then it will slow down
// rendering of many short styled strings.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for code strings and set-only sequences. When this
/// gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`]. A style rarely combines more than a foreground,
/// a background and a couple of attributes.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
