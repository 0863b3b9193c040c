// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ptr::{null, null_mut};

use crate::{ColumnId, RetrieveOptions, SetOptions, Status};

/// FFI-safe transfer record for one column of a multi-column read
///
/// The caller fills the input fields; the engine writes `actual_len` and
/// `status`. When the value is larger than `buffer_len`, the engine copies
/// `buffer_len` bytes, reports the full size in `actual_len` and sets
/// `status` to [`Status::BUFFER_TRUNCATED`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetrieveColumnFFI {
	/// Column to read
	pub column_id: ColumnId,
	/// Destination buffer (may be null when `buffer_len` is 0)
	pub buffer: *mut u8,
	/// Declared length of `buffer` in bytes
	pub buffer_len: u32,
	/// Output: full length of the stored value
	pub actual_len: u32,
	/// Retrieval option bits
	pub options: RetrieveOptions,
	/// 1-based index into a multi-valued column
	pub sequence: u32,
	/// Output: per-column outcome
	pub status: Status,
}

impl RetrieveColumnFFI {
	pub const fn empty() -> Self {
		Self {
			column_id: ColumnId(0),
			buffer: null_mut(),
			buffer_len: 0,
			actual_len: 0,
			options: RetrieveOptions::NONE,
			sequence: 1,
			status: Status::SUCCESS,
		}
	}
}

/// FFI-safe transfer record for one column of a multi-column write
///
/// A null `data` pointer with zero length writes null unless `options`
/// contains [`SetOptions::ZERO_LENGTH`], in which case an empty value is
/// stored.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SetColumnFFI {
	/// Column to write
	pub column_id: ColumnId,
	/// Source bytes (null for "no value")
	pub data: *const u8,
	/// Length of `data` in bytes
	pub data_len: u32,
	/// Set option bits
	pub options: SetOptions,
	/// 1-based index into a multi-valued column
	pub sequence: u32,
	/// Output: per-column outcome
	pub status: Status,
}

impl SetColumnFFI {
	pub const fn empty() -> Self {
		Self {
			column_id: ColumnId(0),
			data: null(),
			data_len: 0,
			options: SetOptions::NONE,
			sequence: 1,
			status: Status::SUCCESS,
		}
	}

	pub fn is_null(&self) -> bool {
		self.data.is_null() && self.data_len == 0
	}
}
