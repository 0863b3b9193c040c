// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ptr::null;

use colbatch_column::Encoded;

/// A descriptor's encoded value, held in place for one native write call
///
/// The pin borrows the descriptor for `'a`, so the descriptor cannot be
/// mutated or dropped while the pin exists. Small values are stored inside the
/// pin itself; the pointer from [`as_ptr`](Self::as_ptr) therefore stays valid
/// only while the pin is neither moved nor dropped.
#[derive(Debug)]
pub struct PinnedSlice<'a> {
	encoded: Encoded<'a>,
}

impl<'a> PinnedSlice<'a> {
	pub fn pin(encoded: Encoded<'a>) -> Self {
		Self {
			encoded,
		}
	}

	/// Start of the value, or null when there is no value
	pub fn as_ptr(&self) -> *const u8 {
		match self.encoded.as_bytes() {
			Some(bytes) => bytes.as_ptr(),
			None => null(),
		}
	}

	pub fn len(&self) -> usize {
		self.encoded.len()
	}

	pub fn is_empty(&self) -> bool {
		self.encoded.is_empty()
	}

	pub fn is_null(&self) -> bool {
		self.encoded.is_null()
	}

	/// A present value of zero length
	pub fn is_zero_length(&self) -> bool {
		!self.is_null() && self.is_empty()
	}
}
