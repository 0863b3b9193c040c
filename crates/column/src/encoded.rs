// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Largest fixed-size encoding held inline
pub const INLINE_CAPACITY: usize = 16;

/// Encoded form of a descriptor's value for the write path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded<'a> {
	/// The descriptor has no value
	Null,
	/// Small fixed-size encodings, stored by value
	Inline {
		bytes: [u8; INLINE_CAPACITY],
		len: u8,
	},
	/// Bytes owned by the descriptor
	Borrowed(&'a [u8]),
}

impl<'a> Encoded<'a> {
	pub fn inline(src: &[u8]) -> Self {
		debug_assert!(src.len() <= INLINE_CAPACITY);
		let mut bytes = [0u8; INLINE_CAPACITY];
		bytes[..src.len()].copy_from_slice(src);
		Encoded::Inline {
			bytes,
			len: src.len() as u8,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Encoded::Null)
	}

	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Encoded::Null => None,
			Encoded::Inline {
				bytes,
				len,
			} => Some(&bytes[..*len as usize]),
			Encoded::Borrowed(bytes) => Some(bytes),
		}
	}

	pub fn len(&self) -> usize {
		self.as_bytes().map_or(0, <[u8]>::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
