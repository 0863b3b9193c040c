// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Direction-specific option bits passed through to the engine untouched

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

macro_rules! option_bits {
	($name:ident { $($(#[$doc:meta])* $flag:ident = $bit:expr,)* }) => {
		#[repr(transparent)]
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub struct $name(pub u32);

		impl $name {
			pub const NONE: Self = Self(0);
			$($(#[$doc])* pub const $flag: Self = Self($bit);)*

			pub const fn bits(self) -> u32 {
				self.0
			}

			pub const fn contains(self, other: Self) -> bool {
				self.0 & other.0 == other.0
			}

			pub fn insert(&mut self, other: Self) {
				self.0 |= other.0;
			}

			pub const fn is_empty(self) -> bool {
				self.0 == 0
			}
		}

		impl BitOr for $name {
			type Output = Self;

			fn bitor(self, rhs: Self) -> Self {
				Self(self.0 | rhs.0)
			}
		}

		impl BitOrAssign for $name {
			fn bitor_assign(&mut self, rhs: Self) {
				self.0 |= rhs.0;
			}
		}
	};
}

option_bits!(RetrieveOptions {
	/// Read from the copy buffer of a prepared update instead of the record
	COPY = 0x0001,
	/// Read the value from the current index entry
	FROM_INDEX = 0x0002,
	/// Do not substitute the column's default value for a missing one
	IGNORE_DEFAULT = 0x0020,
	/// Return the number of values of a multi-valued column
	TAGGED_COUNT = 0x0040,
});

option_bits!(SetOptions {
	/// Append to an existing long value
	APPEND_LONG_VALUE = 0x0001,
	/// Replace a long value in place
	OVERWRITE_LONG_VALUE = 0x0004,
	/// A zero-length value is stored as an empty value, not as null
	ZERO_LENGTH = 0x0020,
	/// Reject duplicate values of a multi-valued column
	UNIQUE_MULTI_VALUES = 0x0080,
});

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_set_options_compose() {
		let mut options = SetOptions::APPEND_LONG_VALUE;
		assert!(!options.contains(SetOptions::ZERO_LENGTH));

		options |= SetOptions::ZERO_LENGTH;
		assert!(options.contains(SetOptions::ZERO_LENGTH));
		assert!(options.contains(SetOptions::APPEND_LONG_VALUE));
		assert_eq!(options.bits(), 0x0021);
	}

	#[test]
	fn test_empty_options() {
		assert!(RetrieveOptions::NONE.is_empty());
		assert!(RetrieveOptions::default().is_empty());
		assert!(RetrieveOptions::COPY.contains(RetrieveOptions::NONE));
	}
}
