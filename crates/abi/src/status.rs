// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// Outcome code of a native engine call or of a single column within it
///
/// Codes are totally ordered: negative values are failures, zero is success
/// and positive values are warnings. Warnings other than
/// [`Status::BUFFER_TRUNCATED`] are benign.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(pub i32);

impl Status {
	pub const SUCCESS: Status = Status(0);

	/// The column holds no value (warning)
	pub const COLUMN_NULL: Status = Status(1004);
	/// The supplied buffer was smaller than the value (warning)
	pub const BUFFER_TRUNCATED: Status = Status(1006);

	pub const INVALID_PARAMETER: Status = Status(-2);
	pub const INVALID_BUFFER_SIZE: Status = Status(-1047);
	pub const TYPE_MISMATCH: Status = Status(-1060);
	pub const COLUMN_NOT_FOUND: Status = Status(-1093);
	pub const BAD_SEQUENCE: Status = Status(-1518);
	pub const NO_CURRENT_RECORD: Status = Status(-1603);
	pub const NOT_IN_UPDATE: Status = Status(-1609);

	pub const fn code(self) -> i32 {
		self.0
	}

	pub const fn is_error(self) -> bool {
		self.0 < Self::SUCCESS.0
	}

	pub const fn is_success(self) -> bool {
		self.0 == Self::SUCCESS.0
	}

	pub const fn is_warning(self) -> bool {
		self.0 > Self::SUCCESS.0
	}

	pub const fn is_truncated(self) -> bool {
		self.0 == Self::BUFFER_TRUNCATED.0
	}

	pub const fn is_null(self) -> bool {
		self.0 == Self::COLUMN_NULL.0
	}

	/// Symbolic name of a known code
	pub fn name(self) -> Option<&'static str> {
		let name = match self {
			Self::SUCCESS => "SUCCESS",
			Self::COLUMN_NULL => "COLUMN_NULL",
			Self::BUFFER_TRUNCATED => "BUFFER_TRUNCATED",
			Self::INVALID_PARAMETER => "INVALID_PARAMETER",
			Self::INVALID_BUFFER_SIZE => "INVALID_BUFFER_SIZE",
			Self::TYPE_MISMATCH => "TYPE_MISMATCH",
			Self::COLUMN_NOT_FOUND => "COLUMN_NOT_FOUND",
			Self::BAD_SEQUENCE => "BAD_SEQUENCE",
			Self::NO_CURRENT_RECORD => "NO_CURRENT_RECORD",
			Self::NOT_IN_UPDATE => "NOT_IN_UPDATE",
			_ => return None,
		};
		Some(name)
	}
}

impl Display for Status {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "{} ({})", name, self.0),
			None => write!(f, "status {}", self.0),
		}
	}
}

impl From<i32> for Status {
	fn from(code: i32) -> Self {
		Self(code)
	}
}
