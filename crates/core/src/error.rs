// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colbatch_abi::{ColumnId, Status};

use crate::internal::Location;

pub type Result<T> = std::result::Result<T, Error>;

/// Request-level failures of a batch column transfer
///
/// Per-column failures never surface here; they are recorded on the column
/// descriptor that caused them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("batch of {count} columns exceeds the maximum of {max}")]
	TooManyColumns {
		count: usize,
		max: usize,
	},

	#[error("retry of truncated {column} failed with {status}")]
	Fallback {
		column: ColumnId,
		status: Status,
	},

	#[error("internal error: {reason} ({location})")]
	Internal {
		reason: String,
		location: Location,
	},
}

impl Error {
	/// Stable diagnostic code
	pub fn code(&self) -> &'static str {
		match self {
			Error::TooManyColumns {
				..
			} => "BATCH_001",
			Error::Fallback {
				..
			} => "BATCH_002",
			Error::Internal {
				..
			} => "INTERNAL_ERROR",
		}
	}

	pub fn is_internal(&self) -> bool {
		matches!(self, Error::Internal { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_too_many_columns_message() {
		let err = Error::TooManyColumns {
			count: 1025,
			max: 1024,
		};
		assert_eq!(err.code(), "BATCH_001");
		assert_eq!(err.to_string(), "batch of 1025 columns exceeds the maximum of 1024");
	}

	#[test]
	fn test_fallback_message() {
		let err = Error::Fallback {
			column: ColumnId(7),
			status: Status::NO_CURRENT_RECORD,
		};
		assert_eq!(err.code(), "BATCH_002");
		assert!(err.to_string().contains("column#7"));
		assert!(err.to_string().contains("NO_CURRENT_RECORD"));
		assert!(!err.is_internal());
	}
}
