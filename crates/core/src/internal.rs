// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Internal defects: conditions that indicate a bug in this layer rather than
//! a problem with the caller's request or the engine's data.

use std::fmt::{self, Display, Formatter};

/// Source location captured by [`internal_error!`](crate::internal_error)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
	pub file: &'static str,
	pub line: u32,
	pub column: u32,
	pub module: &'static str,
}

impl Display for Location {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{} in {}", self.file, self.line, self.column, self.module)
	}
}

/// Creates an internal error with automatic source location capture
#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::Error::Internal {
            reason: ::std::string::String::from($reason),
            location: $crate::internal::Location {
                file: file!(),
                line: line!(),
                column: column!(),
                module: module_path!(),
            },
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::Internal {
            reason: format!($fmt, $($arg)*),
            location: $crate::internal::Location {
                file: file!(),
                line: line!(),
                column: column!(),
                module: module_path!(),
            },
        }
    };
}

/// Returns an internal error with automatic source location capture
#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::internal_error!($reason))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::internal_error!($fmt, $($arg)*))
    };
}
