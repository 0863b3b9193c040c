// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colbatch_column::ColumnDescriptor;
use colbatch_core::{CursorId, Error, NativeEngine, Result, SessionId};

use crate::decode_column;
use tracing::{debug, instrument};

/// A column whose probe slot was too small for its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Truncated {
	pub index: usize,
	pub actual_len: usize,
}

/// Re-read each truncated column on its own into a buffer of exactly the
/// reported size.
///
/// A failing retry aborts the whole retrieval: the batch call already
/// promised a correction for these columns.
#[instrument(name = "marshal::retrieve_truncated", level = "debug", skip_all, fields(count = truncated.len()))]
pub(crate) fn retrieve_truncated<E>(
	engine: &E,
	session: SessionId,
	cursor: CursorId,
	columns: &mut [&mut dyn ColumnDescriptor],
	truncated: &[Truncated],
) -> Result<()>
where
	E: NativeEngine + ?Sized,
{
	for entry in truncated {
		let column = &mut *columns[entry.index];
		let column_id = column.column_id();
		debug!(column = %column_id, size = entry.actual_len, "retrying truncated column");

		let mut buffer = vec![0u8; entry.actual_len];
		let (status, actual_len) = engine.retrieve_column(
			session,
			cursor,
			column_id,
			&mut buffer,
			column.sequence(),
			column.retrieve_options(),
		);
		column.set_status(status);

		if status.is_error() || status.is_truncated() {
			column.reset_value();
			return Err(Error::Fallback {
				column: column_id,
				status,
			});
		}

		let len = actual_len.min(buffer.len());
		decode_column(column, &buffer[..len], status);
	}
	Ok(())
}
