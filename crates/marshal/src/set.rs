// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem::size_of;

use bumpalo::{Bump, collections::Vec as BumpVec};
use colbatch_abi::data::SetColumnFFI;
use colbatch_column::ColumnDescriptor;
use colbatch_core::{CursorId, MAX_COLUMNS, NativeEngine, Result, SessionId, SetOptions, Status, internal_error};
use tracing::{instrument, warn};

use crate::{check_capacity, pin::PinnedSlice};

/// Write every column in `columns` into the prepared update under `cursor`
/// with one native call.
///
/// Values are not copied: each descriptor's encoded value is pinned in place
/// until the call returns. A descriptor without a value is still sent, as a
/// null column. Each descriptor's status is overwritten with the engine's
/// per-column outcome. Returns the native call's own status.
///
/// A value longer than the native length type allows fails the whole batch
/// before the native call; its descriptor reports
/// [`Status::INVALID_BUFFER_SIZE`] and the other statuses are left untouched.
pub fn set_columns<E>(
	engine: &E,
	session: SessionId,
	cursor: CursorId,
	columns: &mut [&mut dyn ColumnDescriptor],
) -> Result<Status>
where
	E: NativeEngine + ?Sized,
{
	set_columns_bounded(engine, session, cursor, columns, MAX_COLUMNS)
}

#[instrument(name = "marshal::set_columns", level = "debug", skip_all, fields(count = columns.len()))]
pub(crate) fn set_columns_bounded<E>(
	engine: &E,
	session: SessionId,
	cursor: CursorId,
	columns: &mut [&mut dyn ColumnDescriptor],
	max_columns: usize,
) -> Result<Status>
where
	E: NativeEngine + ?Sized,
{
	check_capacity(columns.len(), max_columns)?;
	if columns.is_empty() {
		return Ok(Status::SUCCESS);
	}
	check_value_lengths(columns, u32::MAX as usize)?;

	let arena = Bump::with_capacity(columns.len() * (size_of::<SetColumnFFI>() + size_of::<Status>()));

	let (status, outcomes) = {
		// pins must stay put until the native call returns
		let pins: Vec<PinnedSlice<'_>> = columns.iter().map(|column| PinnedSlice::pin(column.encode())).collect();

		let mut records = BumpVec::with_capacity_in(columns.len(), &arena);
		for (column, pin) in columns.iter().zip(&pins) {
			let mut options = column.set_options();
			if pin.is_zero_length() {
				options |= SetOptions::ZERO_LENGTH;
			}
			let data_len = u32::try_from(pin.len())
				.map_err(|_| internal_error!("value of {} bytes exceeds the native length type", pin.len()))?;
			records.push(SetColumnFFI {
				column_id: column.column_id(),
				data: pin.as_ptr(),
				data_len,
				options,
				sequence: column.sequence(),
				status: Status::SUCCESS,
			});
		}

		// SAFETY: every non-null record points into a pin that lives until the end of this block
		let status = unsafe { engine.set_columns(session, cursor, &mut records) };

		let mut outcomes = BumpVec::with_capacity_in(records.len(), &arena);
		outcomes.extend(records.iter().map(|record| record.status));
		(status, outcomes)
	};

	if status.is_error() {
		warn!(%status, "multi-column write failed");
	}

	for (column, outcome) in columns.iter_mut().zip(outcomes) {
		column.set_status(outcome);
	}

	Ok(status)
}

/// Flag every value longer than `max_len` bytes and fail if there is one
fn check_value_lengths(columns: &mut [&mut dyn ColumnDescriptor], max_len: usize) -> Result<()> {
	let mut oversized = None;
	for column in columns.iter_mut() {
		let len = column.encode().len();
		if len > max_len {
			column.set_status(Status::INVALID_BUFFER_SIZE);
			oversized.get_or_insert((column.column_id(), len));
		}
	}

	match oversized {
		Some((column, len)) => {
			Err(internal_error!("{} holds {} bytes, more than the native length type allows", column, len))
		}
		None => Ok(()),
	}
}
