// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem::size_of;

use bumpalo::{Bump, collections::Vec as BumpVec};
use colbatch_abi::data::RetrieveColumnFFI;
use colbatch_column::ColumnDescriptor;
use colbatch_core::{
	CursorId, MAX_COLUMNS, NativeEngine, Result, ScratchBuffer, ScratchPool, SessionId, Status, internal_error,
};
use tracing::{instrument, trace, warn};

use crate::{
	check_capacity, decode_column,
	fallback::{Truncated, retrieve_truncated},
	layout::plan_retrieve_layout,
};

/// Read every column in `columns` from the record under `cursor` with one
/// native call.
///
/// Each descriptor's status is overwritten with the engine's per-column
/// outcome, whatever the call itself returns. Descriptors read successfully
/// are decoded; truncated ones are re-read individually before returning.
/// Failed descriptors are left without a value, as are descriptors whose
/// bytes do not decode (those report [`Status::TYPE_MISMATCH`]).
/// Returns the native call's own status.
pub fn retrieve_columns<E, P>(
	engine: &E,
	pool: &P,
	session: SessionId,
	cursor: CursorId,
	columns: &mut [&mut dyn ColumnDescriptor],
) -> Result<Status>
where
	E: NativeEngine + ?Sized,
	P: ScratchPool + ?Sized,
{
	retrieve_columns_bounded(engine, pool, session, cursor, columns, MAX_COLUMNS)
}

#[instrument(name = "marshal::retrieve_columns", level = "debug", skip_all, fields(count = columns.len()))]
pub(crate) fn retrieve_columns_bounded<E, P>(
	engine: &E,
	pool: &P,
	session: SessionId,
	cursor: CursorId,
	columns: &mut [&mut dyn ColumnDescriptor],
	max_columns: usize,
) -> Result<Status>
where
	E: NativeEngine + ?Sized,
	P: ScratchPool + ?Sized,
{
	check_capacity(columns.len(), max_columns)?;
	if columns.is_empty() {
		return Ok(Status::SUCCESS);
	}

	let mut scratch = ScratchBuffer::acquire(pool);
	let sizes: Vec<usize> = columns.iter().map(|column| column.encoded_size()).collect();
	let slots = plan_retrieve_layout(&sizes, scratch.len())?;

	let arena = Bump::with_capacity(columns.len() * size_of::<RetrieveColumnFFI>());
	let mut records = BumpVec::with_capacity_in(columns.len(), &arena);

	let base = scratch.as_mut_ptr();
	for (column, slot) in columns.iter().zip(&slots) {
		let buffer_len = u32::try_from(slot.len)
			.map_err(|_| internal_error!("slot of {} bytes exceeds the native length type", slot.len))?;
		records.push(RetrieveColumnFFI {
			column_id: column.column_id(),
			// SAFETY: the layout keeps every slot inside the scratch buffer
			buffer: unsafe { base.add(slot.offset) },
			buffer_len,
			actual_len: 0,
			options: column.retrieve_options(),
			sequence: column.sequence(),
			status: Status::SUCCESS,
		});
	}

	// SAFETY: every record points into `scratch`, which outlives the call
	let status = unsafe { engine.retrieve_columns(session, cursor, &mut records) };
	if status.is_error() {
		warn!(%status, "multi-column read failed");
	}

	let mut truncated = Vec::new();

	for (index, (column, record)) in columns.iter_mut().zip(records.iter()).enumerate() {
		column.set_status(record.status);

		if record.status.is_truncated() {
			truncated.push(Truncated {
				index,
				actual_len: record.actual_len as usize,
			});
			continue;
		}
		if record.status.is_error() {
			column.reset_value();
			continue;
		}

		let slot = slots[index];
		let len = (record.actual_len as usize).min(slot.len);
		decode_column(&mut **column, &scratch[slot.offset..slot.offset + len], record.status);
	}

	drop(records);
	scratch.release();

	if !truncated.is_empty() {
		trace!(count = truncated.len(), "re-reading truncated columns");
		retrieve_truncated(engine, session, cursor, columns, &truncated)?;
	}

	Ok(status)
}
