// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, BTreeSet, HashMap},
	ptr, slice,
};

use colbatch_abi::data::{RetrieveColumnFFI, SetColumnFFI};
use colbatch_core::{ColumnId, CursorId, NativeEngine, RetrieveOptions, SessionId, SetOptions, Status};
use parking_lot::Mutex;

/// Number of native calls an engine has served, by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
	pub multi_reads: usize,
	pub multi_writes: usize,
	pub single_reads: usize,
}

/// What the engine saw for one column of the last multi-column write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRecord {
	pub column_id: ColumnId,
	pub options: SetOptions,
	pub sequence: u32,
	pub data_len: u32,
	pub null_data: bool,
}

impl SetRecord {
	pub fn is_null(&self) -> bool {
		self.null_data && self.data_len == 0
	}
}

type Row = BTreeMap<ColumnId, Vec<Vec<u8>>>;

#[derive(Default)]
struct State {
	schema: BTreeSet<ColumnId>,
	rows: HashMap<CursorId, Row>,
	failing: HashMap<ColumnId, Status>,
	batch_status: Option<Status>,
	retry_status: Option<Status>,
	calls: CallCounts,
	last_set: Vec<SetRecord>,
}

/// In-memory stand-in for the native engine
///
/// Every cursor addresses one row. Columns must be declared before use;
/// reading an undeclared column reports [`Status::COLUMN_NOT_FOUND`], reading
/// an absent value reports [`Status::COLUMN_NULL`]. Values are multi-valued,
/// addressed by their 1-based sequence.
#[derive(Default)]
pub struct MemoryEngine {
	state: Mutex<State>,
}

impl MemoryEngine {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_columns(self, columns: impl IntoIterator<Item = u32>) -> Self {
		self.state.lock().schema.extend(columns.into_iter().map(ColumnId));
		self
	}

	pub fn define_column(&self, column: impl Into<ColumnId>) {
		self.state.lock().schema.insert(column.into());
	}

	/// Store `value` as the first value of `column`
	pub fn put(&self, cursor: CursorId, column: impl Into<ColumnId>, value: Vec<u8>) {
		let mut state = self.state.lock();
		let values = state.rows.entry(cursor).or_default().entry(column.into()).or_default();
		match values.first_mut() {
			Some(first) => *first = value,
			None => values.push(value),
		}
	}

	/// Append another value to a multi-valued column
	pub fn append(&self, cursor: CursorId, column: impl Into<ColumnId>, value: Vec<u8>) {
		let mut state = self.state.lock();
		state.rows.entry(cursor).or_default().entry(column.into()).or_default().push(value);
	}

	pub fn get(&self, cursor: CursorId, column: impl Into<ColumnId>, sequence: u32) -> Option<Vec<u8>> {
		let state = self.state.lock();
		let index = (sequence as usize).checked_sub(1)?;
		state.rows.get(&cursor)?.get(&column.into())?.get(index).cloned()
	}

	/// Make every access to `column` report `status`
	pub fn fail_column(&self, column: impl Into<ColumnId>, status: Status) {
		self.state.lock().failing.insert(column.into(), status);
	}

	/// Make multi-column calls return `status` after processing their records
	pub fn fail_batch(&self, status: Status) {
		self.state.lock().batch_status = Some(status);
	}

	/// Make single-column reads report `status`
	pub fn fail_retries(&self, status: Status) {
		self.state.lock().retry_status = Some(status);
	}

	pub fn calls(&self) -> CallCounts {
		self.state.lock().calls
	}

	pub fn reset_calls(&self) {
		self.state.lock().calls = CallCounts::default();
	}

	pub fn last_set_records(&self) -> Vec<SetRecord> {
		self.state.lock().last_set.clone()
	}
}

impl State {
	fn lookup(&self, cursor: CursorId, column: ColumnId, sequence: u32) -> Result<&[u8], Status> {
		if let Some(status) = self.failing.get(&column) {
			return Err(*status);
		}
		if !self.schema.contains(&column) {
			return Err(Status::COLUMN_NOT_FOUND);
		}
		let Some(row) = self.rows.get(&cursor) else {
			return Err(Status::NO_CURRENT_RECORD);
		};
		let Some(index) = (sequence as usize).checked_sub(1) else {
			return Err(Status::BAD_SEQUENCE);
		};
		row.get(&column).and_then(|values| values.get(index)).map(Vec::as_slice).ok_or(Status::COLUMN_NULL)
	}

	/// Copy as much of `value` as fits and report its full length
	fn copy_out(value: &[u8], buffer: *mut u8, buffer_len: usize) -> (Status, usize) {
		let count = value.len().min(buffer_len);
		if count > 0 {
			// SAFETY: the caller guarantees `buffer` is valid for `buffer_len` bytes
			unsafe { ptr::copy_nonoverlapping(value.as_ptr(), buffer, count) };
		}
		let status = if value.len() > buffer_len {
			Status::BUFFER_TRUNCATED
		} else {
			Status::SUCCESS
		};
		(status, value.len())
	}

	fn store(&mut self, cursor: CursorId, record: &SetColumnFFI) -> Status {
		if let Some(status) = self.failing.get(&record.column_id) {
			return *status;
		}
		if !self.schema.contains(&record.column_id) {
			return Status::COLUMN_NOT_FOUND;
		}
		let Some(index) = (record.sequence as usize).checked_sub(1) else {
			return Status::BAD_SEQUENCE;
		};

		let value = if record.is_null() && !record.options.contains(SetOptions::ZERO_LENGTH) {
			None
		} else if record.data_len == 0 {
			Some(Vec::new())
		} else {
			// SAFETY: the caller guarantees `data` is valid for `data_len` bytes
			Some(unsafe { slice::from_raw_parts(record.data, record.data_len as usize) }.to_vec())
		};

		let values = self.rows.entry(cursor).or_default().entry(record.column_id).or_default();
		match value {
			None => {
				if index < values.len() {
					values.remove(index);
				}
				Status::SUCCESS
			}
			Some(value) if index < values.len() => {
				values[index] = value;
				Status::SUCCESS
			}
			Some(value) if index == values.len() => {
				values.push(value);
				Status::SUCCESS
			}
			Some(_) => Status::BAD_SEQUENCE,
		}
	}
}

fn batch_outcome(statuses: impl Iterator<Item = Status>) -> Status {
	let mut outcome = Status::SUCCESS;
	for status in statuses {
		if status.is_error() {
			return status;
		}
		if status.is_truncated() {
			outcome = status;
		}
	}
	outcome
}

impl NativeEngine for MemoryEngine {
	unsafe fn retrieve_columns(
		&self,
		_session: SessionId,
		cursor: CursorId,
		records: &mut [RetrieveColumnFFI],
	) -> Status {
		let mut state = self.state.lock();
		state.calls.multi_reads += 1;

		for record in records.iter_mut() {
			let (status, actual_len) = match state.lookup(cursor, record.column_id, record.sequence) {
				Ok(value) => State::copy_out(value, record.buffer, record.buffer_len as usize),
				Err(status) => (status, 0),
			};
			record.status = status;
			record.actual_len = actual_len as u32;
		}

		state.batch_status.unwrap_or_else(|| batch_outcome(records.iter().map(|r| r.status)))
	}

	unsafe fn set_columns(&self, _session: SessionId, cursor: CursorId, records: &mut [SetColumnFFI]) -> Status {
		let mut state = self.state.lock();
		state.calls.multi_writes += 1;

		state.last_set = records
			.iter()
			.map(|record| SetRecord {
				column_id: record.column_id,
				options: record.options,
				sequence: record.sequence,
				data_len: record.data_len,
				null_data: record.data.is_null(),
			})
			.collect();

		for record in records.iter_mut() {
			record.status = state.store(cursor, record);
		}

		state.batch_status.unwrap_or_else(|| batch_outcome(records.iter().map(|r| r.status)))
	}

	fn retrieve_column(
		&self,
		_session: SessionId,
		cursor: CursorId,
		column_id: ColumnId,
		buffer: &mut [u8],
		sequence: u32,
		_options: RetrieveOptions,
	) -> (Status, usize) {
		let mut state = self.state.lock();
		state.calls.single_reads += 1;
		if let Some(status) = state.retry_status {
			return (status, 0);
		}

		match state.lookup(cursor, column_id, sequence) {
			Ok(value) => State::copy_out(value, buffer.as_mut_ptr(), buffer.len()),
			Err(status) => (status, 0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SESSION: SessionId = SessionId(0);
	const ROW: CursorId = CursorId(1);

	#[test]
	fn test_retrieve_column_truncates() {
		let engine = MemoryEngine::new().with_columns([1]);
		engine.put(ROW, 1u32, b"abcdef".to_vec());

		let mut buffer = [0u8; 3];
		let (status, actual) =
			engine.retrieve_column(SESSION, ROW, ColumnId(1), &mut buffer, 1, RetrieveOptions::NONE);

		assert_eq!(status, Status::BUFFER_TRUNCATED);
		assert_eq!(actual, 6);
		assert_eq!(&buffer, b"abc");
		assert_eq!(engine.calls().single_reads, 1);
	}

	#[test]
	fn test_lookup_failures() {
		let engine = MemoryEngine::new().with_columns([1, 2]);
		engine.put(ROW, 1u32, vec![1]);
		engine.fail_column(2u32, Status::TYPE_MISMATCH);

		let mut buffer = [0u8; 4];
		let read = |column: u32, cursor: CursorId, sequence: u32, buffer: &mut [u8]| {
			engine.retrieve_column(SESSION, cursor, ColumnId(column), buffer, sequence, RetrieveOptions::NONE).0
		};

		assert_eq!(read(1, ROW, 1, &mut buffer), Status::SUCCESS);
		assert_eq!(read(1, ROW, 2, &mut buffer), Status::COLUMN_NULL);
		assert_eq!(read(9, ROW, 1, &mut buffer), Status::COLUMN_NOT_FOUND);
		assert_eq!(read(1, CursorId(7), 1, &mut buffer), Status::NO_CURRENT_RECORD);
		assert_eq!(read(2, ROW, 1, &mut buffer), Status::TYPE_MISMATCH);
	}

	#[test]
	fn test_multi_valued_columns() {
		let engine = MemoryEngine::new().with_columns([1]);
		engine.append(ROW, 1u32, b"a".to_vec());
		engine.append(ROW, 1u32, b"b".to_vec());

		assert_eq!(engine.get(ROW, 1u32, 2), Some(b"b".to_vec()));
		assert_eq!(engine.get(ROW, 1u32, 3), None);
		assert_eq!(engine.get(ROW, 1u32, 0), None);
	}

	#[test]
	fn test_batch_outcome_prefers_errors() {
		assert_eq!(batch_outcome([Status::SUCCESS, Status::COLUMN_NULL].into_iter()), Status::SUCCESS);
		assert_eq!(
			batch_outcome([Status::BUFFER_TRUNCATED, Status::SUCCESS].into_iter()),
			Status::BUFFER_TRUNCATED
		);
		assert_eq!(
			batch_outcome([Status::BUFFER_TRUNCATED, Status::COLUMN_NOT_FOUND].into_iter()),
			Status::COLUMN_NOT_FOUND
		);
	}
}
