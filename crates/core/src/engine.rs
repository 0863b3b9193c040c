// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The native engine's column transfer call surface

use colbatch_abi::{
	ColumnId, CursorId, RetrieveOptions, SessionId, Status,
	callbacks::EngineCallbacks,
	data::{RetrieveColumnFFI, SetColumnFFI},
};

/// Column-oriented get/set calls on the record under an open cursor
pub trait NativeEngine {
	/// Read every column described by `records` in one call.
	///
	/// Writes `actual_len` and `status` of each record and returns the
	/// call's own status.
	///
	/// # Safety
	/// Every `buffer` in `records` must be valid for writes of `buffer_len`
	/// bytes until this call returns.
	unsafe fn retrieve_columns(
		&self,
		session: SessionId,
		cursor: CursorId,
		records: &mut [RetrieveColumnFFI],
	) -> Status;

	/// Write every column described by `records` in one call.
	///
	/// Writes `status` of each record and returns the call's own status.
	///
	/// # Safety
	/// Every non-null `data` in `records` must be valid for reads of
	/// `data_len` bytes until this call returns.
	unsafe fn set_columns(&self, session: SessionId, cursor: CursorId, records: &mut [SetColumnFFI]) -> Status;

	/// Read one column into `buffer`, returning the status and the full
	/// length of the stored value.
	fn retrieve_column(
		&self,
		session: SessionId,
		cursor: CursorId,
		column_id: ColumnId,
		buffer: &mut [u8],
		sequence: u32,
		options: RetrieveOptions,
	) -> (Status, usize);
}

impl<E: NativeEngine + ?Sized> NativeEngine for &E {
	unsafe fn retrieve_columns(
		&self,
		session: SessionId,
		cursor: CursorId,
		records: &mut [RetrieveColumnFFI],
	) -> Status {
		unsafe { (**self).retrieve_columns(session, cursor, records) }
	}

	unsafe fn set_columns(&self, session: SessionId, cursor: CursorId, records: &mut [SetColumnFFI]) -> Status {
		unsafe { (**self).set_columns(session, cursor, records) }
	}

	fn retrieve_column(
		&self,
		session: SessionId,
		cursor: CursorId,
		column_id: ColumnId,
		buffer: &mut [u8],
		sequence: u32,
		options: RetrieveOptions,
	) -> (Status, usize) {
		(**self).retrieve_column(session, cursor, column_id, buffer, sequence, options)
	}
}

/// [`NativeEngine`] backed by the engine's C callback table
pub struct CallbacksEngine {
	callbacks: EngineCallbacks,
}

impl CallbacksEngine {
	/// # Safety
	/// All function pointers in `callbacks` must be callable with its `ctx`
	/// for the lifetime of the returned engine.
	pub unsafe fn new(callbacks: EngineCallbacks) -> Self {
		Self {
			callbacks,
		}
	}
}

impl NativeEngine for CallbacksEngine {
	unsafe fn retrieve_columns(
		&self,
		session: SessionId,
		cursor: CursorId,
		records: &mut [RetrieveColumnFFI],
	) -> Status {
		let Ok(count) = u32::try_from(records.len()) else {
			return Status::INVALID_PARAMETER;
		};
		Status((self.callbacks.retrieve_columns)(self.callbacks.ctx, session, cursor, records.as_mut_ptr(), count))
	}

	unsafe fn set_columns(&self, session: SessionId, cursor: CursorId, records: &mut [SetColumnFFI]) -> Status {
		let Ok(count) = u32::try_from(records.len()) else {
			return Status::INVALID_PARAMETER;
		};
		Status((self.callbacks.set_columns)(self.callbacks.ctx, session, cursor, records.as_mut_ptr(), count))
	}

	fn retrieve_column(
		&self,
		session: SessionId,
		cursor: CursorId,
		column_id: ColumnId,
		buffer: &mut [u8],
		sequence: u32,
		options: RetrieveOptions,
	) -> (Status, usize) {
		let Ok(buffer_len) = u32::try_from(buffer.len()) else {
			return (Status::INVALID_BUFFER_SIZE, 0);
		};
		let mut actual_len = 0u32;
		let status = (self.callbacks.retrieve_column)(
			self.callbacks.ctx,
			session,
			cursor,
			column_id.0,
			buffer.as_mut_ptr(),
			buffer_len,
			&mut actual_len,
			sequence,
			options.bits(),
		);
		(Status(status), actual_len as usize)
	}
}
