// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::{
	CursorId, SessionId,
	data::{RetrieveColumnFFI, SetColumnFFI},
};

/// Column transfer callbacks of the native storage engine
///
/// All calls are synchronous and block until the engine returns. Every
/// pointer handed to a callback only needs to stay valid until that callback
/// returns.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct EngineCallbacks {
	/// Engine-owned context passed back on every call
	pub ctx: *mut c_void,

	/// Read several columns of the record under the cursor in one call
	///
	/// # Parameters
	/// - `ctx`: Engine context
	/// - `session`: Session handle
	/// - `cursor`: Cursor handle positioned on a record
	/// - `records`: Array of transfer records, outputs filled by the engine
	/// - `count`: Number of records
	///
	/// # Returns
	/// - 0 on success, positive warning code, negative error code on failure
	pub retrieve_columns: extern "C" fn(
		ctx: *mut c_void,
		session: SessionId,
		cursor: CursorId,
		records: *mut RetrieveColumnFFI,
		count: u32,
	) -> i32,

	/// Write several columns of the prepared update in one call
	///
	/// # Parameters
	/// - `ctx`: Engine context
	/// - `session`: Session handle
	/// - `cursor`: Cursor handle with a prepared update
	/// - `records`: Array of transfer records, `status` filled by the engine
	/// - `count`: Number of records
	///
	/// # Returns
	/// - 0 on success, positive warning code, negative error code on failure
	pub set_columns: extern "C" fn(
		ctx: *mut c_void,
		session: SessionId,
		cursor: CursorId,
		records: *mut SetColumnFFI,
		count: u32,
	) -> i32,

	/// Read a single column into a caller buffer
	///
	/// # Parameters
	/// - `ctx`: Engine context
	/// - `session`: Session handle
	/// - `cursor`: Cursor handle positioned on a record
	/// - `column_id`: Column to read
	/// - `buffer`: Destination buffer
	/// - `buffer_len`: Length of `buffer`
	/// - `actual_len`: Output, full length of the value
	/// - `sequence`: 1-based index into a multi-valued column
	/// - `options`: Retrieval option bits
	///
	/// # Returns
	/// - 0 on success, positive warning code, negative error code on failure
	pub retrieve_column: extern "C" fn(
		ctx: *mut c_void,
		session: SessionId,
		cursor: CursorId,
		column_id: u32,
		buffer: *mut u8,
		buffer_len: u32,
		actual_len: *mut u32,
		sequence: u32,
		options: u32,
	) -> i32,
}
