// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! C callback table over a [`MemoryEngine`], for exercising the FFI path

use core::ffi::c_void;
use std::slice;

use colbatch_abi::{
	callbacks::EngineCallbacks,
	data::{RetrieveColumnFFI, SetColumnFFI},
};
use colbatch_core::{ColumnId, CursorId, NativeEngine, RetrieveOptions, SessionId};

use crate::MemoryEngine;

impl MemoryEngine {
	/// Callback table whose context points at `self`
	///
	/// The table must not be used after `self` is dropped or moved.
	pub fn callbacks(&self) -> EngineCallbacks {
		EngineCallbacks {
			ctx: self as *const MemoryEngine as *mut c_void,
			retrieve_columns,
			set_columns,
			retrieve_column,
		}
	}
}

unsafe fn engine<'a>(ctx: *mut c_void) -> &'a MemoryEngine {
	unsafe { &*(ctx as *const MemoryEngine) }
}

unsafe fn slice_mut<'a, T>(ptr: *mut T, len: u32) -> &'a mut [T] {
	if ptr.is_null() || len == 0 {
		return Default::default();
	}
	unsafe { slice::from_raw_parts_mut(ptr, len as usize) }
}

extern "C" fn retrieve_columns(
	ctx: *mut c_void,
	session: SessionId,
	cursor: CursorId,
	records: *mut RetrieveColumnFFI,
	count: u32,
) -> i32 {
	unsafe {
		let records = slice_mut(records, count);
		engine(ctx).retrieve_columns(session, cursor, records).code()
	}
}

extern "C" fn set_columns(
	ctx: *mut c_void,
	session: SessionId,
	cursor: CursorId,
	records: *mut SetColumnFFI,
	count: u32,
) -> i32 {
	unsafe {
		let records = slice_mut(records, count);
		engine(ctx).set_columns(session, cursor, records).code()
	}
}

extern "C" fn retrieve_column(
	ctx: *mut c_void,
	session: SessionId,
	cursor: CursorId,
	column_id: u32,
	buffer: *mut u8,
	buffer_len: u32,
	actual_len: *mut u32,
	sequence: u32,
	options: u32,
) -> i32 {
	unsafe {
		let buffer = slice_mut(buffer, buffer_len);
		let (status, actual) = engine(ctx).retrieve_column(
			session,
			cursor,
			ColumnId(column_id),
			buffer,
			sequence,
			RetrieveOptions(options),
		);
		if !actual_len.is_null() {
			*actual_len = u32::try_from(actual).unwrap_or(u32::MAX);
		}
		status.code()
	}
}
