// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colbatch_abi::{ColumnId, RetrieveOptions, SetOptions, Status};

use crate::{DecodeError, Encoded, Value};

/// The capability the batch engines need from a column descriptor
///
/// The engines never look at the concrete type behind this trait; every
/// variant supplies its own size, encoding and decoding.
pub trait ColumnDescriptor {
	fn column_id(&self) -> ColumnId;

	/// 1-based index into a multi-valued column
	fn sequence(&self) -> u32;

	fn retrieve_options(&self) -> RetrieveOptions;

	fn set_options(&self) -> SetOptions;

	/// Encoded size in bytes, or 0 when the value has variable length
	fn encoded_size(&self) -> usize;

	/// Outcome of the most recent batch call this descriptor took part in
	fn status(&self) -> Status;

	fn set_status(&mut self, status: Status);

	/// Replace the value with the decoding of `bytes`, as read with `status`
	fn decode(&mut self, bytes: &[u8], status: Status) -> Result<(), DecodeError>;

	/// Drop the value, leaving the descriptor unset
	fn reset_value(&mut self);

	fn encode(&self) -> Encoded<'_>;

	fn value(&self) -> Value;

	fn is_variable(&self) -> bool {
		self.encoded_size() == 0
	}
}
