// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::num::NonZeroU32;

use colbatch_abi::{ColumnId, RetrieveOptions, SetOptions, Status};

use crate::{ColumnDescriptor, DecodeError, Encoded, Primitive, Value};

/// Column descriptor holding a value of a primitive type
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T: Primitive> {
	column_id: ColumnId,
	sequence: NonZeroU32,
	retrieve_options: RetrieveOptions,
	set_options: SetOptions,
	status: Status,
	value: Option<T>,
}

pub type BoolColumn = Column<bool>;
pub type Int8Column = Column<i8>;
pub type Int16Column = Column<i16>;
pub type Int32Column = Column<i32>;
pub type Int64Column = Column<i64>;
pub type Uint8Column = Column<u8>;
pub type Uint16Column = Column<u16>;
pub type Uint32Column = Column<u32>;
pub type Uint64Column = Column<u64>;
pub type ByteColumn = Column<u8>;
pub type Float32Column = Column<f32>;
pub type Float64Column = Column<f64>;
pub type FixedBinaryColumn<const N: usize> = Column<[u8; N]>;
pub type UuidColumn = Column<[u8; 16]>;
pub type StringColumn = Column<String>;
pub type BinaryColumn = Column<Vec<u8>>;

impl<T: Primitive> Column<T> {
	pub fn new(column_id: impl Into<ColumnId>) -> Self {
		Self {
			column_id: column_id.into(),
			sequence: NonZeroU32::MIN,
			retrieve_options: RetrieveOptions::NONE,
			set_options: SetOptions::NONE,
			status: Status::SUCCESS,
			value: None,
		}
	}

	pub fn with_sequence(mut self, sequence: NonZeroU32) -> Self {
		self.sequence = sequence;
		self
	}

	pub fn with_retrieve_options(mut self, options: RetrieveOptions) -> Self {
		self.retrieve_options = options;
		self
	}

	pub fn with_set_options(mut self, options: SetOptions) -> Self {
		self.set_options = options;
		self
	}

	pub fn with_value(mut self, value: T) -> Self {
		self.value = Some(value);
		self
	}

	pub fn set_value(&mut self, value: Option<T>) {
		self.value = value;
	}

	pub fn get(&self) -> Option<&T> {
		self.value.as_ref()
	}

	pub fn take(&mut self) -> Option<T> {
		self.value.take()
	}

	/// Forget the value and the last outcome, keeping identity and options
	pub fn clear(&mut self) {
		self.value = None;
		self.status = Status::SUCCESS;
	}
}

impl<T: Primitive> ColumnDescriptor for Column<T> {
	fn column_id(&self) -> ColumnId {
		self.column_id
	}

	fn sequence(&self) -> u32 {
		self.sequence.get()
	}

	fn retrieve_options(&self) -> RetrieveOptions {
		self.retrieve_options
	}

	fn set_options(&self) -> SetOptions {
		self.set_options
	}

	fn encoded_size(&self) -> usize {
		T::SIZE
	}

	fn status(&self) -> Status {
		self.status
	}

	fn set_status(&mut self, status: Status) {
		self.status = status;
	}

	fn decode(&mut self, bytes: &[u8], status: Status) -> Result<(), DecodeError> {
		// a fixed-size column with no bytes holds no value
		if status.is_null() || (T::SIZE > 0 && bytes.is_empty()) {
			self.value = None;
			return Ok(());
		}
		self.value = Some(T::decode(bytes)?);
		Ok(())
	}

	fn reset_value(&mut self) {
		self.value = None;
	}

	fn encode(&self) -> Encoded<'_> {
		match &self.value {
			Some(value) => value.encode(),
			None => Encoded::Null,
		}
	}

	fn value(&self) -> Value {
		self.value.as_ref().map_or(Value::Null, T::to_value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_column_defaults() {
		let column = Int32Column::new(ColumnId(3));
		assert_eq!(column.column_id(), ColumnId(3));
		assert_eq!(column.sequence(), 1);
		assert_eq!(column.status(), Status::SUCCESS);
		assert_eq!(column.value(), Value::Null);
		assert!(column.encode().is_null());
		assert!(!column.is_variable());
	}

	#[test]
	fn test_variable_columns_report_zero_size() {
		assert!(StringColumn::new(1u32).is_variable());
		assert!(BinaryColumn::new(1u32).is_variable());
		assert_eq!(UuidColumn::new(1u32).encoded_size(), 16);
	}

	#[test]
	fn test_decode_success() {
		let mut column = StringColumn::new(1u32);
		column.decode(b"hello", Status::SUCCESS).unwrap();
		assert_eq!(column.get().map(String::as_str), Some("hello"));
		assert_eq!(column.value(), Value::Utf8("hello".to_string()));
	}

	#[test]
	fn test_decode_null_clears_value() {
		let mut column = Int64Column::new(1u32).with_value(9);
		column.decode(&[], Status::COLUMN_NULL).unwrap();
		assert_eq!(column.get(), None);

		let mut column = Int64Column::new(1u32).with_value(9);
		column.decode(&[], Status::SUCCESS).unwrap();
		assert_eq!(column.get(), None);
	}

	#[test]
	fn test_empty_variable_value_is_not_null() {
		let mut column = BinaryColumn::new(1u32);
		column.decode(&[], Status::SUCCESS).unwrap();
		assert_eq!(column.get(), Some(&Vec::new()));
	}

	#[test]
	fn test_decode_wrong_length_keeps_previous_value() {
		let mut column = Int32Column::new(1u32).with_value(5);
		let err = column.decode(&[1, 2], Status::SUCCESS).unwrap_err();
		assert_eq!(
			err,
			DecodeError::Length {
				expected: 4,
				actual: 2
			}
		);
		assert_eq!(column.get(), Some(&5));
	}

	#[test]
	fn test_reset_value_keeps_status() {
		let mut column = StringColumn::new(1u32).with_value("old".to_string());
		column.set_status(Status::TYPE_MISMATCH);
		column.reset_value();
		assert_eq!(column.get(), None);
		assert_eq!(column.status(), Status::TYPE_MISMATCH);
	}

	#[test]
	fn test_builders() {
		let column = BoolColumn::new(2u32)
			.with_sequence(NonZeroU32::new(3).unwrap())
			.with_retrieve_options(RetrieveOptions::COPY)
			.with_set_options(SetOptions::UNIQUE_MULTI_VALUES)
			.with_value(true);
		assert_eq!(column.sequence(), 3);
		assert_eq!(column.retrieve_options(), RetrieveOptions::COPY);
		assert_eq!(column.set_options(), SetOptions::UNIQUE_MULTI_VALUES);
		assert_eq!(column.encode().as_bytes(), Some(&[1u8][..]));
	}

	#[test]
	fn test_clear_resets_value_and_status() {
		let mut column = Uint16Column::new(1u32).with_value(7);
		column.set_status(Status::COLUMN_NOT_FOUND);
		column.clear();
		assert_eq!(column.get(), None);
		assert_eq!(column.status(), Status::SUCCESS);
	}

	#[test]
	fn test_usable_as_trait_object() {
		let mut a = Int32Column::new(1u32).with_value(42);
		let mut b = StringColumn::new(2u32).with_value("hi".to_string());
		let columns: [&mut dyn ColumnDescriptor; 2] = [&mut a, &mut b];
		let values: Vec<Value> = columns.iter().map(|c| c.value()).collect();
		assert_eq!(values, vec![Value::Int4(42), Value::Utf8("hi".to_string())]);
	}
}
