// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::num::NonZeroU32;

use colbatch_column::{
	BinaryColumn, BoolColumn, ByteColumn, Column, ColumnDescriptor, Float32Column, Float64Column, Int8Column,
	Int16Column, Int32Column, Int64Column, Primitive, StringColumn, Uint16Column, Uint32Column, Uint64Column,
	UuidColumn,
};
use colbatch_core::{CursorId, MemoryPool, PoolConfig, SessionId, SetOptions, Status};
use colbatch_marshal::{retrieve_columns, set_columns};
use colbatch_testing::{MemoryEngine, tracing::init_tracing};

const SESSION: SessionId = SessionId(1);
const ROW: CursorId = CursorId(1);

fn engine() -> MemoryEngine {
	init_tracing();
	MemoryEngine::new().with_columns(1..=32)
}

fn round_trip<T: Primitive>(engine: &MemoryEngine, column: u32, value: T) {
	let mut written = Column::<T>::new(column).with_value(value.clone());
	let status = set_columns(engine, SESSION, ROW, &mut [&mut written]).unwrap();
	assert_eq!(status, Status::SUCCESS);
	assert_eq!(written.status(), Status::SUCCESS);

	let pool = MemoryPool::new(PoolConfig::test());
	let mut read = Column::<T>::new(column);
	retrieve_columns(engine, &pool, SESSION, ROW, &mut [&mut read]).unwrap();
	assert_eq!(read.get(), Some(&value), "column {column}");
}

#[test]
fn test_every_primitive_round_trips() {
	let engine = engine();

	round_trip(&engine, 1, true);
	round_trip(&engine, 2, -8i8);
	round_trip(&engine, 3, -1600i16);
	round_trip(&engine, 4, 42i32);
	round_trip(&engine, 5, i64::MIN);
	round_trip(&engine, 6, 0xABu8);
	round_trip(&engine, 7, 65_000u16);
	round_trip(&engine, 8, u32::MAX);
	round_trip(&engine, 9, 1u64 << 40);
	round_trip(&engine, 10, 1.5f32);
	round_trip(&engine, 11, -2.25f64);
	round_trip(&engine, 12, [0x11u8; 16]);
	round_trip(&engine, 13, "hello".to_string());
	round_trip(&engine, 14, "ü".repeat(400));
	round_trip(&engine, 15, vec![0u8, 1, 2, 255]);
	round_trip(&engine, 16, vec![7u8; 5000]);
}

#[test]
fn test_batch_round_trip() {
	let engine = engine();

	let mut flag = BoolColumn::new(1u32).with_value(false);
	let mut small = Int8Column::new(2u32).with_value(3);
	let mut medium = Int16Column::new(3u32).with_value(-3);
	let mut id = Int32Column::new(4u32).with_value(42);
	let mut big = Int64Column::new(5u32).with_value(-42);
	let mut byte = ByteColumn::new(6u32).with_value(9);
	let mut port = Uint16Column::new(7u32).with_value(8080);
	let mut count = Uint32Column::new(8u32).with_value(77);
	let mut total = Uint64Column::new(9u32).with_value(1 << 50);
	let mut ratio = Float32Column::new(10u32).with_value(0.5);
	let mut mean = Float64Column::new(11u32).with_value(1e-9);
	let mut guid = UuidColumn::new(12u32).with_value([0xfe; 16]);
	let mut name = StringColumn::new(13u32).with_value("row".to_string());
	let mut payload = BinaryColumn::new(15u32).with_value(vec![1, 2, 3]);

	let status = set_columns(
		&engine,
		SESSION,
		ROW,
		&mut [
			&mut flag,
			&mut small,
			&mut medium,
			&mut id,
			&mut big,
			&mut byte,
			&mut port,
			&mut count,
			&mut total,
			&mut ratio,
			&mut mean,
			&mut guid,
			&mut name,
			&mut payload,
		],
	)
	.unwrap();
	assert_eq!(status, Status::SUCCESS);
	assert_eq!(engine.calls().multi_writes, 1);

	let written = [
		flag.value(),
		small.value(),
		medium.value(),
		id.value(),
		big.value(),
		byte.value(),
		port.value(),
		count.value(),
		total.value(),
		ratio.value(),
		mean.value(),
		guid.value(),
		name.value(),
		payload.value(),
	];

	for column in [
		&mut flag as &mut dyn ColumnDescriptor,
		&mut small,
		&mut medium,
		&mut id,
		&mut big,
		&mut byte,
		&mut port,
		&mut count,
		&mut total,
		&mut ratio,
		&mut mean,
		&mut guid,
		&mut name,
		&mut payload,
	] {
		column.decode(&[], Status::COLUMN_NULL).unwrap();
		assert!(column.value().is_null());
	}

	let pool = MemoryPool::default();
	let status = retrieve_columns(
		&engine,
		&pool,
		SESSION,
		ROW,
		&mut [
			&mut flag,
			&mut small,
			&mut medium,
			&mut id,
			&mut big,
			&mut byte,
			&mut port,
			&mut count,
			&mut total,
			&mut ratio,
			&mut mean,
			&mut guid,
			&mut name,
			&mut payload,
		],
	)
	.unwrap();
	assert_eq!(status, Status::SUCCESS);
	assert_eq!(engine.calls().multi_reads, 1);

	let read = [
		flag.value(),
		small.value(),
		medium.value(),
		id.value(),
		big.value(),
		byte.value(),
		port.value(),
		count.value(),
		total.value(),
		ratio.value(),
		mean.value(),
		guid.value(),
		name.value(),
		payload.value(),
	];
	assert_eq!(read, written);
}

#[test]
fn test_per_column_write_failures() {
	let engine = engine();
	engine.fail_column(2u32, Status::TYPE_MISMATCH);

	let mut ok = Int32Column::new(1u32).with_value(1);
	let mut rejected = Int32Column::new(2u32).with_value(2);
	let mut unknown = StringColumn::new(99u32).with_value("x".to_string());

	let status = set_columns(&engine, SESSION, ROW, &mut [&mut ok, &mut rejected, &mut unknown]).unwrap();

	assert_eq!(status, Status::TYPE_MISMATCH);
	assert_eq!(ok.status(), Status::SUCCESS);
	assert_eq!(rejected.status(), Status::TYPE_MISMATCH);
	assert_eq!(unknown.status(), Status::COLUMN_NOT_FOUND);
	assert_eq!(engine.get(ROW, 1u32, 1), Some(1i32.to_le_bytes().to_vec()));
	assert_eq!(engine.get(ROW, 2u32, 1), None);
}

#[test]
fn test_batch_write_failure_still_updates_statuses() {
	let engine = engine();
	engine.fail_batch(Status::NOT_IN_UPDATE);
	let mut id = Int32Column::new(1u32).with_value(1);
	id.set_status(Status::COLUMN_NOT_FOUND);

	let status = set_columns(&engine, SESSION, ROW, &mut [&mut id]).unwrap();

	assert_eq!(status, Status::NOT_IN_UPDATE);
	assert_eq!(id.status(), Status::SUCCESS);
}

#[test]
fn test_empty_string_is_stored_not_null() {
	let engine = engine();
	let mut empty = StringColumn::new(13u32).with_value(String::new());
	set_columns(&engine, SESSION, ROW, &mut [&mut empty]).unwrap();

	let pool = MemoryPool::default();
	let mut read = StringColumn::new(13u32).with_value("stale".to_string());
	retrieve_columns(&engine, &pool, SESSION, ROW, &mut [&mut read]).unwrap();

	assert_eq!(read.status(), Status::SUCCESS);
	assert_eq!(read.get().map(String::as_str), Some(""));
}

#[test]
fn test_descriptor_options_are_passed_through() {
	let engine = engine();
	let mut tagged = BinaryColumn::new(15u32)
		.with_value(vec![1])
		.with_set_options(SetOptions::UNIQUE_MULTI_VALUES)
		.with_sequence(NonZeroU32::MIN);
	let mut appended = BinaryColumn::new(15u32)
		.with_value(vec![2])
		.with_sequence(NonZeroU32::new(2).unwrap());

	set_columns(&engine, SESSION, ROW, &mut [&mut tagged, &mut appended]).unwrap();

	let records = engine.last_set_records();
	assert_eq!(records[0].options, SetOptions::UNIQUE_MULTI_VALUES);
	assert_eq!(records[0].sequence, 1);
	assert_eq!(records[1].sequence, 2);
	assert_eq!(engine.get(ROW, 15u32, 2), Some(vec![2]));
}

#[test]
fn test_out_of_range_sequence_is_per_column() {
	let engine = engine();
	let mut gap = StringColumn::new(13u32).with_value("x".to_string()).with_sequence(NonZeroU32::new(5).unwrap());
	let mut fine = StringColumn::new(14u32).with_value("y".to_string());

	let status = set_columns(&engine, SESSION, ROW, &mut [&mut gap, &mut fine]).unwrap();

	assert_eq!(status, Status::BAD_SEQUENCE);
	assert_eq!(gap.status(), Status::BAD_SEQUENCE);
	assert_eq!(fine.status(), Status::SUCCESS);
}
