// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use colbatch_column::ColumnDescriptor;
use colbatch_core::{CursorId, MarshalConfig, MemoryPool, NativeEngine, Result, ScratchPool, SessionId, Status};

use crate::{retrieve::retrieve_columns_bounded, set::set_columns_bounded};

/// Binds a native engine, a scratch pool and configuration together
///
/// ```ignore
/// let marshaller = Marshaller::new(engine);
/// let mut id = Int32Column::new(1u32);
/// let mut name = StringColumn::new(2u32);
/// marshaller.retrieve_columns(session, cursor, &mut [&mut id, &mut name])?;
/// ```
pub struct Marshaller<E, P = MemoryPool> {
	engine: E,
	pool: P,
	config: MarshalConfig,
}

impl<E: NativeEngine> Marshaller<E, MemoryPool> {
	pub fn new(engine: E) -> Self {
		Self::with_config(engine, MarshalConfig::default())
	}

	pub fn with_config(engine: E, config: MarshalConfig) -> Self {
		let pool = MemoryPool::new(config.pool.clone());
		Self::with_pool(engine, pool, config)
	}
}

impl<E: NativeEngine, P: ScratchPool> Marshaller<E, P> {
	pub fn with_pool(engine: E, pool: P, config: MarshalConfig) -> Self {
		Self {
			engine,
			pool,
			config,
		}
	}

	pub fn engine(&self) -> &E {
		&self.engine
	}

	pub fn pool(&self) -> &P {
		&self.pool
	}

	pub fn config(&self) -> &MarshalConfig {
		&self.config
	}

	/// See [`retrieve_columns`](crate::retrieve_columns)
	pub fn retrieve_columns(
		&self,
		session: SessionId,
		cursor: CursorId,
		columns: &mut [&mut dyn ColumnDescriptor],
	) -> Result<Status> {
		retrieve_columns_bounded(
			&self.engine,
			&self.pool,
			session,
			cursor,
			columns,
			self.config.effective_max_columns(),
		)
	}

	/// See [`set_columns`](crate::set_columns)
	pub fn set_columns(
		&self,
		session: SessionId,
		cursor: CursorId,
		columns: &mut [&mut dyn ColumnDescriptor],
	) -> Result<Status> {
		set_columns_bounded(&self.engine, session, cursor, columns, self.config.effective_max_columns())
	}

	pub fn into_inner(self) -> (E, P) {
		(self.engine, self.pool)
	}
}
