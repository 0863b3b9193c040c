// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Upper bound on the number of columns in one batch call
pub const MAX_COLUMNS: usize = 1024;

/// Configuration of a [`MemoryPool`](crate::MemoryPool)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
	/// Size of every scratch buffer in bytes
	pub buffer_size: usize,
	/// Number of released buffers kept for reuse
	pub max_pooled: usize,
}

impl Default for PoolConfig {
	fn default() -> Self {
		Self {
			buffer_size: 16 * 1024,
			max_pooled: 16,
		}
	}
}

impl PoolConfig {
	/// Small buffers so tests exercise the truncation path
	pub fn test() -> Self {
		Self {
			buffer_size: 256,
			max_pooled: 2,
		}
	}

	pub fn production() -> Self {
		Self {
			buffer_size: 64 * 1024,
			max_pooled: 64,
		}
	}

	pub fn development() -> Self {
		Self::default()
	}
}

/// Configuration of a batch column marshaller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalConfig {
	/// Largest accepted batch; clamped to [`MAX_COLUMNS`]
	pub max_columns: usize,
	pub pool: PoolConfig,
}

impl Default for MarshalConfig {
	fn default() -> Self {
		Self {
			max_columns: MAX_COLUMNS,
			pool: PoolConfig::default(),
		}
	}
}

impl MarshalConfig {
	pub fn test() -> Self {
		Self {
			max_columns: MAX_COLUMNS,
			pool: PoolConfig::test(),
		}
	}

	pub fn production() -> Self {
		Self {
			max_columns: MAX_COLUMNS,
			pool: PoolConfig::production(),
		}
	}

	pub fn development() -> Self {
		Self {
			max_columns: MAX_COLUMNS,
			pool: PoolConfig::development(),
		}
	}

	pub fn effective_max_columns(&self) -> usize {
		self.max_columns.min(MAX_COLUMNS)
	}
}
