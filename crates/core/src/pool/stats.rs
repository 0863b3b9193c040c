// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Counters of a scratch buffer pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
	/// Acquisitions served from the free list
	pub hits: u64,
	/// Acquisitions that had to allocate
	pub misses: u64,
	/// Buffers currently in the free list
	pub available: usize,
	/// Buffers currently on loan
	pub outstanding: usize,
}

impl PoolStats {
	pub fn hit_rate(&self) -> f64 {
		let total = self.hits + self.misses;
		if total == 0 {
			0.0
		} else {
			self.hits as f64 / total as f64
		}
	}
}
