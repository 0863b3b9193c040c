// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Scratch buffer pooling for batch column reads.
//!
//! A batch read packs every column's destination into one scratch buffer.
//! Buffers have a fixed size and are handed back to the pool once the read
//! has been decoded, so repeated row reads do not allocate.

mod guard;
mod stats;

pub use guard::ScratchBuffer;
use parking_lot::Mutex;
pub use stats::PoolStats;
use tracing::trace;

use crate::config::PoolConfig;

/// Supplies and reclaims fixed-size scratch buffers
pub trait ScratchPool {
	/// Length of every buffer returned by [`acquire`](Self::acquire)
	fn buffer_size(&self) -> usize;

	/// Take exclusive ownership of a buffer of [`buffer_size`](Self::buffer_size) bytes
	fn acquire(&self) -> Vec<u8>;

	/// Hand a buffer back; the caller must not keep any reference into it
	fn release(&self, buffer: Vec<u8>);
}

impl<P: ScratchPool + ?Sized> ScratchPool for &P {
	fn buffer_size(&self) -> usize {
		(**self).buffer_size()
	}

	fn acquire(&self) -> Vec<u8> {
		(**self).acquire()
	}

	fn release(&self, buffer: Vec<u8>) {
		(**self).release(buffer)
	}
}

/// Default in-process [`ScratchPool`] with a bounded free list
#[derive(Debug)]
pub struct MemoryPool {
	config: PoolConfig,
	free: Mutex<Vec<Vec<u8>>>,
	stats: Mutex<PoolStats>,
}

impl Default for MemoryPool {
	fn default() -> Self {
		Self::new(PoolConfig::default())
	}
}

impl MemoryPool {
	pub fn new(config: PoolConfig) -> Self {
		Self {
			free: Mutex::new(Vec::with_capacity(config.max_pooled)),
			stats: Mutex::new(PoolStats::default()),
			config,
		}
	}

	pub fn config(&self) -> &PoolConfig {
		&self.config
	}

	pub fn stats(&self) -> PoolStats {
		let mut stats = *self.stats.lock();
		stats.available = self.free.lock().len();
		stats
	}

	/// Drop every pooled buffer
	pub fn clear(&self) {
		self.free.lock().clear();
	}
}

impl ScratchPool for MemoryPool {
	fn buffer_size(&self) -> usize {
		self.config.buffer_size
	}

	fn acquire(&self) -> Vec<u8> {
		let pooled = self.free.lock().pop();
		let mut stats = self.stats.lock();
		stats.outstanding += 1;
		match pooled {
			Some(buffer) => {
				stats.hits += 1;
				buffer
			}
			None => {
				stats.misses += 1;
				trace!(size = self.config.buffer_size, "allocating scratch buffer");
				vec![0u8; self.config.buffer_size]
			}
		}
	}

	fn release(&self, buffer: Vec<u8>) {
		{
			let mut stats = self.stats.lock();
			stats.outstanding = stats.outstanding.saturating_sub(1);
		}

		// Buffers of a different size were not handed out by this pool
		if buffer.len() != self.config.buffer_size {
			return;
		}

		let mut free = self.free.lock();
		if free.len() < self.config.max_pooled {
			free.push(buffer);
		}
	}
}
