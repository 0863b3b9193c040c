// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! RAII guard for a scratch buffer on loan from a pool

use std::ops::{Deref, DerefMut};

use super::ScratchPool;

/// A scratch buffer that goes back to its pool when dropped
pub struct ScratchBuffer<'p, P: ScratchPool + ?Sized> {
	pool: &'p P,
	buffer: Option<Vec<u8>>,
}

impl<'p, P: ScratchPool + ?Sized> ScratchBuffer<'p, P> {
	pub fn acquire(pool: &'p P) -> Self {
		Self {
			buffer: Some(pool.acquire()),
			pool,
		}
	}

	/// Return the buffer to the pool now
	pub fn release(self) {
		drop(self)
	}
}

impl<P: ScratchPool + ?Sized> Deref for ScratchBuffer<'_, P> {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		self.buffer.as_deref().unwrap_or(&[])
	}
}

impl<P: ScratchPool + ?Sized> DerefMut for ScratchBuffer<'_, P> {
	fn deref_mut(&mut self) -> &mut [u8] {
		self.buffer.as_deref_mut().unwrap_or(&mut [])
	}
}

impl<P: ScratchPool + ?Sized> Drop for ScratchBuffer<'_, P> {
	fn drop(&mut self) {
		if let Some(buffer) = self.buffer.take() {
			self.pool.release(buffer);
		}
	}
}
