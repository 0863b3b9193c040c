// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Placement of per-column destinations inside one scratch buffer

use colbatch_core::{Result, return_internal_error};
use tracing::trace;

/// Region of the scratch buffer assigned to one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
	pub offset: usize,
	pub len: usize,
}

impl Slot {
	/// One past the last byte, or `None` on overflow
	pub fn end(&self) -> Option<usize> {
		self.offset.checked_add(self.len)
	}
}

/// Assign a slot to every column of a batch read.
///
/// `sizes` holds each column's encoded size, 0 for variable length. Fixed
/// columns are packed first, in order, with exactly their size. The space
/// left over is split evenly between the variable columns; a value that does
/// not fit its share is re-read separately after the batch call.
///
/// Fixed columns that do not fit into `buffer_len` are an internal error.
pub fn plan_retrieve_layout(sizes: &[usize], buffer_len: usize) -> Result<Vec<Slot>> {
	let mut slots = vec![Slot::default(); sizes.len()];
	let mut cursor = 0usize;
	let mut variable = 0usize;

	for (slot, &size) in slots.iter_mut().zip(sizes) {
		if size == 0 {
			variable += 1;
			continue;
		}
		let Some(end) = cursor.checked_add(size) else {
			return_internal_error!("slot offset overflow at {} + {}", cursor, size);
		};
		if end > buffer_len {
			return_internal_error!("fixed-size columns need {} bytes, scratch buffer holds {}", end, buffer_len);
		}
		*slot = Slot {
			offset: cursor,
			len: size,
		};
		cursor = end;
	}

	if variable > 0 {
		let share = (buffer_len - cursor) / variable;
		trace!(variable, share, "partitioning remaining scratch space");

		for (slot, &size) in slots.iter_mut().zip(sizes) {
			if size != 0 {
				continue;
			}
			*slot = Slot {
				offset: cursor,
				len: share,
			};
			let Some(end) = cursor.checked_add(share) else {
				return_internal_error!("slot offset overflow at {} + {}", cursor, share);
			};
			cursor = end;
		}
	}

	debug_assert!(cursor <= buffer_len, "slots end at {} past buffer of {}", cursor, buffer_len);
	Ok(slots)
}
