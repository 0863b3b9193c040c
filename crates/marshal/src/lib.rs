// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Batched column transfer between column descriptors and a native engine.
//!
//! Each direction costs exactly one native multi-column call:
//!
//! - [`retrieve_columns`] packs every descriptor's destination into one pooled
//!   scratch buffer, reads, decodes, and re-reads any truncated column on its
//!   own with an exactly sized buffer.
//! - [`set_columns`] pins every descriptor's encoded value in place for the
//!   duration of the single write call.
//!
//! Per-column outcomes are written back to each descriptor's status; only
//! request-level failures are returned as [`Error`](colbatch_core::Error).

#![cfg_attr(not(debug_assertions), deny(warnings))]
#![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
#![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use layout::{Slot, plan_retrieve_layout};
pub use marshaller::Marshaller;
pub use pin::PinnedSlice;
pub use retrieve::retrieve_columns;
pub use set::set_columns;

use colbatch_column::ColumnDescriptor;
use colbatch_core::{Error, Result, Status};
use tracing::warn;

mod fallback;
mod layout;
mod marshaller;
mod pin;
mod retrieve;
mod set;

pub(crate) fn check_capacity(count: usize, max: usize) -> Result<()> {
	if count > max {
		return Err(Error::TooManyColumns {
			count,
			max,
		});
	}
	Ok(())
}

/// Decode `bytes` into `column`; bytes the decoder rejects leave the column
/// unset with [`Status::TYPE_MISMATCH`].
pub(crate) fn decode_column(column: &mut dyn ColumnDescriptor, bytes: &[u8], status: Status) {
	if let Err(err) = column.decode(bytes, status) {
		warn!(column = %column.column_id(), %err, "column value rejected by decoder");
		column.reset_value();
		column.set_status(Status::TYPE_MISMATCH);
	}
}
