// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column descriptors: the per-column unit of work of a batch transfer.
//!
//! A descriptor names a column of the record under a cursor, carries the
//! direction-specific option bits and, after a batch call, the value and the
//! per-column outcome reported by the engine.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use codec::{DecodeError, Primitive};
pub use column::*;
pub use descriptor::ColumnDescriptor;
pub use encoded::{Encoded, INLINE_CAPACITY};
pub use value::Value;

mod codec;
mod column;
mod descriptor;
mod encoded;
mod value;
