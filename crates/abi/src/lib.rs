// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the native storage engine's column transfer calls
//!
//! This crate defines the FFI-safe types exchanged with a handle-based storage
//! engine: opaque handles, option bit flags, status codes, the per-column
//! transfer records and the callback table of the engine's call surface.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod callbacks;
pub mod data;
pub mod handle;
pub mod options;
pub mod status;

pub use handle::{ColumnId, CursorId, SessionId};
pub use options::{RetrieveOptions, SetOptions};
pub use status::Status;
