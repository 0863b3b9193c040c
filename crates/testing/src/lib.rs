// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support: an in-memory native engine and tracing setup

pub use engine::{CallCounts, MemoryEngine, SetRecord};

mod engine;
mod ffi;
pub mod tracing;
