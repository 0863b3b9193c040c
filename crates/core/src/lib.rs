// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
#![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
#![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use colbatch_abi::{ColumnId, CursorId, RetrieveOptions, SessionId, SetOptions, Status};
pub use config::{MAX_COLUMNS, MarshalConfig, PoolConfig};
pub use engine::{CallbacksEngine, NativeEngine};
pub use error::{Error, Result};
pub use pool::{MemoryPool, PoolStats, ScratchBuffer, ScratchPool};

pub mod config;
pub mod engine;
mod error;
pub mod internal;
pub mod pool;
