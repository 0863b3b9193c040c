//! FFI-safe per-column transfer records

mod column;

pub use column::*;
