//! Callback tables exposed by the native engine

mod engine;

pub use engine::*;
