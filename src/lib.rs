//! Tetris Stack (workspace facade crate).
//!
//! This package exposes `tetris_stack::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
