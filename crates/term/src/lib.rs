//! Console presentation module.
//!
//! A small, line-oriented rendering layer for the piece manager. It keeps the
//! drawing split in two halves:
//!
//! - [`view`] turns the queue, the stack and action results into [`Line`]s
//!   (pure, no I/O)
//! - [`console`] flushes those lines to any writer, optionally styled with
//!   crossterm colours
//!
//! Goals:
//! - Keep `core` deterministic and free of printing
//! - Make every message testable without a terminal

pub mod console;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use console::Console;
pub use view::{Line, StateView, Tone};
