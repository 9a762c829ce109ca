//! Console input module (engine-facing).
//!
//! This module is independent of the session and the terminal. It maps a
//! scanned menu option into a [`MenuCommand`] and provides a line-based reader
//! that turns each line of input into one option.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{command_for_option, parse_option, MenuCommand};
pub use reader::{OptionInput, OptionReader};
