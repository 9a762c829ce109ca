//! Line-based option reader.
//!
//! Reads one menu option per line from any [`BufRead`] (stdin in the binary,
//! a byte slice in tests).

use std::io::{self, BufRead};

use crate::map::{command_for_option, parse_option, MenuCommand};

/// One line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionInput {
    Command(MenuCommand),
    /// Non-numeric text or an unknown code; carries the trimmed line.
    Invalid(String),
}

pub struct OptionReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> OptionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(16),
        }
    }

    /// Read the next option. Returns `Ok(None)` at end of input.
    pub fn next_input(&mut self) -> io::Result<Option<OptionInput>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }

        let input = match parse_option(&self.line).and_then(command_for_option) {
            Some(command) => OptionInput::Command(command),
            None => OptionInput::Invalid(self.line.trim().to_string()),
        };
        Ok(Some(input))
    }
}
