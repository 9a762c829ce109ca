//! Console: flushes view lines to a writer.
//!
//! Tones are mapped to crossterm colours. With colour disabled the console
//! writes plain text, which is what tests and piped output use.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Color, Print, PrintStyledContent, StyledContent, Stylize},
    QueueableCommand,
};

use crate::view::{Line, Tone};

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Write lines, each followed by a newline, then flush.
    pub fn print(&mut self, lines: &[Line]) -> Result<()> {
        for line in lines {
            self.queue_text(line.tone, &line.text)?;
            self.out.queue(Print('\n'))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Write a prompt without a trailing newline and flush so it shows
    /// before input is read.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print('\n'))?;
        self.queue_text(Tone::Heading, text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue_text(&mut self, tone: Tone, text: &str) -> Result<()> {
        if self.color && tone != Tone::Plain && !text.is_empty() {
            self.out.queue(PrintStyledContent(styled(tone, text)))?;
        } else {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }
}

fn styled(tone: Tone, text: &str) -> StyledContent<&str> {
    match tone {
        Tone::Plain => text.stylize(),
        Tone::Heading => text.bold(),
        Tone::Action => text.with(Color::Green).bold(),
        Tone::Info => text.with(Color::Cyan),
        Tone::Error => text.with(Color::Red).bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let mut console = Console::new(Vec::new(), false);
        console
            .print(&[Line::new(Tone::Error, "[ERROR] x"), Line::blank()])
            .unwrap();
        console.prompt("Chosen option: ").unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out, "[ERROR] x\n\n\nChosen option: ");
    }

    #[test]
    fn test_colored_output_wraps_styled_lines() {
        let mut console = Console::new(Vec::new(), true);
        console
            .print(&[Line::new(Tone::Error, "bad"), Line::plain("ok")])
            .unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("bad"));
        assert!(out.ends_with("ok\n"));
    }
}
