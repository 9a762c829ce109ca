//! StateView: maps the session containers and action results into console lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionError, ActionOutcome, PieceQueue, ReserveStack, SessionConfig};
use crate::types::{GameAction, Piece};

/// How a line should be emphasised by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Action,
    Info,
    Error,
}

/// One line of console output (without the trailing newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }

    pub fn blank() -> Self {
        Self::plain(String::new())
    }
}

/// Menu table inner width (between the outer `+` corners).
const MENU_INNER_W: usize = 46;
/// Width of the action label column in the menu table.
const MENU_LABEL_W: usize = 36;

/// Renders the session for a line-oriented console.
#[derive(Debug, Clone, Copy)]
pub struct StateView {
    /// Width of the `=` rules framing headings.
    rule_w: usize,
}

impl Default for StateView {
    fn default() -> Self {
        Self { rule_w: 40 }
    }
}

impl StateView {
    fn rule(&self) -> Line {
        Line::new(Tone::Heading, "=".repeat(self.rule_w))
    }

    fn centered_heading(&self, title: &str) -> Line {
        Line::new(Tone::Heading, format!("{:^w$}", title, w = self.rule_w).trim_end().to_string())
    }

    /// Startup banner: title, capacities and the pre-filled pieces.
    pub fn banner_lines(&self, config: &SessionConfig, initial: &[Piece]) -> Vec<Line> {
        let mut lines = vec![
            self.rule(),
            self.centered_heading("TETRIS STACK - Piece Manager"),
            self.rule(),
            Line::blank(),
            Line::plain("Starting the game..."),
            Line::plain(format!("- Piece queue: {} slots", config.queue_capacity)),
            Line::plain(format!("- Reserve stack: {} slots", config.stack_capacity)),
            Line::blank(),
            Line::plain("Generating initial pieces..."),
        ];
        lines.extend(
            initial
                .iter()
                .map(|piece| Line::plain(format!("  Piece {piece} added."))),
        );
        lines.push(Line::blank());
        lines.push(Line::new(Tone::Info, "Game started! Good luck!"));
        lines
    }

    /// Queue front-to-back and stack top-to-base.
    pub fn state_lines(&self, queue: &PieceQueue, stack: &ReserveStack) -> Vec<Line> {
        vec![
            Line::blank(),
            self.rule(),
            self.centered_heading("CURRENT STATE"),
            self.rule(),
            Line::blank(),
            Line::plain(format!("Piece queue: {}", pieces_or_empty(queue.iter()))),
            Line::plain(format!(
                "Reserve stack (Top -> Base): {}",
                pieces_or_empty(stack.iter())
            )),
            self.rule(),
        ]
    }

    /// The option table. The prompt itself is written by the console.
    pub fn menu_lines(&self) -> Vec<Line> {
        let border = Line::new(Tone::Heading, format!("+{}+", "-".repeat(MENU_INNER_W)));
        let mut lines = vec![
            Line::blank(),
            border.clone(),
            Line::new(
                Tone::Heading,
                format!("|{:^w$}|", "ACTION OPTIONS", w = MENU_INNER_W),
            ),
            border.clone(),
            Line::plain(format!("| Code   | {:<w$}|", "Action", w = MENU_LABEL_W)),
            border.clone(),
        ];
        for action in GameAction::ALL {
            lines.push(menu_row(action.option_code(), action.label()));
        }
        lines.push(menu_row(crate::types::QUIT_OPTION, "Quit"));
        lines.push(border);
        lines
    }

    /// Report of a successful action.
    pub fn outcome_lines(&self, outcome: &ActionOutcome) -> Vec<Line> {
        let mut lines = vec![Line::blank()];
        match outcome {
            ActionOutcome::Played { played, refill } => {
                lines.push(Line::new(
                    Tone::Action,
                    format!("[ACTION] Piece {played} was played!"),
                ));
                lines.push(refill_line(refill));
            }
            ActionOutcome::Reserved { reserved, refill } => {
                lines.push(Line::new(
                    Tone::Action,
                    format!("[ACTION] Piece {reserved} was moved to the reserve!"),
                ));
                lines.push(refill_line(refill));
            }
            ActionOutcome::UsedReserved { used } => {
                lines.push(Line::new(
                    Tone::Action,
                    format!("[ACTION] Reserved piece {used} was used!"),
                ));
            }
            ActionOutcome::Swapped { to_stack, to_queue } => {
                lines.push(Line::new(Tone::Action, "[ACTION] Swap done!"));
                lines.push(Line::plain(format!(
                    "  - Piece {to_stack} from the queue went to the stack"
                )));
                lines.push(Line::plain(format!(
                    "  - Piece {to_queue} from the stack went to the queue"
                )));
            }
            ActionOutcome::SwappedThree { to_stack, to_queue } => {
                lines.push(Line::new(Tone::Action, "[ACTION] Starting multi swap..."));
                lines.push(Line::blank());
                lines.push(Line::plain("Queue pieces being swapped:"));
                lines.push(Line::plain(batch_text(to_stack)));
                lines.push(Line::blank());
                lines.push(Line::plain("Stack pieces being swapped:"));
                lines.push(Line::plain(batch_text(to_queue)));
                lines.push(Line::blank());
                lines.push(Line::new(
                    Tone::Action,
                    format!(
                        "[SUCCESS] Multi swap done between the first {n} of the queue and the {n} of the stack!",
                        n = to_stack.len()
                    ),
                ));
            }
        }
        lines
    }

    /// Report of a rejected action, worded for the action that failed.
    pub fn error_lines(&self, action: GameAction, err: &ActionError) -> Vec<Line> {
        let purpose = match action {
            GameAction::Play => "to play",
            GameAction::Reserve => "to reserve",
            GameAction::UseReserved => "to use",
            GameAction::SwapCurrent | GameAction::SwapThree => "to swap",
        };

        let mut lines = vec![Line::blank()];
        match *err {
            ActionError::EmptyQueue => lines.push(error_line(format!(
                "The queue is empty! There are no pieces {purpose}."
            ))),
            ActionError::FullQueue => lines.push(error_line("The queue is full!".to_string())),
            ActionError::EmptyStack => lines.push(error_line(format!(
                "The reserve stack is empty! There are no reserved pieces {purpose}."
            ))),
            ActionError::FullStack => lines.push(error_line(
                "The reserve stack is full! No more pieces can be reserved.".to_string(),
            )),
            ActionError::InsufficientQueue {
                available,
                required,
            } => {
                lines.push(error_line(format!(
                    "The queue needs at least {required} pieces for the multi swap."
                )));
                lines.push(Line::plain(format!("  Pieces in queue: {available}")));
            }
            ActionError::InsufficientStack {
                available,
                required,
            } => {
                lines.push(error_line(format!(
                    "The reserve stack needs at least {required} pieces for the multi swap."
                )));
                lines.push(Line::plain(format!("  Pieces in stack: {available}")));
            }
            ActionError::IdsExhausted => lines.push(error_line(
                "No piece ids left! No new pieces can be generated.".to_string(),
            )),
        }
        lines
    }

    pub fn invalid_option_lines(&self) -> Vec<Line> {
        vec![
            Line::blank(),
            error_line("Invalid option! Try again.".to_string()),
        ]
    }

    pub fn farewell_lines(&self) -> Vec<Line> {
        vec![
            Line::blank(),
            self.rule(),
            Line::plain("  Closing Tetris Stack..."),
            Line::plain("  Thanks for playing!"),
            self.rule(),
        ]
    }
}

fn menu_row(code: i64, label: &str) -> Line {
    Line::plain(format!("|   {code}    | {label:<w$}|", w = MENU_LABEL_W))
}

fn refill_line(refill: &Piece) -> Line {
    Line::new(
        Tone::Info,
        format!("[INFO] New piece {refill} was added to the queue."),
    )
}

fn error_line(message: String) -> Line {
    Line::new(Tone::Error, format!("[ERROR] {message}"))
}

fn pieces_or_empty(pieces: impl Iterator<Item = Piece>) -> String {
    let text = pieces
        .map(|piece| piece.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        "[Empty]".to_string()
    } else {
        text
    }
}

fn batch_text(batch: &[Piece]) -> String {
    batch
        .iter()
        .map(|piece| format!("  {piece}"))
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_empty_containers_show_empty_marker() {
        let view = StateView::default();
        let lines = view.state_lines(&PieceQueue::new(5), &ReserveStack::new(3));
        let t = texts(&lines);

        assert!(t.contains(&"Piece queue: [Empty]"));
        assert!(t.contains(&"Reserve stack (Top -> Base): [Empty]"));
    }

    #[test]
    fn test_menu_rows_are_aligned() {
        let lines = StateView::default().menu_lines();
        let widths: Vec<usize> = lines
            .iter()
            .filter(|l| !l.text.is_empty())
            .map(|l| l.text.chars().count())
            .collect();

        assert!(widths.iter().all(|&w| w == MENU_INNER_W + 2), "{widths:?}");
        assert!(lines.iter().any(|l| l.text.starts_with("|   0    | Quit")));
        assert!(lines.iter().any(|l| l.text.starts_with("|   5    | Swap 3")));
    }

    #[test]
    fn test_insufficient_errors_show_count() {
        let view = StateView::default();
        let lines = view.error_lines(
            GameAction::SwapThree,
            &ActionError::InsufficientQueue {
                available: 1,
                required: 3,
            },
        );

        assert_eq!(lines[1].tone, Tone::Error);
        assert_eq!(lines[2].text, "  Pieces in queue: 1");
    }

    #[test]
    fn test_empty_queue_wording_follows_action() {
        let view = StateView::default();
        let play = view.error_lines(GameAction::Play, &ActionError::EmptyQueue);
        let reserve = view.error_lines(GameAction::Reserve, &ActionError::EmptyQueue);

        assert!(play[1].text.ends_with("no pieces to play."));
        assert!(reserve[1].text.ends_with("no pieces to reserve."));
    }

    #[test]
    fn test_exhausted_ids_error_line() {
        let lines = StateView::default().error_lines(GameAction::Play, &ActionError::IdsExhausted);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].tone, Tone::Error);
        assert!(lines[1].text.contains("No piece ids left!"));
    }

    #[test]
    fn test_banner_lists_initial_pieces() {
        let view = StateView::default();
        let initial = [Piece::new(PieceKind::I, 0), Piece::new(PieceKind::L, 1)];
        let lines = view.banner_lines(&SessionConfig::default(), &initial);
        let t = texts(&lines);

        assert!(t.contains(&"- Piece queue: 5 slots"));
        assert!(t.contains(&"- Reserve stack: 3 slots"));
        assert!(t.contains(&"  Piece [I 0] added."));
        assert!(t.contains(&"  Piece [L 1] added."));
    }
}
