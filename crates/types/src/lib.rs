//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, console rendering, input mapping).
//!
//! # Container Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_QUEUE_CAPACITY` | 5 | Upcoming-piece queue slots |
//! | `DEFAULT_STACK_CAPACITY` | 3 | Reserve stack slots |
//! | `MULTI_SWAP_COUNT` | 3 | Pieces exchanged by the multi swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{GameAction, Piece, PieceKind, DEFAULT_QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 4);
//! assert_eq!(piece.to_string(), "[T 4]");
//!
//! // Parse from a letter (case-insensitive)
//! assert_eq!(PieceKind::from_char('l'), Some(PieceKind::L));
//!
//! // Actions keep the menu option code they are bound to
//! assert_eq!(GameAction::Reserve.option_code(), 2);
//!
//! assert_eq!(DEFAULT_QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Default number of slots in the upcoming-piece queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Default number of slots in the reserve stack.
pub const DEFAULT_STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by [`GameAction::SwapThree`].
pub const MULTI_SWAP_COUNT: usize = 3;

/// Menu option that ends the session.
pub const QUIT_OPTION: i64 = 0;


/// The four piece kinds handed out by the generator
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator index order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('z'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used on the console.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A generated piece.
///
/// Pieces are plain values: they are copied between the queue and the stack
/// and never change after the generator hands them out. `id` is unique for
/// the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Game actions offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Play the piece at the front of the queue.
    Play,
    /// Move the front piece of the queue onto the reserve stack.
    Reserve,
    /// Use the piece on top of the reserve stack.
    UseReserved,
    /// Exchange the queue front with the stack top.
    SwapCurrent,
    /// Exchange the first three queue pieces with the top three stack pieces.
    SwapThree,
}

impl GameAction {
    pub const ALL: [GameAction; 5] = [
        GameAction::Play,
        GameAction::Reserve,
        GameAction::UseReserved,
        GameAction::SwapCurrent,
        GameAction::SwapThree,
    ];

    /// Menu option code bound to this action
    pub fn option_code(&self) -> i64 {
        match self {
            GameAction::Play => 1,
            GameAction::Reserve => 2,
            GameAction::UseReserved => 3,
            GameAction::SwapCurrent => 4,
            GameAction::SwapThree => 5,
        }
    }

    /// Inverse of [`GameAction::option_code`]
    pub fn from_option_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.option_code() == code)
    }

    /// Short label shown in the menu table
    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Play => "Play the front piece of the queue",
            GameAction::Reserve => "Send the front piece to the reserve",
            GameAction::UseReserved => "Use the piece from the reserve",
            GameAction::SwapCurrent => "Swap queue front with stack top",
            GameAction::SwapThree => "Swap 3 from queue with 3 from stack",
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Reserve => "reserve",
            GameAction::UseReserved => "useReserved",
            GameAction::SwapCurrent => "swapCurrent",
            GameAction::SwapThree => "swapThree",
        }
    }
}
