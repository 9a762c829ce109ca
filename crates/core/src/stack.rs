//! Stack module - fixed-capacity LIFO reserve of pieces
//!
//! Backed by a `Vec` allocated once with the configured capacity; the top of
//! the stack is the last element. Depth 0 is the top.

use crate::error::ActionError;
use crate::types::Piece;

/// Bounded reserve stack
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveStack {
    pieces: Vec<Piece>,
    capacity: usize,
}

impl ReserveStack {
    /// Create an empty stack.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "stack capacity must be at least 1");
        Self {
            pieces: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.len() == self.capacity
    }

    /// Vec index for a depth measured from the top
    #[inline(always)]
    fn index_of(&self, depth: usize) -> Option<usize> {
        self.pieces.len().checked_sub(depth + 1)
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), ActionError> {
        if self.is_full() {
            return Err(ActionError::FullStack);
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    pub fn peek_top(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    pub fn peek_at(&self, depth: usize) -> Option<Piece> {
        self.index_of(depth).map(|idx| self.pieces[idx])
    }

    /// Overwrite the piece at `depth`, returning the previous one.
    ///
    /// Returns `None` and writes nothing when `depth` is past the base.
    pub fn replace_at(&mut self, depth: usize, piece: Piece) -> Option<Piece> {
        let idx = self.index_of(depth)?;
        Some(std::mem::replace(&mut self.pieces[idx], piece))
    }

    /// Pieces from top to base.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().rev().copied()
    }
}
