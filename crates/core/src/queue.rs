//! Queue module - fixed-capacity circular FIFO of upcoming pieces
//!
//! Pieces live in a boxed slice of slots allocated once at construction.
//! `front` points at the oldest piece, `back` at the slot the next enqueue
//! writes to, and `len` counts occupied slots. Both indices wrap modulo the
//! capacity, so enqueue/dequeue never shift elements.

use crate::error::ActionError;
use crate::types::Piece;

/// Bounded circular queue of pieces
#[derive(Debug, Clone, PartialEq)]
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    front: usize,
    back: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. [`SessionConfig::validate`](crate::SessionConfig::validate)
    /// rejects that before a session is built.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Physical slot for a logical offset from the front
    #[inline(always)]
    fn slot_index(&self, offset: usize) -> usize {
        (self.front + offset) % self.capacity()
    }

    /// Append a piece at the back.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), ActionError> {
        if self.is_full() {
            return Err(ActionError::FullQueue);
        }

        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }

        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        piece
    }

    pub fn peek_front(&self) -> Option<Piece> {
        self.peek_at(0)
    }

    /// Piece at `offset` from the front (0 = front).
    pub fn peek_at(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot_index(offset)]
    }

    /// Overwrite the occupied slot at `offset`, returning the piece it held.
    ///
    /// Returns `None` and writes nothing when `offset` is past the last piece.
    /// The length and indices never change.
    pub fn replace_at(&mut self, offset: usize, piece: Piece) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot_index(offset);
        self.slots[idx].replace(piece)
    }

    /// Pieces from front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot_index(offset)])
    }
}
