//! Session module - the game action engine
//!
//! Ties together the upcoming-piece queue, the reserve stack and the piece
//! generator, and implements the five menu actions on top of them.
//!
//! Every action checks its preconditions before touching anything. A rejected
//! action returns an [`ActionError`] and leaves the queue, the stack and the
//! id counter untouched. Play and reserve refill the queue with exactly one
//! new piece; the stack is never refilled.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::ActionError;
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::stack::ReserveStack;
use crate::types::{GameAction, Piece, MULTI_SWAP_COUNT};

/// Pieces moved by a multi swap, in the order they were read.
pub type SwapBatch = ArrayVec<Piece, MULTI_SWAP_COUNT>;

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Played {
        played: Piece,
        refill: Piece,
    },
    Reserved {
        reserved: Piece,
        refill: Piece,
    },
    UsedReserved {
        used: Piece,
    },
    /// `to_stack` came from the queue front, `to_queue` from the stack top.
    Swapped {
        to_stack: Piece,
        to_queue: Piece,
    },
    /// `to_stack` holds the queue front-to-back, `to_queue` the stack top-to-base.
    SwappedThree {
        to_stack: SwapBatch,
        to_queue: SwapBatch,
    },
}

impl ActionOutcome {
    /// Action that produced this outcome
    pub fn action(&self) -> GameAction {
        match self {
            ActionOutcome::Played { .. } => GameAction::Play,
            ActionOutcome::Reserved { .. } => GameAction::Reserve,
            ActionOutcome::UsedReserved { .. } => GameAction::UseReserved,
            ActionOutcome::Swapped { .. } => GameAction::SwapCurrent,
            ActionOutcome::SwappedThree { .. } => GameAction::SwapThree,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
}

impl Session {
    /// Create a session with empty containers.
    ///
    /// Call [`Session::start`] to fill the queue before the first action.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            queue: PieceQueue::new(config.queue_capacity),
            stack: ReserveStack::new(config.stack_capacity),
            generator: PieceGenerator::new(config.seed),
        }
    }

    /// Assemble a session from existing containers.
    pub fn from_parts(queue: PieceQueue, stack: ReserveStack, generator: PieceGenerator) -> Self {
        let config = SessionConfig::new(queue.capacity(), stack.capacity(), generator.seed());
        Self {
            config,
            queue,
            stack,
            generator,
        }
    }

    /// Fill the queue to capacity, returning the generated pieces in order.
    pub fn start(&mut self) -> Vec<Piece> {
        let mut initial = Vec::with_capacity(self.queue.capacity() - self.queue.len());
        while !self.queue.is_full() {
            match self.refill() {
                Ok(piece) => initial.push(piece),
                Err(err) => {
                    warn!(code = err.code(), "queue fill stopped: {err}");
                    break;
                }
            }
        }
        info!(
            queue_capacity = self.queue.capacity(),
            stack_capacity = self.stack.capacity(),
            generated = initial.len(),
            "session started"
        );
        initial
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> u32 {
        self.generator.next_id()
    }

    /// Run a menu action.
    pub fn apply(&mut self, action: GameAction) -> Result<ActionOutcome, ActionError> {
        let result = match action {
            GameAction::Play => self.play(),
            GameAction::Reserve => self.reserve(),
            GameAction::UseReserved => self.use_reserved(),
            GameAction::SwapCurrent => self.swap_current(),
            GameAction::SwapThree => self.swap_three(),
        };
        if let Err(err) = &result {
            debug!(action = action.as_str(), code = err.code(), "action rejected: {err}");
        }
        result
    }

    /// Play the front piece and refill the queue.
    pub fn play(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.queue.is_empty() {
            return Err(ActionError::EmptyQueue);
        }
        self.ensure_refill_available()?;

        let played = self.queue.dequeue().ok_or(ActionError::EmptyQueue)?;
        let refill = self.refill()?;
        debug!(played = played.id, refill = refill.id, "played front piece");
        Ok(ActionOutcome::Played { played, refill })
    }

    /// Move the front piece onto the stack and refill the queue.
    pub fn reserve(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.queue.is_empty() {
            return Err(ActionError::EmptyQueue);
        }
        if self.stack.is_full() {
            return Err(ActionError::FullStack);
        }
        self.ensure_refill_available()?;

        let reserved = self.queue.dequeue().ok_or(ActionError::EmptyQueue)?;
        self.stack.push(reserved)?;
        let refill = self.refill()?;
        debug!(reserved = reserved.id, refill = refill.id, "reserved front piece");
        Ok(ActionOutcome::Reserved { reserved, refill })
    }

    /// Pop the top reserved piece. The stack is not refilled.
    pub fn use_reserved(&mut self) -> Result<ActionOutcome, ActionError> {
        let used = self.stack.pop().ok_or(ActionError::EmptyStack)?;
        debug!(used = used.id, "used reserved piece");
        Ok(ActionOutcome::UsedReserved { used })
    }

    /// Exchange the queue front with the stack top in place.
    pub fn swap_current(&mut self) -> Result<ActionOutcome, ActionError> {
        let to_stack = self.queue.peek_front().ok_or(ActionError::EmptyQueue)?;
        let to_queue = self.stack.peek_top().ok_or(ActionError::EmptyStack)?;

        self.queue.replace_at(0, to_queue);
        self.stack.replace_at(0, to_stack);
        debug!(to_stack = to_stack.id, to_queue = to_queue.id, "swapped front and top");
        Ok(ActionOutcome::Swapped { to_stack, to_queue })
    }

    /// Exchange the three front queue pieces with the three top stack pieces.
    ///
    /// The stack batch is read top-to-base and written to queue offsets 0..3,
    /// so the old stack top becomes the queue front. The queue batch is read
    /// front-to-back and written to stack depths 0..3, so the old queue front
    /// becomes the stack top.
    pub fn swap_three(&mut self) -> Result<ActionOutcome, ActionError> {
        if self.queue.len() < MULTI_SWAP_COUNT {
            return Err(ActionError::InsufficientQueue {
                available: self.queue.len(),
                required: MULTI_SWAP_COUNT,
            });
        }
        if self.stack.len() < MULTI_SWAP_COUNT {
            return Err(ActionError::InsufficientStack {
                available: self.stack.len(),
                required: MULTI_SWAP_COUNT,
            });
        }

        let to_stack: SwapBatch = self.queue.iter().take(MULTI_SWAP_COUNT).collect();
        let to_queue: SwapBatch = self.stack.iter().take(MULTI_SWAP_COUNT).collect();

        for (offset, piece) in to_queue.iter().enumerate() {
            self.queue.replace_at(offset, *piece);
        }
        for (depth, piece) in to_stack.iter().enumerate() {
            self.stack.replace_at(depth, *piece);
        }

        debug!(
            to_stack = ?to_stack.iter().map(|p| p.id).collect::<SmallIds>(),
            to_queue = ?to_queue.iter().map(|p| p.id).collect::<SmallIds>(),
            "swapped three"
        );
        Ok(ActionOutcome::SwappedThree { to_stack, to_queue })
    }

    /// Generate one piece and append it to the queue.
    fn refill(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_full() {
            return Err(ActionError::FullQueue);
        }
        let piece = self.generator.generate()?;
        self.queue.enqueue(piece)?;
        Ok(piece)
    }

    /// Reject before dequeuing when no replacement piece can be generated.
    fn ensure_refill_available(&self) -> Result<(), ActionError> {
        if self.generator.is_exhausted() {
            return Err(ActionError::IdsExhausted);
        }
        Ok(())
    }
}

type SmallIds = ArrayVec<u32, MULTI_SWAP_COUNT>;
