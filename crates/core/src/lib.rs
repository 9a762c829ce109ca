//! Core piece-management logic - pure, deterministic, and testable
//!
//! This crate holds the containers, the generator and the five game actions.
//! It has **no dependencies** on the console, stdin or terminal styling, which
//! makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every action is a plain method returning a `Result`
//! - **Portable**: the console binary is just one possible front end
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO reserve
//! - [`rng`]: seeded LCG and the piece generator (owns the id counter)
//! - [`session`]: the action engine composing queue, stack and generator
//! - [`config`]: capacities and seed
//! - [`error`]: action and configuration errors
//!
//! # Action Rules
//!
//! | Action | Fails with | Effect |
//! |--------|-----------|--------|
//! | Play | `EmptyQueue` | dequeue front, enqueue one new piece |
//! | Reserve | `EmptyQueue`, `FullStack` | dequeue front, push it, enqueue one new piece |
//! | Use reserved | `EmptyStack` | pop top, no refill |
//! | Swap current | `EmptyQueue`, `EmptyStack` | exchange queue front and stack top in place |
//! | Swap three | `InsufficientQueue`, `InsufficientStack` | exchange 3 front and 3 top pieces in place |
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{ActionError, Session, SessionConfig};
//! use tetris_stack_types::GameAction;
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(12345));
//! let initial = session.start();
//! assert_eq!(initial.len(), 5);
//!
//! session.apply(GameAction::Reserve).unwrap();
//! assert_eq!(session.stack().len(), 1);
//! assert_eq!(session.queue().len(), 5);
//!
//! session.apply(GameAction::UseReserved).unwrap();
//! assert_eq!(session.apply(GameAction::UseReserved), Err(ActionError::EmptyStack));
//! ```

pub mod config;
pub mod error;
pub mod queue;
pub mod rng;
pub mod session;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use error::{ActionError, ConfigError};
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{ActionOutcome, Session, SwapBatch};
pub use stack::ReserveStack;
