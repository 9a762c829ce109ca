//! Error types for the piece containers and the session.
//!
//! | Error | Raised by | Fatal |
//! |-------|-----------|-------|
//! | [`ActionError`] | queue/stack mutations and the five game actions | No |
//! | [`ConfigError`] | [`SessionConfig::validate`](crate::SessionConfig::validate) | At startup |
//!
//! An action that returns an [`ActionError`] leaves the queue, the stack and
//! the id counter exactly as they were.

use thiserror::Error;

/// Rejected game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the queue is empty")]
    EmptyQueue,

    #[error("the queue is full")]
    FullQueue,

    #[error("the reserve stack is empty")]
    EmptyStack,

    #[error("the reserve stack is full")]
    FullStack,

    #[error("the queue needs at least {required} pieces (has {available})")]
    InsufficientQueue { available: usize, required: usize },

    #[error("the reserve stack needs at least {required} pieces (has {available})")]
    InsufficientStack { available: usize, required: usize },

    /// The piece id counter reached `u32::MAX`; no new piece can be generated.
    #[error("no piece ids left")]
    IdsExhausted,
}

impl ActionError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::EmptyQueue => "EMPTY_QUEUE",
            ActionError::FullQueue => "FULL_QUEUE",
            ActionError::EmptyStack => "EMPTY_STACK",
            ActionError::FullStack => "FULL_STACK",
            ActionError::InsufficientQueue { .. } => "INSUFFICIENT_QUEUE",
            ActionError::InsufficientStack { .. } => "INSUFFICIENT_STACK",
            ActionError::IdsExhausted => "IDS_EXHAUSTED",
        }
    }
}

/// Invalid session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("queue capacity must be at least 1")]
    ZeroQueueCapacity,

    #[error("stack capacity must be at least 1")]
    ZeroStackCapacity,
}
