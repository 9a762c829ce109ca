//! Session configuration.

use crate::error::ConfigError;
use crate::types::{DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY};

/// Capacities and RNG seed for a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub seed: u32,
}

impl SessionConfig {
    pub fn new(queue_capacity: usize, stack_capacity: usize, seed: u32) -> Self {
        Self {
            queue_capacity,
            stack_capacity,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject capacities the containers cannot index.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if self.stack_capacity == 0 {
            return Err(ConfigError::ZeroStackCapacity);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.queue_capacity, 5);
        assert_eq!(config.stack_capacity, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacities_are_rejected() {
        assert_eq!(
            SessionConfig::new(0, 3, 1).validate(),
            Err(ConfigError::ZeroQueueCapacity)
        );
        assert_eq!(
            SessionConfig::new(5, 0, 1).validate(),
            Err(ConfigError::ZeroStackCapacity)
        );
    }
}
