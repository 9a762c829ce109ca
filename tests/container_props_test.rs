//! Property tests for the queue, the stack and the action engine.
//!
//! Invariants covered:
//! - The queue never holds more than its capacity and dequeues in FIFO order.
//! - The stack pops in LIFO order and never exceeds its capacity.
//! - Any action sequence keeps both containers within capacity, keeps every
//!   piece id unique and never moves the id counter on a rejected action.

use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

use tetris_stack::core::{ActionError, PieceQueue, ReserveStack, Session, SessionConfig};
use tetris_stack::types::{GameAction, Piece, PieceKind};

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert,
    Remove,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Insert), Just(Op::Remove)]
}

fn action() -> impl Strategy<Value = GameAction> {
    (0usize..GameAction::ALL.len()).prop_map(|i| GameAction::ALL[i])
}

proptest! {
    #[test]
    fn queue_matches_vecdeque_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(op(), 0..120),
    ) {
        let mut queue = PieceQueue::new(capacity);
        let mut model: VecDeque<Piece> = VecDeque::new();
        let mut next_id = 0u32;

        for op in ops {
            match op {
                Op::Insert => {
                    let piece = Piece::new(PieceKind::T, next_id);
                    next_id += 1;
                    let result = queue.enqueue(piece);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(ActionError::FullQueue));
                    } else {
                        prop_assert!(result.is_ok());
                        model.push_back(piece);
                    }
                }
                Op::Remove => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
            }

            prop_assert!(queue.len() <= capacity);
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn stack_matches_vec_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(op(), 0..80),
    ) {
        let mut stack = ReserveStack::new(capacity);
        let mut model: Vec<Piece> = Vec::new();
        let mut next_id = 0u32;

        for op in ops {
            match op {
                Op::Insert => {
                    let piece = Piece::new(PieceKind::L, next_id);
                    next_id += 1;
                    let result = stack.push(piece);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(ActionError::FullStack));
                    } else {
                        prop_assert!(result.is_ok());
                        model.push(piece);
                    }
                }
                Op::Remove => {
                    prop_assert_eq!(stack.pop(), model.pop());
                }
            }

            prop_assert!(stack.len() <= capacity);
            prop_assert_eq!(stack.iter().collect::<Vec<_>>(), model.iter().rev().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn action_sequences_keep_invariants(
        seed in any::<u32>(),
        actions in prop::collection::vec(action(), 1..100),
    ) {
        let mut session = Session::new(SessionConfig::default().with_seed(seed));
        session.start();

        for action in actions {
            let queue_before = session.queue().clone();
            let stack_before = session.stack().clone();
            let id_before = session.next_id();

            match session.apply(action) {
                Ok(_) => {
                    prop_assert!(session.next_id() >= id_before);
                }
                Err(_) => {
                    prop_assert_eq!(session.queue(), &queue_before);
                    prop_assert_eq!(session.stack(), &stack_before);
                    prop_assert_eq!(session.next_id(), id_before);
                }
            }

            prop_assert!(session.queue().len() <= session.queue().capacity());
            prop_assert!(session.stack().len() <= session.stack().capacity());

            // Play and reserve refill, so the queue stays full.
            prop_assert!(session.queue().is_full());

            let mut seen = HashSet::new();
            for piece in session.queue().iter().chain(session.stack().iter()) {
                prop_assert!(seen.insert(piece.id), "duplicate id {}", piece.id);
                prop_assert!(piece.id < session.next_id());
            }
        }
    }
}
