//! Random baseline engine
//!
//! No evaluation at all: shuffle the legal moves and play the first. Any
//! strategy worth keeping should beat this one, which is exactly what it
//! is for.

use chess_core::{legal_moves, Color, Engine, MoveRecord, Position, SearchBudget, SearchReport};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// Uniformly random move selection.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        pos: &Position,
        color: Color,
        _budget: &SearchBudget,
        _hint: Option<&MoveRecord>,
    ) -> SearchReport {
        let mut moves = legal_moves(pos, color, true);
        if moves.is_empty() {
            return SearchReport {
                mv: MoveRecord::terminal(color, pos.in_check(color)),
                evaluated: 1,
            };
        }
        moves.shuffle(&mut thread_rng());
        SearchReport {
            mv: moves[0],
            evaluated: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
