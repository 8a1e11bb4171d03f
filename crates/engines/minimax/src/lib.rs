//! Bounded-depth search engine
//!
//! Minimax with alpha-beta pruning and material-based evaluation. The
//! depth field of the budget is the only limit this strategy reads; a
//! three to five ply budget is the practical range given the branching
//! factor.

mod eval;
mod search;

use chess_core::{Color, Engine, MoveRecord, Position, SearchBudget, SearchReport};

/// Exhaustive bounded-depth strategy.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Positions evaluated during the last decision
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(
        &mut self,
        pos: &Position,
        color: Color,
        budget: &SearchBudget,
        hint: Option<&MoveRecord>,
    ) -> SearchReport {
        self.nodes = 0;
        let mv = search::pick_best_move(pos, color, budget.depth, hint, &mut self.nodes);
        SearchReport {
            mv,
            evaluated: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}

// Re-export the scoring policy for callers that want to interpret scores
pub use eval::{material, CHECK_SCORE, DRAW_SCORE, MATE_SCORE};
