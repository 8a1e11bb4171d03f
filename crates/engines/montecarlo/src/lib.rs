//! Monte Carlo tree search engine
//!
//! Grows a game tree one simulated game at a time: UCB1 picks the branch
//! to extend, a random playout scores the first visit of a leaf, and the
//! resulting win credit is banked on every node of the descent path. The
//! budget (wall clock and/or game cap) is the only thing that stops it.

mod rollout;
mod search;

pub use rollout::{RandomRollout, RolloutStats};

use chess_core::{Color, Engine, MoveRecord, Position, SearchBudget, SearchReport};

/// UCB1 exploration constant. sqrt(2) is the canonical bandit value.
const DEFAULT_TEMPERATURE: f32 = std::f32::consts::SQRT_2;

/// Games between wall-clock checks; amortizes the timer overhead.
const GAMES_PER_CLOCK_CHECK: u64 = 1000;

/// Descent depth at which an in-tree game is called a draw.
const MAX_TREE_LEVELS: u32 = 75;

/// Statistical strategy driven by random playouts.
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    temperature: f32,
    batch: u64,
    max_tree_levels: u32,
    /// Games simulated during the last decision
    games: u64,
    /// How those games ended
    stats: RolloutStats,
}

impl MonteCarloEngine {
    pub fn new() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            batch: GAMES_PER_CLOCK_CHECK,
            max_tree_levels: MAX_TREE_LEVELS,
            games: 0,
            stats: RolloutStats::default(),
        }
    }

    /// Outcome tallies of the games simulated for the last decision.
    pub fn rollout_stats(&self) -> RolloutStats {
        self.stats
    }
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MonteCarloEngine {
    fn choose_move(
        &mut self,
        pos: &Position,
        color: Color,
        budget: &SearchBudget,
        hint: Option<&MoveRecord>,
    ) -> SearchReport {
        self.games = 0;
        self.stats = RolloutStats::default();

        let mv = self.run(pos, color, budget, hint);
        SearchReport {
            mv,
            evaluated: self.games,
        }
    }

    fn name(&self) -> &str {
        "MonteCarlo v1.0"
    }
}
