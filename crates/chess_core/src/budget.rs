//! Search budgets: how much work a single move decision may cost.
//!
//! A budget never causes a failure. Running out of time or games is an
//! ordinary exit that yields the best answer accumulated so far.

use std::time::{Duration, Instant};

/// Caller-imposed limits for one `choose_move` call.
///
/// `depth` bounds the bounded-depth search; `move_time` and `max_games`
/// bound the statistical search. Strategies read only the limits that apply
/// to them.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    /// Maximum look-ahead in plies (half-moves)
    pub depth: u8,
    /// Wall-clock allowance for this move (None = unlimited)
    pub move_time: Option<Duration>,
    /// Cap on simulated games (None = unlimited)
    pub max_games: Option<u64>,
}

impl SearchBudget {
    /// Depth-only budget.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            max_games: None,
        }
    }

    /// Time-only budget.
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            max_games: None,
        }
    }

    /// Game-count budget; deterministic workload, useful in tests.
    pub fn games(max_games: u64) -> Self {
        Self {
            depth: u8::MAX,
            move_time: None,
            max_games: Some(max_games),
        }
    }

    /// Time budget with a game-count ceiling.
    pub fn time_and_games(move_time: Duration, max_games: u64) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            max_games: Some(max_games),
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Wall clock for cooperative budget polling.
///
/// The search checks `expired()` between iteration batches; nothing ever
/// interrupts an iteration in flight, so a plain Instant is all the
/// machinery needed.
#[derive(Debug, Clone)]
pub struct SearchClock {
    started: Instant,
    limit: Option<Duration>,
}

impl SearchClock {
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// False forever when there is no time limit.
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.elapsed() >= limit,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
