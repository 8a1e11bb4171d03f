pub mod board;
pub mod budget;
pub mod movegen;
pub mod notation;
pub mod tree;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use budget::*;
pub use movegen::*;
pub use notation::*;
pub use tree::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all move-selection strategies
// =============================================================================

/// Result of one move decision.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The chosen move. An invalid (sentinel) record means no legal move
    /// exists; its outcome tag says whether that is checkmate or a draw.
    pub mv: MoveRecord,
    /// Positions evaluated (bounded-depth search) or games simulated
    /// (statistical search). Diagnostics only; never affects the decision.
    pub evaluated: u64,
}

/// Trait implemented by every move-selection strategy.
///
/// This is the seam the controller dispatches through: bounded-depth
/// search, Monte Carlo tree search and the random baseline are
/// interchangeable behind it.
pub trait Engine: Send {
    /// Choose a move for `color` in `pos` under `budget`.
    ///
    /// `hint` is an optional suggested move (e.g. from an opening line);
    /// each strategy decides whether the position is quiet enough to
    /// adopt it.
    fn choose_move(
        &mut self,
        pos: &Position,
        color: Color,
        budget: &SearchBudget,
        hint: Option<&MoveRecord>,
    ) -> SearchReport;

    /// Strategy name for reporting.
    fn name(&self) -> &str;
}
