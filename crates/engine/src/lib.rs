//! Strategy dispatch
//!
//! A `SearchController` owns an algorithm choice and a budget; each
//! `choose_move` call runs the matching strategy and packages the result
//! with serializable diagnostics. The diagnostics are reporting only and
//! never influence the decision.

use std::time::Instant;

use chess_core::{encode_move, Color, Engine, MoveRecord, Outcome, Position, SearchBudget};
use minimax_engine::MinimaxEngine;
use montecarlo_engine::{MonteCarloEngine, RolloutStats};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

/// The three interchangeable move-selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    Random,
    MonteCarlo,
}

impl Algorithm {
    /// Lenient selector parsing: any name containing "mini", "rand" or
    /// "monte" picks the matching strategy.
    pub fn parse(name: &str) -> Option<Algorithm> {
        let name = name.to_ascii_lowercase();
        if name.contains("mini") {
            Some(Algorithm::Minimax)
        } else if name.contains("rand") {
            Some(Algorithm::Random)
        } else if name.contains("monte") {
            Some(Algorithm::MonteCarlo)
        } else {
            None
        }
    }
}

/// Build a boxed strategy for callers that want the trait object.
pub fn create_engine(algorithm: Algorithm) -> Box<dyn Engine> {
    match algorithm {
        Algorithm::Minimax => Box::new(MinimaxEngine::new()),
        Algorithm::Random => Box::new(RandomEngine::new()),
        Algorithm::MonteCarlo => Box::new(MonteCarloEngine::new()),
    }
}

/// Reporting payload of one decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    pub algorithm: Algorithm,
    /// Positions evaluated or games simulated, per the strategy
    pub evaluated: u64,
    pub elapsed_ms: u64,
    /// Simulation outcome tallies; statistical search only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollouts: Option<RolloutStats>,
}

/// One move decision: the record, its text form, and diagnostics.
#[derive(Debug, Clone)]
pub struct Decision {
    pub mv: MoveRecord,
    pub text: String,
    pub diagnostics: Diagnostics,
}

/// Per-call driver for one configured strategy.
#[derive(Debug, Clone)]
pub struct SearchController {
    pub algorithm: Algorithm,
    pub budget: SearchBudget,
}

impl SearchController {
    pub fn new(algorithm: Algorithm, budget: SearchBudget) -> Self {
        Self { algorithm, budget }
    }

    pub fn choose_move(&self, pos: &Position, color: Color, hint: Option<&MoveRecord>) -> Decision {
        let started = Instant::now();
        let (report, rollouts) = match self.algorithm {
            // Driven concretely so the rollout tallies survive the call
            Algorithm::MonteCarlo => {
                let mut engine = MonteCarloEngine::new();
                let report = engine.choose_move(pos, color, &self.budget, hint);
                (report, Some(engine.rollout_stats()))
            }
            algorithm => {
                let mut engine = create_engine(algorithm);
                (engine.choose_move(pos, color, &self.budget, hint), None)
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let mut mv = report.mv;
        // A mate against the caller surfaces as a resignation
        if !mv.is_valid() && mv.outcome == Outcome::Checkmate && mv.color != color {
            mv.outcome = Outcome::Resign;
        }
        let text = if mv.is_valid() {
            encode_move(&mv)
        } else if mv.outcome == Outcome::Resign {
            "resign".to_string()
        } else {
            "draw".to_string()
        };

        Decision {
            mv,
            text,
            diagnostics: Diagnostics {
                algorithm: self.algorithm,
                evaluated: report.evaluated,
                elapsed_ms,
                rollouts,
            },
        }
    }
}
