//! Random playouts: one full randomized game per call.

use chess_core::{legal_moves, Color, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the simulated games of one decision ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutStats {
    pub draws: u64,
    pub checkmates: u64,
    pub depth_cutoffs: u64,
}

/// Plays a position out with uniformly random moves until the game ends
/// or the ply allowance runs dry.
#[derive(Debug, Clone)]
pub struct RandomRollout {
    /// Plies to play before the game is scored a draw
    pub max_plies: u32,
}

impl RandomRollout {
    pub fn new(max_plies: u32) -> Self {
        Self { max_plies }
    }

    /// Play one game and split one point of credit between the colors:
    /// (1, 0) or (0, 1) for a win, (0.5, 0.5) for any draw. The two scores
    /// always sum to exactly 1.0.
    pub fn play<R: Rng>(
        &self,
        pos: &Position,
        rng: &mut R,
        stats: &mut RolloutStats,
    ) -> (f32, f32) {
        let mut current = pos.clone();
        let mut remaining = self.max_plies;
        loop {
            // Bare kings cannot deliver mate, so stop wandering
            if current.total_piece_count() == 2 {
                stats.draws += 1;
                return (0.5, 0.5);
            }

            let mover = current.side_to_move;
            let mut moves = legal_moves(&current, mover, true);
            if moves.is_empty() {
                if current.in_check(mover) {
                    stats.checkmates += 1;
                    return match mover {
                        Color::White => (0.0, 1.0),
                        Color::Black => (1.0, 0.0),
                    };
                }
                stats.draws += 1;
                return (0.5, 0.5);
            }

            if remaining == 0 {
                stats.depth_cutoffs += 1;
                return (0.5, 0.5);
            }
            remaining -= 1;

            moves.shuffle(rng);
            let mut mv = moves[0];
            current = current.apply_move(&mut mv);
        }
    }
}

#[cfg(test)]
#[path = "rollout_tests.rs"]
mod rollout_tests;
