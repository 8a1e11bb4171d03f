//! Scoring policy: material heuristic plus forced-outcome constants.
//!
//! The forced constants dominate any reachable material delta and are
//! ordered among themselves, so a forced mate always outranks a forced
//! draw, which outranks a forced check, which outranks winning material.
//! All of them fit the i16 score field on `MoveRecord`.

use chess_core::{Color, Position};

/// Forced checkmate, from the winner's point of view.
pub const MATE_SCORE: i32 = 10_000;
/// Forced draw (stalemate reached during the search).
pub const DRAW_SCORE: i32 = 2_000;
/// Check at the search horizon.
pub const CHECK_SCORE: i32 = 1_000;

/// Material balance for `searching`: queen 9, rook 5, bishop and knight 3,
/// pawn 1. Kings always cancel and are skipped.
pub fn material(pos: &Position, searching: Color) -> i32 {
    side_material(pos, searching) - side_material(pos, searching.other())
}

fn side_material(pos: &Position, color: Color) -> i32 {
    let c = pos.piece_counts(color);
    9 * c.queens + 5 * c.rooks + 3 * (c.bishops + c.knights) + c.pawns
}

/// Score for a position at the depth cutoff. A horizon position with the
/// mover's king in check is scored as a forced check rather than by
/// material, since the material count may not survive the reply.
pub fn leaf_score(pos: &Position, searching: Color) -> i32 {
    let mover = pos.side_to_move;
    if pos.in_check(mover) {
        return signed(CHECK_SCORE, mover, searching);
    }
    material(pos, searching)
}

/// Score for a position where `mover` has no legal reply.
pub fn terminal_score(mover: Color, in_check: bool, searching: Color) -> i32 {
    let magnitude = if in_check { MATE_SCORE } else { DRAW_SCORE };
    signed(magnitude, mover, searching)
}

// A forced outcome landing on the searching side is a loss of that
// magnitude; landing on the opponent it is a gain.
fn signed(magnitude: i32, mover: Color, searching: Color) -> i32 {
    if mover == searching {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
