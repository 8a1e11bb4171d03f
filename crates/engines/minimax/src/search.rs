//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The tree is expanded eagerly to the depth budget in one pass. Pruning
//! only skips work; for a fixed depth the chosen move and score are
//! identical to a full-width search.

use chess_core::{legal_moves, Color, MoveRecord, Position, SearchTreeNode};

use crate::eval;

// Sentinels for the alpha-beta window. Kept inside i32 so negation and
// comparison never overflow.
const INFINITY: i32 = 1 << 20;

/// Search to `depth` plies and return the best root move.
///
/// A supplied hint is adopted outright when the root is quiet enough
/// (every candidate a plain non-checking move) and the hint coincides with
/// a candidate. Zero candidates means the game is already over; the
/// returned sentinel's outcome says whether that is mate or stalemate.
pub(crate) fn pick_best_move(
    pos: &Position,
    color: Color,
    depth: u8,
    hint: Option<&MoveRecord>,
    nodes: &mut u64,
) -> MoveRecord {
    let depth = depth.max(1);

    let mut root = SearchTreeNode::root(color);
    root.populate(pos, color);
    if root.children.is_empty() {
        return MoveRecord::terminal(color, pos.in_check(color));
    }

    if let Some(mv) = root.adoptable_hint(hint) {
        return mv;
    }

    let mut alpha = -INFINITY;
    for child in &mut root.children {
        let mut mv = child.mv;
        let next = pos.apply_move(&mut mv);
        *nodes += 1;
        let score = descend(&next, color, depth - 1, alpha, INFINITY, nodes);
        mv.set_score(score);
        child.mv = mv;
        if score > alpha {
            alpha = score;
        }
    }

    let mut best = root.children[0].mv;
    for child in &root.children[1..] {
        if child.mv.score > best.score {
            best = child.mv;
        }
    }
    best
}

fn descend(
    pos: &Position,
    searching: Color,
    depth_left: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    let mover = pos.side_to_move;

    let moves = legal_moves(pos, mover, true);
    if moves.is_empty() {
        return eval::terminal_score(mover, pos.in_check(mover), searching);
    }
    if depth_left == 0 {
        return eval::leaf_score(pos, searching);
    }

    let maximizing = mover == searching;
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mut mv in moves {
        let next = pos.apply_move(&mut mv);
        *nodes += 1;
        let score = descend(&next, searching, depth_left - 1, alpha, beta, nodes);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
