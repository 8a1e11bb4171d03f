//! Game-tree nodes shared by the tree-building search strategies.

use crate::{board::Position, movegen::legal_moves, types::*};

/// One node of a search tree: a move plus the moves it makes possible.
///
/// A node exclusively owns its children; dropping a node tears down its
/// whole subtree. The tree lives for a single move decision and is
/// discarded once the top move has been extracted.
///
/// The statistics fields serve whichever search owns the tree: bounded
/// minimax reuses the record's score field, Monte Carlo accumulates visit
/// counts and fractional win credit per color (0.5 each for a draw).
#[derive(Debug)]
pub struct SearchTreeNode {
    pub mv: MoveRecord,
    pub children: Vec<SearchTreeNode>,
    pub visits: u32,
    pub white_credit: f32,
    pub black_credit: f32,
}

impl SearchTreeNode {
    pub fn new(mv: MoveRecord) -> Self {
        Self {
            mv,
            children: Vec::new(),
            visits: 0,
            white_credit: 0.0,
            black_credit: 0.0,
        }
    }

    /// Fresh root for one move decision by `color`. The record starts as
    /// the "no move" sentinel and is only meaningful once a terminal
    /// outcome has been recorded on it.
    pub fn root(color: Color) -> Self {
        Self::new(MoveRecord::none(color))
    }

    pub fn add_move(&mut self, mv: MoveRecord) -> &mut SearchTreeNode {
        self.children.push(SearchTreeNode::new(mv));
        self.children.last_mut().unwrap()
    }

    /// Populate the children with every legal move `color` has in `pos`,
    /// in generation order. A node left with zero children afterwards is
    /// terminal by construction.
    pub fn populate(&mut self, pos: &Position, color: Color) {
        for mv in legal_moves(pos, color, true) {
            self.add_move(mv);
        }
    }

    pub fn credit_for(&self, color: Color) -> f32 {
        match color {
            Color::White => self.white_credit,
            Color::Black => self.black_credit,
        }
    }

    pub fn add_credit(&mut self, white: f32, black: f32) {
        self.white_credit += white;
        self.black_credit += black;
    }

    /// Suggested-move gate, shared by the tree searches' final selection.
    ///
    /// A hint is adopted only when it is a real move that coincides with one
    /// of the generated candidates, and no candidate did anything more
    /// interesting than a plain move. Any capture, check or promotion among
    /// the alternatives makes blindly trusting the hint too uncertain.
    pub fn adoptable_hint(&self, hint: Option<&MoveRecord>) -> Option<MoveRecord> {
        let hint = hint?;
        if !hint.is_valid() {
            return None;
        }
        if !self
            .children
            .iter()
            .all(|c| c.mv.outcome == Outcome::Simple && !c.mv.check)
        {
            return None;
        }
        self.children
            .iter()
            .map(|c| c.mv)
            .find(|mv| mv.matches(hint))
    }
}

impl Drop for SearchTreeNode {
    // Teardown is iterative: a long Monte Carlo descent chain would
    // otherwise recurse once per ply when the tree is dropped.
    fn drop(&mut self) {
        let mut stack: Vec<SearchTreeNode> = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
