//! Tree growth: UCB1 selection, first-visit rollouts, credit backpropagation.

use chess_core::{Color, MoveRecord, Outcome, Position, SearchBudget, SearchClock, SearchTreeNode};
use rand::thread_rng;
use rand::Rng;

use crate::rollout::RandomRollout;
use crate::MonteCarloEngine;

// Growth control when the caller supplies neither a clock nor a game cap.
// The tree gains a node per first-visit rollout, so some cap must exist.
const DEFAULT_GAME_CAP: u64 = 100_000;

impl MonteCarloEngine {
    pub(crate) fn run(
        &mut self,
        pos: &Position,
        color: Color,
        budget: &SearchBudget,
        hint: Option<&MoveRecord>,
    ) -> MoveRecord {
        let mut root = SearchTreeNode::root(color);
        root.populate(pos, color);
        if root.children.is_empty() {
            return MoveRecord::terminal(color, pos.in_check(color));
        }

        let clock = SearchClock::start(budget.move_time);
        let cap = match (budget.move_time, budget.max_games) {
            (None, None) => Some(DEFAULT_GAME_CAP),
            _ => budget.max_games,
        };

        let mut rng = thread_rng();
        'grow: loop {
            for _ in 0..self.batch {
                if cap.is_some_and(|cap| self.games >= cap) {
                    break 'grow;
                }
                self.iterate(&mut root, pos, 0, &mut rng);
            }
            if clock.expired() {
                break;
            }
        }

        self.pick(&root, hint)
    }

    /// One select-and-backpropagate pass. Returns the white/black credit of
    /// the game this pass simulated; every node on the descent path banks
    /// that credit and one visit.
    fn iterate<R: Rng>(
        &mut self,
        node: &mut SearchTreeNode,
        pos: &Position,
        level: u32,
        rng: &mut R,
    ) -> (f32, f32) {
        node.visits += 1;

        // A node already classified terminal replays its outcome
        if node.mv.is_game_over() {
            let credit = terminal_credit(&node.mv);
            node.add_credit(credit.0, credit.1);
            self.count_game(&node.mv);
            return credit;
        }

        if level >= self.max_tree_levels {
            node.add_credit(0.5, 0.5);
            self.games += 1;
            self.stats.depth_cutoffs += 1;
            return (0.5, 0.5);
        }

        let mover = pos.side_to_move;
        if node.children.is_empty() {
            node.populate(pos, mover);
            if node.children.is_empty() {
                // The move held by this node ended the game
                node.mv.outcome = if pos.in_check(mover) {
                    Outcome::Checkmate
                } else {
                    Outcome::Draw
                };
                let credit = terminal_credit(&node.mv);
                node.add_credit(credit.0, credit.1);
                self.count_game(&node.mv);
                return credit;
            }
        }

        let pick = self.select_ucb(node);
        let child = &mut node.children[pick];
        let mut mv = child.mv;
        let next = pos.apply_move(&mut mv);

        let credit = if child.visits == 0 {
            // First visit: evaluate by rollout instead of recursing further
            child.visits += 1;
            let rollout = RandomRollout::new(self.max_tree_levels.saturating_sub(level));
            let credit = rollout.play(&next, rng, &mut self.stats);
            self.games += 1;
            child.add_credit(credit.0, credit.1);
            credit
        } else {
            self.iterate(child, &next, level + 1, rng)
        };

        node.add_credit(credit.0, credit.1);
        credit
    }

    /// Index of the child maximizing UCB1; first wins ties.
    fn select_ucb(&self, node: &SearchTreeNode) -> usize {
        let mut best = 0;
        let mut best_value = f32::NEG_INFINITY;
        for (i, child) in node.children.iter().enumerate() {
            let value = self.ucb1(child, node.visits);
            if value > best_value {
                best_value = value;
                best = i;
            }
        }
        best
    }

    /// UCB1 value of a child from its mover's point of view. An unvisited
    /// child is infinitely attractive, so every child is tried once before
    /// exploitation can dominate.
    fn ucb1(&self, child: &SearchTreeNode, parent_visits: u32) -> f32 {
        if child.visits == 0 {
            return f32::INFINITY;
        }
        let wins = child.credit_for(child.mv.color);
        let si = child.visits as f32;
        let sp = parent_visits as f32;
        wins / si + self.temperature * (sp.ln() / si).sqrt()
    }

    /// Final root selection: a known mate trumps statistics, otherwise the
    /// best observed win average; a suggested move overrides both when the
    /// position is quiet enough.
    fn pick(&self, root: &SearchTreeNode, hint: Option<&MoveRecord>) -> MoveRecord {
        if let Some(mv) = root.adoptable_hint(hint) {
            return mv;
        }

        if let Some(mate) = root
            .children
            .iter()
            .find(|c| c.mv.outcome == Outcome::Checkmate)
        {
            return mate.mv;
        }

        let mut best: Option<(&SearchTreeNode, f32)> = None;
        for child in &root.children {
            if child.visits == 0 {
                continue;
            }
            let average = child.credit_for(child.mv.color) / child.visits as f32;
            if best.map_or(true, |(_, a)| average > a) {
                best = Some((child, average));
            }
        }
        match best {
            Some((child, _)) => child.mv,
            // Budget too small to visit anything; any legal move will do
            None => root.children[0].mv,
        }
    }

    fn count_game(&mut self, mv: &MoveRecord) {
        self.games += 1;
        if mv.outcome == Outcome::Checkmate {
            self.stats.checkmates += 1;
        } else {
            self.stats.draws += 1;
        }
    }
}

/// Credit for a game ending on a classified in-tree terminal.
fn terminal_credit(mv: &MoveRecord) -> (f32, f32) {
    match mv.outcome {
        Outcome::Checkmate => match mv.color {
            Color::White => (1.0, 0.0),
            Color::Black => (0.0, 1.0),
        },
        _ => (0.5, 0.5),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
