use super::*;
use chess_core::{coord_to_sq, Outcome};

fn choose(fen: &str, color: Color, depth: u8) -> MoveRecord {
    let pos = Position::from_fen(fen);
    let mut nodes = 0;
    pick_best_move(&pos, color, depth, None, &mut nodes)
}

#[test]
fn hanging_queen_is_captured_at_depth_one() {
    // Rook a1 can take the undefended queen on a4; no check is available
    let mv = choose("8/8/6k1/8/q7/8/8/R3K3 w - - 0 1", Color::White, 1);
    assert_eq!(mv.from, coord_to_sq("a1").unwrap());
    assert_eq!(mv.to, coord_to_sq("a4").unwrap());
    assert_eq!(mv.score, 5); // R vs nothing after the trade
}

#[test]
fn mate_outranks_winning_the_queen() {
    // Ra8 is back-rank mate; Rxh5 merely wins the queen
    let mv = choose("6k1/5ppp/8/7q/8/8/8/R3K2R w - - 0 1", Color::White, 2);
    assert_eq!(mv.from, coord_to_sq("a1").unwrap());
    assert_eq!(mv.to, coord_to_sq("a8").unwrap());
    assert_eq!(mv.score as i32, eval::MATE_SCORE);
}

#[test]
fn no_legal_moves_reports_mate_or_stalemate() {
    let mated = choose(
        "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1",
        Color::Black,
        3,
    );
    assert!(!mated.is_valid());
    assert_eq!(mated.outcome, Outcome::Checkmate);
    assert_eq!(mated.color, Color::White);

    let stalemated = choose("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", Color::Black, 3);
    assert!(!stalemated.is_valid());
    assert_eq!(stalemated.outcome, Outcome::Draw);
}

#[test]
fn hint_is_adopted_in_quiet_positions() {
    let pos = Position::startpos();
    let hint = MoveRecord::new(
        coord_to_sq("e2").unwrap(),
        coord_to_sq("e4").unwrap(),
        Color::White,
    );
    let mut nodes = 0;
    let mv = pick_best_move(&pos, Color::White, 2, Some(&hint), &mut nodes);
    assert!(mv.matches(&hint));
}

#[test]
fn hint_is_ignored_when_a_capture_is_on_the_board() {
    // Root has a queen capture among the candidates, so the gate rejects
    let pos = Position::from_fen("8/8/6k1/8/q7/8/8/R3K3 w - - 0 1");
    let hint = MoveRecord::new(
        coord_to_sq("e1").unwrap(),
        coord_to_sq("e2").unwrap(),
        Color::White,
    );
    let mut nodes = 0;
    let mv = pick_best_move(&pos, Color::White, 1, Some(&hint), &mut nodes);
    assert_eq!(mv.to, coord_to_sq("a4").unwrap());
}

// Reference search with no pruning; same fold, full width.
fn full_width(pos: &Position, searching: Color, depth_left: u8) -> i32 {
    let mover = pos.side_to_move;
    let moves = chess_core::legal_moves(pos, mover, true);
    if moves.is_empty() {
        return eval::terminal_score(mover, pos.in_check(mover), searching);
    }
    if depth_left == 0 {
        return eval::leaf_score(pos, searching);
    }
    let maximizing = mover == searching;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mut mv in moves {
        let next = pos.apply_move(&mut mv);
        let score = full_width(&next, searching, depth_left - 1);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[test]
fn pruning_never_changes_the_answer() {
    let fens = [
        "k7/8/8/8/8/8/1R6/K7 w - - 0 1",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        "6k1/5ppp/8/7q/8/8/8/R3K2R w - - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen);
        let depth = 3;

        let mut reference_best: Option<(MoveRecord, i32)> = None;
        for mut mv in chess_core::legal_moves(&pos, Color::White, true) {
            let next = pos.apply_move(&mut mv);
            let score = full_width(&next, Color::White, depth - 1);
            if reference_best.map_or(true, |(_, s)| score > s) {
                reference_best = Some((mv, score));
            }
        }
        let (ref_mv, ref_score) = reference_best.unwrap();

        let mut nodes = 0;
        let pruned = pick_best_move(&pos, Color::White, depth, None, &mut nodes);
        assert!(pruned.matches(&ref_mv), "move differs on {fen}");
        assert_eq!(pruned.score as i32, ref_score, "score differs on {fen}");
    }
}
