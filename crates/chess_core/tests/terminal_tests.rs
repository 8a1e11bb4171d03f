//! Terminal position classification
//!
//! A position with no legal moves is never an error: it is checkmate when
//! the side to move is in check, and a stalemate draw otherwise.

use chess_core::{legal_moves, Color, MoveRecord, Outcome, Position};

#[test]
fn mated_side_has_no_moves_and_is_in_check() {
    // Scholar's mate: black to move, no escape
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");

    assert!(legal_moves(&pos, Color::Black, true).is_empty());
    assert!(pos.in_check(Color::Black));

    let report = MoveRecord::terminal(Color::Black, pos.in_check(Color::Black));
    assert_eq!(report.outcome, Outcome::Checkmate);
    assert_eq!(report.color, Color::White);
}

#[test]
fn stalemated_side_has_no_moves_and_is_not_in_check() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(legal_moves(&pos, Color::Black, true).is_empty());
    assert!(!pos.in_check(Color::Black));

    let report = MoveRecord::terminal(Color::Black, pos.in_check(Color::Black));
    assert_eq!(report.outcome, Outcome::Draw);
}

#[test]
fn back_rank_mate_classified_as_checkmate() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1");
    // Not yet mate: black still has pawn moves
    assert!(!legal_moves(&pos, Color::Black, true).is_empty());

    let mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(legal_moves(&mated, Color::Black, true).is_empty());
    assert!(mated.in_check(Color::Black));
}

#[test]
fn king_and_pawn_stalemate() {
    // Classic king and pawn vs king stalemate
    let pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(legal_moves(&pos, Color::Black, true).is_empty());
    assert!(!pos.in_check(Color::Black));
}
