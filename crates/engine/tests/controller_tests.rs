//! Controller behavior across all three strategies.

use chess_core::{coord_to_sq, legal_moves, Color, Outcome, Position, SearchBudget};
use engine::{create_engine, Algorithm, SearchController};

fn all_algorithms() -> [(Algorithm, SearchBudget); 3] {
    [
        (Algorithm::Minimax, SearchBudget::depth(2)),
        (Algorithm::Random, SearchBudget::default()),
        (Algorithm::MonteCarlo, SearchBudget::games(100)),
    ]
}

#[test]
fn selector_parsing_is_lenient() {
    assert_eq!(Algorithm::parse("minimax"), Some(Algorithm::Minimax));
    assert_eq!(Algorithm::parse("use-MINI-please"), Some(Algorithm::Minimax));
    assert_eq!(Algorithm::parse("random"), Some(Algorithm::Random));
    assert_eq!(Algorithm::parse("Monte Carlo"), Some(Algorithm::MonteCarlo));
    assert_eq!(Algorithm::parse("alphazero"), None);
}

#[test]
fn every_strategy_plays_a_legal_opening_move() {
    let pos = Position::startpos();
    let legal = legal_moves(&pos, Color::White, true);
    for (algorithm, budget) in all_algorithms() {
        let controller = SearchController::new(algorithm, budget);
        let decision = controller.choose_move(&pos, Color::White, None);
        assert!(
            legal.iter().any(|mv| mv.matches(&decision.mv)),
            "{algorithm:?} played an illegal move"
        );
        assert_eq!(decision.text.len(), 4);
    }
}

#[test]
fn forced_move_agreement() {
    // Kh7 is the single legal reply; every strategy must find it
    let pos = Position::from_fen("3R3k/6p1/8/8/8/8/8/4K3 b - - 0 1");
    for (algorithm, budget) in all_algorithms() {
        let controller = SearchController::new(algorithm, budget);
        let decision = controller.choose_move(&pos, Color::Black, None);
        assert_eq!(decision.mv.from, coord_to_sq("h8").unwrap(), "{algorithm:?}");
        assert_eq!(decision.mv.to, coord_to_sq("h7").unwrap(), "{algorithm:?}");
        assert_eq!(decision.text, "h8h7");
    }
}

#[test]
fn mate_against_the_caller_becomes_a_resignation() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    for (algorithm, budget) in all_algorithms() {
        let controller = SearchController::new(algorithm, budget);
        let decision = controller.choose_move(&pos, Color::Black, None);
        assert!(!decision.mv.is_valid(), "{algorithm:?}");
        assert_eq!(decision.mv.outcome, Outcome::Resign, "{algorithm:?}");
        assert_eq!(decision.text, "resign");
    }
}

#[test]
fn stalemate_surfaces_as_a_draw() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    for (algorithm, budget) in all_algorithms() {
        let controller = SearchController::new(algorithm, budget);
        let decision = controller.choose_move(&pos, Color::Black, None);
        assert!(!decision.mv.is_valid(), "{algorithm:?}");
        assert_eq!(decision.mv.outcome, Outcome::Draw, "{algorithm:?}");
        assert_eq!(decision.text, "draw");
    }
}

#[test]
fn diagnostics_identify_the_strategy() {
    let pos = Position::startpos();

    let minimax = SearchController::new(Algorithm::Minimax, SearchBudget::depth(2))
        .choose_move(&pos, Color::White, None);
    assert_eq!(minimax.diagnostics.algorithm, Algorithm::Minimax);
    assert!(minimax.diagnostics.evaluated > 20);
    assert!(minimax.diagnostics.rollouts.is_none());

    let monte = SearchController::new(Algorithm::MonteCarlo, SearchBudget::games(100))
        .choose_move(&pos, Color::White, None);
    assert_eq!(monte.diagnostics.evaluated, 100);
    let rollouts = monte.diagnostics.rollouts.unwrap();
    assert_eq!(
        rollouts.draws + rollouts.checkmates + rollouts.depth_cutoffs,
        100
    );
}

#[test]
fn diagnostics_serialize_to_json() {
    let decision = SearchController::new(Algorithm::MonteCarlo, SearchBudget::games(25))
        .choose_move(&Position::startpos(), Color::White, None);
    let json = serde_json::to_string(&decision.diagnostics).unwrap();
    assert!(json.contains("\"MonteCarlo\""));
    assert!(json.contains("\"evaluated\":25"));
    assert!(json.contains("rollouts"));
}

#[test]
fn boxed_engines_report_their_names() {
    let mut seen = Vec::new();
    for algorithm in [Algorithm::Minimax, Algorithm::Random, Algorithm::MonteCarlo] {
        let engine = create_engine(algorithm);
        seen.push(engine.name().to_string());
    }
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|name| !name.is_empty()));
    assert_ne!(seen[0], seen[1]);
}
