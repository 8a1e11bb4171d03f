use super::*;

#[test]
fn populate_matches_movegen() {
    let pos = Position::startpos();
    let mut root = SearchTreeNode::root(Color::White);
    root.populate(&pos, Color::White);
    assert_eq!(root.children.len(), 20);
}

#[test]
fn credit_tallies_per_color() {
    let mut node = SearchTreeNode::root(Color::White);
    node.add_credit(1.0, 0.0);
    node.add_credit(0.5, 0.5);
    assert_eq!(node.credit_for(Color::White), 1.5);
    assert_eq!(node.credit_for(Color::Black), 0.5);
}

#[test]
fn hint_adopted_only_in_quiet_positions() {
    let pos = Position::startpos();
    let mut root = SearchTreeNode::root(Color::White);
    // Legality filtering already classified every child's outcome
    root.populate(&pos, Color::White);

    let hint = MoveRecord::new(12, 28, Color::White); // e2e4
    let adopted = root.adoptable_hint(Some(&hint)).unwrap();
    assert!(adopted.matches(&hint));
}

#[test]
fn hint_rejected_when_alternatives_are_loud() {
    let pos = Position::startpos();
    let mut root = SearchTreeNode::root(Color::White);
    root.populate(&pos, Color::White);
    // Force one sibling to look like a capture
    root.children[0].mv.outcome = Outcome::Capture;

    let hint = MoveRecord::new(12, 28, Color::White);
    assert!(root.adoptable_hint(Some(&hint)).is_none());
}

#[test]
fn hint_rejected_when_not_a_candidate() {
    let pos = Position::startpos();
    let mut root = SearchTreeNode::root(Color::White);
    root.populate(&pos, Color::White);

    let hint = MoveRecord::new(0, 63, Color::White); // not a legal move
    assert!(root.adoptable_hint(Some(&hint)).is_none());

    let sentinel = MoveRecord::none(Color::White);
    assert!(root.adoptable_hint(Some(&sentinel)).is_none());
    assert!(root.adoptable_hint(None).is_none());
}

#[test]
fn deep_tree_drops_without_overflow() {
    // A pathological chain much deeper than any real search descent
    let mut root = SearchTreeNode::root(Color::White);
    {
        let mut cursor = &mut root;
        for _ in 0..200_000 {
            cursor = cursor.add_move(MoveRecord::new(0, 1, Color::White));
        }
    }
    drop(root); // must not blow the stack
}
