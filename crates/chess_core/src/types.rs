#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Sentinel square index marking "no move" (resignation, no legal move).
pub const NO_SQUARE: u8 = 64;

/// What a move did to the game, filled in as the move is applied or a
/// terminal position is classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unknown,
    Simple,
    Capture,
    Promotion,
    Threat,
    Check,
    Checkmate,
    Draw,
    Resign,
    Blocked,
}

impl Outcome {
    /// Checkmate, draw and resignation all end the game.
    pub fn is_game_over(self) -> bool {
        matches!(self, Outcome::Checkmate | Outcome::Draw | Outcome::Resign)
    }
}

/// One candidate move: start/end squares, the side that makes it, and the
/// bookkeeping the search layers on top (outcome classification, captured
/// piece, check flag, bounded score).
#[derive(Clone, Copy, Debug)]
pub struct MoveRecord {
    pub from: u8, // 0..63, NO_SQUARE marks the "no move" sentinel
    pub to: u8,
    pub color: Color,
    pub outcome: Outcome,
    pub captured: Option<PieceKind>,
    pub check: bool,
    pub score: i16,
}

impl MoveRecord {
    pub fn new(from: u8, to: u8, color: Color) -> Self {
        Self {
            from,
            to,
            color,
            outcome: Outcome::Unknown,
            captured: None,
            check: false,
            score: 0,
        }
    }

    /// The "no move" sentinel for a side.
    pub fn none(color: Color) -> Self {
        Self::new(NO_SQUARE, NO_SQUARE, color)
    }

    /// Classify a position where `mover` has no legal reply: checkmate by
    /// the opposing color if the mover is in check, stalemate otherwise.
    /// The record is the sentinel; for a mate its color is the winner's.
    pub fn terminal(mover: Color, in_check: bool) -> Self {
        let mut mv = if in_check {
            Self::none(mover.other())
        } else {
            Self::none(mover)
        };
        mv.outcome = if in_check {
            Outcome::Checkmate
        } else {
            Outcome::Draw
        };
        mv
    }

    pub fn is_valid(&self) -> bool {
        self.from < NO_SQUARE && self.to < NO_SQUARE
    }

    /// Same side moving the same piece to the same square. Score and
    /// outcome are deliberately ignored: this is how a suggested move is
    /// matched against generated candidates.
    pub fn matches(&self, other: &MoveRecord) -> bool {
        self.color == other.color && self.from == other.from && self.to == other.to
    }

    /// Scores are bounded to the i16 range; anything wider is a scoring
    /// policy bug, not an input condition.
    pub fn set_score(&mut self, score: i32) {
        assert!(
            score >= i16::MIN as i32 && score <= i16::MAX as i32,
            "move score {} out of range",
            score
        );
        self.score = score as i16;
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_game_over()
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
