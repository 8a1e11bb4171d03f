use crate::{board::Position, movegen::legal_moves, types::*};

/// Encode a move as a two-coordinate algebraic string ("e2e4").
/// The "no move" sentinel encodes as "0000".
pub fn encode_move(mv: &MoveRecord) -> String {
    if !mv.is_valid() {
        return "0000".to_string();
    }
    format!("{}{}", sq_to_coord(mv.from), sq_to_coord(mv.to))
}

/// Parse a coordinate string against the legal moves of `color` in `pos`,
/// so the returned record carries proper flags. A trailing promotion piece
/// letter is tolerated (promotion is always to queen here).
pub fn parse_move(pos: &Position, color: Color, txt: &str) -> Option<MoveRecord> {
    if txt.len() < 4 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let wanted = MoveRecord::new(from, to, color);

    legal_moves(pos, color, true)
        .into_iter()
        .find(|mv| mv.matches(&wanted))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
