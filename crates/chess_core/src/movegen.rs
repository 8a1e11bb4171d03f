use crate::{board::Position, types::*};

/// Generate all moves for `color`. With `avoid_self_check` set (the normal
/// mode), moves that leave the mover's own king in check are filtered out,
/// and each surviving record's check flag is set when the move gives check.
///
/// An empty result is a terminal position for `color`: checkmate if the king
/// is currently attacked, stalemate otherwise. Classifying that is the
/// caller's job via `Position::in_check`.
pub fn legal_moves(pos: &Position, color: Color, avoid_self_check: bool) -> Vec<MoveRecord> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(pos, color, &mut out);

    if avoid_self_check {
        out.retain_mut(|mv| {
            let next = pos.apply_move(mv);
            if next.in_check(color) {
                return false;
            }
            mv.check = next.in_check(color.other());
            true
        });
    }
    out
}

fn pseudo_moves(pos: &Position, color: Color, out: &mut Vec<MoveRecord>) {
    for sq in 0..64u8 {
        let pc = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != color {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, color, out),
            PieceKind::Knight => gen_knight(pos, sq, color, out),
            PieceKind::Bishop => gen_slider(
                pos,
                sq,
                color,
                out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => {
                gen_slider(pos, sq, color, out, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
            }
            PieceKind::Queen => gen_slider(
                pos,
                sq,
                color,
                out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => {
                gen_king(pos, sq, color, out);
                gen_castle(pos, sq, color, out);
            }
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<MoveRecord>) {
    let f = file_of(from);
    let r = rank_of(from);

    let dir: i8 = match c {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1 (promotion is resolved at apply time, assumed to queen)
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            out.push(MoveRecord::new(from, to, c));

            // forward 2 from start
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(MoveRecord::new(from, to2, c));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(tpc) => {
                    if tpc.color != c {
                        out.push(MoveRecord::new(from, to, c));
                    }
                }
                None => {
                    if pos.en_passant == Some(to) {
                        out.push(MoveRecord::new(from, to, c));
                    }
                }
            }
        }
    }
}

fn gen_knight(pos: &Position, from: u8, c: Color, out: &mut Vec<MoveRecord>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(MoveRecord::new(from, to, c)),
                Some(pc) if pc.color != c => out.push(MoveRecord::new(from, to, c)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<MoveRecord>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(MoveRecord::new(from, to, c)),
                Some(pc) if pc.color != c => {
                    out.push(MoveRecord::new(from, to, c));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(pos: &Position, from: u8, c: Color, out: &mut Vec<MoveRecord>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(MoveRecord::new(from, to, c)),
                Some(pc) if pc.color != c => out.push(MoveRecord::new(from, to, c)),
                _ => {}
            }
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<MoveRecord>) {
    // Must be on original king square
    let (king_from, ks, qs) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from {
        return;
    }

    // Can't castle out of or through check.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let base = from - 4; // a-file square of the king's rank

    // King side: two empty squares, neither attacked
    if ks
        && pos.piece_at(base + 5).is_none()
        && pos.piece_at(base + 6).is_none()
        && !pos.is_square_attacked(base + 5, enemy)
        && !pos.is_square_attacked(base + 6, enemy)
    {
        out.push(MoveRecord::new(from, base + 6, c));
    }
    // Queen side: three empty squares, king's path not attacked
    if qs
        && pos.piece_at(base + 3).is_none()
        && pos.piece_at(base + 2).is_none()
        && pos.piece_at(base + 1).is_none()
        && !pos.is_square_attacked(base + 3, enemy)
        && !pos.is_square_attacked(base + 2, enemy)
    {
        out.push(MoveRecord::new(from, base + 2, c));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
