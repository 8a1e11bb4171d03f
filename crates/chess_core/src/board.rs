use crate::types::*;

#[derive(Clone, Debug)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

/// Per-type piece tallies for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub kings: i32,
    pub queens: i32,
    pub rooks: i32,
    pub bishops: i32,
    pub knights: i32,
    pub pawns: i32,
}

/// Board state. A value type: exploring a hypothetical move produces a new
/// `Position` via `apply_move`, it never mutates the one being searched.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    pub fn from_fen(fen: &str) -> Self {
        // Forsyth-Edwards Notation parser used by tests and engine setup.
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 4, "Invalid FEN: expected at least 4 fields");

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let sq = sq(file, rank).expect("Square out of bounds while parsing FEN");
                    board[sq as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                assert!(file <= 8, "Too many files in FEN rank");
            }
            assert!(file == 8, "Not enough files in FEN rank");
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => panic!("Invalid side to move in FEN: {}", stm_part),
        };

        let mut castling = CastlingRights {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        };
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => panic!("Invalid castling char in FEN: {}", c),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            coord_to_sq(ep_part)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .expect("Invalid halfmove clock in FEN");
        let fullmove_number: u32 = fullmove_part
            .parse()
            .expect("Invalid fullmove number in FEN");

        Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i] {
                if pc.color == c && pc.kind == PieceKind::King {
                    return Some(i as u8);
                }
            }
        }
        None
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn is_square_occupied(&self, row: i8, col: i8) -> bool {
        match sq(col, row) {
            Some(s) => self.piece_at(s).is_some(),
            None => false,
        }
    }

    /// Count one side's pieces by type.
    pub fn piece_counts(&self, c: Color) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for i in 0..64 {
            if let Some(pc) = self.board[i] {
                if pc.color != c {
                    continue;
                }
                match pc.kind {
                    PieceKind::King => counts.kings += 1,
                    PieceKind::Queen => counts.queens += 1,
                    PieceKind::Rook => counts.rooks += 1,
                    PieceKind::Bishop => counts.bishops += 1,
                    PieceKind::Knight => counts.knights += 1,
                    PieceKind::Pawn => counts.pawns += 1,
                }
            }
        }
        counts
    }

    pub fn total_piece_count(&self) -> usize {
        self.board.iter().filter(|sq| sq.is_some()).count()
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        // Pawn attacks
        let tf = file_of(target);
        let tr = rank_of(target);
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)], // white pawns attack the target from below
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for (df, dr) in pawn_dirs {
            if self.piece_is(sq(tf + df, tr + dr), by, PieceKind::Pawn) {
                return true;
            }
        }

        // Knight attacks
        let knight = [
            (1, 2),
            (2, 1),
            (-1, 2),
            (-2, 1),
            (1, -2),
            (2, -1),
            (-1, -2),
            (-2, -1),
        ];
        for (df, dr) in knight {
            if self.piece_is(sq(tf + df, tr + dr), by, PieceKind::Knight) {
                return true;
            }
        }

        // King adjacency
        let king = [
            (1, 1),
            (1, 0),
            (1, -1),
            (0, 1),
            (0, -1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        for (df, dr) in king {
            if self.piece_is(sq(tf + df, tr + dr), by, PieceKind::King) {
                return true;
            }
        }

        // Sliding: bishop/rook/queen
        let diag = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
        let ortho = [(1, 0), (-1, 0), (0, 1), (0, -1)];

        for (df, dr) in diag {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq2) = sq(f, r) {
                if let Some(pc) = self.piece_at(sq2) {
                    if pc.color == by
                        && (pc.kind == PieceKind::Bishop || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        for (df, dr) in ortho {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq2) = sq(f, r) {
                if let Some(pc) = self.piece_at(sq2) {
                    if pc.color == by && (pc.kind == PieceKind::Rook || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }

        false
    }

    fn piece_is(&self, sq: Option<u8>, color: Color, kind: PieceKind) -> bool {
        match sq.and_then(|s| self.piece_at(s)) {
            Some(pc) => pc.color == color && pc.kind == kind,
            None => false,
        }
    }

    /// Apply a move, producing the successor position. The input position is
    /// untouched; every explored branch gets its own copy.
    ///
    /// Flags the outcome (capture / promotion / simple move) and the captured
    /// piece type on the record as a side effect. Castling and en-passant are
    /// recognized from the move geometry. Panics on malformed input: a move
    /// from an empty square or out-of-range coordinates means the caller
    /// broke the contract, not that the game reached an odd state.
    pub fn apply_move(&self, mv: &mut MoveRecord) -> Position {
        assert!(mv.is_valid(), "apply_move: coordinates out of range");

        let mut next = self.clone();
        let from = mv.from;
        let to = mv.to;
        let moved = next.piece_at(from).expect("apply_move: no piece on start square");
        assert!(moved.color == mv.color, "apply_move: wrong side's piece on start square");
        let mut captured = next.piece_at(to);

        next.en_passant = None;

        // En-passant capture: a pawn moving diagonally onto an empty square.
        if moved.kind == PieceKind::Pawn && captured.is_none() && file_of(from) != file_of(to) {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + dir) {
                captured = next.piece_at(cs);
                next.set_piece(cs, None);
            }
        }

        next.set_piece(from, None);
        next.set_piece(to, Some(moved));

        // Promotion: assumed to queen
        let mut promoted = false;
        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                next.set_piece(
                    to,
                    Some(Piece {
                        color: moved.color,
                        kind: PieceKind::Queen,
                    }),
                );
                promoted = true;
            }
        }

        // Castling: king moving two files drags the rook along.
        if moved.kind == PieceKind::King && (file_of(from) - file_of(to)).abs() == 2 {
            let (rf, rt) = match (moved.color, to) {
                (Color::White, 6) => (7u8, 5u8),
                (Color::White, 2) => (0, 3),
                (Color::Black, 62) => (63, 61),
                (Color::Black, 58) => (56, 59),
                _ => panic!("apply_move: malformed castling move"),
            };
            let rook = next.piece_at(rf).expect("apply_move: castling without rook");
            next.set_piece(rf, None);
            next.set_piece(rt, Some(rook));
        }

        // Update castling rights if king/rook moved or rook captured
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    next.castling.wk = false;
                    next.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        next.castling.wq = false;
                    }
                    if from == 7 {
                        next.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    next.castling.bk = false;
                    next.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        next.castling.bq = false;
                    }
                    if from == 63 {
                        next.castling.bk = false;
                    }
                }
            }
        }
        if let Some(cp) = captured {
            if cp.kind == PieceKind::Rook {
                match cp.color {
                    Color::White => {
                        if to == 0 {
                            next.castling.wq = false;
                        }
                        if to == 7 {
                            next.castling.wk = false;
                        }
                    }
                    Color::Black => {
                        if to == 56 {
                            next.castling.bq = false;
                        }
                        if to == 63 {
                            next.castling.bk = false;
                        }
                    }
                }
            }
        }

        // Double pawn push sets the en-passant square
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                next.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        next.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            next.halfmove_clock + 1
        };
        if moved.color == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = moved.color.other();

        mv.captured = captured.map(|pc| pc.kind);
        mv.outcome = if promoted {
            Outcome::Promotion
        } else if captured.is_some() {
            Outcome::Capture
        } else {
            Outcome::Simple
        };

        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
