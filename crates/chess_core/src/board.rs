use std::fmt;
use std::str::FromStr;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::error::{FenField, IllegalMoveError, ParseError};
use crate::movegen::find_legal;
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    /// KQkq packed into the low four bits, used for hashing.
    pub fn bits(self) -> u8 {
        (self.wk as u8) | (self.wq as u8) << 1 | (self.bk as u8) << 2 | (self.bq as u8) << 3
    }

    /// Drop any right tied to a king or rook home square that a move touched.
    fn clear_for_square(&mut self, sq: Square) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }

    fn swapped(self) -> Self {
        CastlingRights {
            wk: self.bk,
            wq: self.bq,
            bk: self.wk,
            bq: self.wq,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == CastlingRights::NONE {
            return f.write_str("-");
        }
        for (on, c) in [(self.wk, 'K'), (self.wq, 'Q'), (self.bk, 'k'), (self.bq, 'q')] {
            if on {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Everything needed to take back one move exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
    captured_sq: Square,
    rook_move: Option<(Square, Square)>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    hash: u64,
}

/// A chess position plus the stack of moves played on it.
///
/// State changes only through [`Position::apply_move`] / [`Position::make_move`]
/// and is restored by [`Position::undo_move`] in strict stack order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    occupied: [Bitboard; 2],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>, // square behind a pawn that just advanced 2
    halfmove_clock: u32,
    fullmove_number: u32,
    hash: u64,
    history: Vec<Undo>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    fn empty() -> Self {
        Position {
            board: [None; 64],
            occupied: [Bitboard::EMPTY; 2],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            history: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
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
            let f = f as u8;
            p.put(f, Piece::new(Color::White, kind));
            p.put(8 + f, Piece::new(Color::White, PieceKind::Pawn));
            p.put(48 + f, Piece::new(Color::Black, PieceKind::Pawn));
            p.put(56 + f, Piece::new(Color::Black, kind));
        }
        p.castling = CastlingRights::ALL;
        p.hash ^= ZOBRIST.castling(p.castling.bits());
        p
    }

    /// Parse the six-field board notation string.
    ///
    /// Every field is required and must be in canonical form, so that
    /// `Position::from_fen(s)?.to_fen() == s` for every accepted `s`.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = fen.split(' ').collect();
        if parts.len() != 6 {
            return Err(ParseError::FieldCount(parts.len()));
        }
        if let Some(i) = parts.iter().position(|p| p.is_empty()) {
            return Err(ParseError::field(FenField::ALL[i], "", "field is empty"));
        }

        let mut p = Position::empty();
        p.parse_placement(parts[0])?;

        p.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ParseError::field(
                    FenField::SideToMove,
                    other,
                    "expected `w` or `b`",
                ));
            }
        };

        p.castling = parse_castling(parts[2])?;

        p.en_passant = match parts[3] {
            "-" => None,
            text => {
                let s = coord_to_sq(text).ok_or_else(|| {
                    ParseError::field(FenField::EnPassant, text, "not a square")
                })?;
                let (rank, reason) = match p.side_to_move {
                    Color::White => (5, "target must be on rank 6 when white is to move"),
                    Color::Black => (2, "target must be on rank 3 when black is to move"),
                };
                if rank_of(s) != rank {
                    return Err(ParseError::field(FenField::EnPassant, text, reason));
                }
                Some(s)
            }
        };

        p.halfmove_clock = parse_counter(parts[4], FenField::HalfmoveClock)?;
        p.fullmove_number = parse_counter(parts[5], FenField::FullmoveNumber)?;
        if p.fullmove_number == 0 {
            return Err(ParseError::field(
                FenField::FullmoveNumber,
                parts[5],
                "move numbers start at 1",
            ));
        }

        p.hash ^= ZOBRIST.side(p.side_to_move)
            ^ ZOBRIST.castling(p.castling.bits())
            ^ ZOBRIST.en_passant(p.en_passant);
        Ok(p)
    }

    fn parse_placement(&mut self, text: &str) -> Result<(), ParseError> {
        let invalid = |reason| ParseError::field(FenField::Placement, text, reason);
        let ranks: Vec<&str> = text.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks separated by `/`"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // notation lists rank 8 .. 1
            let mut file: i8 = 0;
            let mut prev_digit = false;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(invalid("empty-square count must be 1-8"));
                    }
                    if prev_digit {
                        return Err(invalid("adjacent empty-square counts must be merged"));
                    }
                    file += d as i8;
                    prev_digit = true;
                } else {
                    let pc = Piece::from_fen_char(ch).ok_or_else(|| invalid("unknown piece letter"))?;
                    let s = sq(file, rank).ok_or_else(|| invalid("rank describes more than 8 files"))?;
                    self.put(s, pc);
                    file += 1;
                    prev_digit = false;
                }
                if file > 8 {
                    return Err(invalid("rank describes more than 8 files"));
                }
            }
            if file != 8 {
                return Err(invalid("rank describes fewer than 8 files"));
            }
        }
        Ok(())
    }

    /// Serialize to the six-field board notation string.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[(rank * 8 + file) as usize] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        let stm = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self.en_passant.map_or_else(|| "-".to_string(), sq_to_coord);
        format!(
            "{out} {stm} {} {ep} {} {}",
            self.castling, self.halfmove_clock, self.fullmove_number
        )
    }

    /// Color-swapped copy with ranks mirrored; move history is not carried over.
    pub fn mirrored(&self) -> Self {
        let mut p = Position::empty();
        for s in 0..64u8 {
            if let Some(pc) = self.board[s as usize] {
                p.put(flip_rank(s), Piece::new(pc.color.other(), pc.kind));
            }
        }
        p.side_to_move = self.side_to_move.other();
        p.castling = self.castling.swapped();
        p.en_passant = self.en_passant.map(flip_rank);
        p.halfmove_clock = self.halfmove_clock;
        p.fullmove_number = self.fullmove_number;
        p.hash ^= ZOBRIST.side(p.side_to_move)
            ^ ZOBRIST.castling(p.castling.bits())
            ^ ZOBRIST.en_passant(p.en_passant);
        p
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
    /// Zobrist key of the current position.
    pub fn hash(&self) -> u64 {
        self.hash
    }
    /// Number of moves that can still be undone.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|u| u.mv)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn pieces(&self, c: Color) -> Bitboard {
        self.occupied[c.idx()]
    }

    pub fn occupancy(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|&s| matches!(self.board[s as usize], Some(pc) if pc.kind == PieceKind::King))
    }

    fn put(&mut self, s: Square, pc: Piece) {
        debug_assert!(self.board[s as usize].is_none(), "put onto occupied square");
        self.board[s as usize] = Some(pc);
        self.occupied[pc.color.idx()].set(s);
        self.hash ^= ZOBRIST.piece(pc, s);
    }

    fn take(&mut self, s: Square) -> Option<Piece> {
        let pc = self.board[s as usize].take()?;
        self.occupied[pc.color.idx()].clear(s);
        self.hash ^= ZOBRIST.piece(pc, s);
        Some(pc)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// Whether any piece of color `by` attacks `target`.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let theirs = self.pieces(by);
        let occupied = self.occupancy();
        let any_of = |set: Bitboard, kinds: &[PieceKind]| {
            (set & theirs).any(|s| {
                matches!(self.board[s as usize], Some(pc) if kinds.contains(&pc.kind))
            })
        };

        // A pawn of `by` attacks target from where an opposite-colored pawn on target would attack.
        any_of(pawn_attacks(target, by == Color::Black), &[PieceKind::Pawn])
            || any_of(knight_attacks(target), &[PieceKind::Knight])
            || any_of(king_attacks(target), &[PieceKind::King])
            || any_of(
                bishop_attacks(target, occupied),
                &[PieceKind::Bishop, PieceKind::Queen],
            )
            || any_of(
                rook_attacks(target, occupied),
                &[PieceKind::Rook, PieceKind::Queen],
            )
    }

    /// Play `mv` after checking it against the legal move list.
    ///
    /// A move without a promotion piece that reaches the last rank promotes
    /// to a queen. On error the position is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        match find_legal(self, mv.from, mv.to, mv.promo) {
            Some(legal) => {
                self.make_move(legal);
                Ok(())
            }
            None => Err(IllegalMoveError {
                mv: mv.to_string(),
                fen: self.to_fen(),
            }),
        }
    }

    /// Play a move taken from the legal move list without re-validating it.
    ///
    /// A move from an empty square is ignored and nothing is pushed onto the
    /// undo stack.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let Some(moved) = self.piece_at(from) else {
            return;
        };

        let mut undo = Undo {
            mv,
            moved,
            captured: None,
            captured_sq: to,
            rook_move: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        };

        self.hash ^= ZOBRIST.castling(self.castling.bits()) ^ ZOBRIST.en_passant(self.en_passant);
        self.en_passant = None;

        if mv.is_en_passant {
            // The captured pawn sits beside the mover, on the destination file.
            if let Some(cs) = sq(file_of(to), rank_of(from)) {
                undo.captured_sq = cs;
            }
        }
        undo.captured = self.take(undo.captured_sq);

        self.take(from);
        let last_rank = match moved.color {
            Color::White => 7,
            Color::Black => 0,
        };
        let placed = if moved.kind == PieceKind::Pawn && rank_of(to) == last_rank {
            Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.put(to, placed);

        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match to {
                6 => Some((7, 5)),
                2 => Some((0, 3)),
                62 => Some((63, 61)),
                58 => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares
                && let Some(rook) = self.take(rf)
            {
                self.put(rt, rook);
                undo.rook_move = Some((rf, rt));
            }
        }

        self.castling.clear_for_square(from);
        self.castling.clear_for_square(to);

        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }

        self.hash ^= ZOBRIST.side(Color::Black);
        self.side_to_move = self.side_to_move.other();
        self.hash ^= ZOBRIST.castling(self.castling.bits()) ^ ZOBRIST.en_passant(self.en_passant);

        self.history.push(undo);
    }

    /// Take back the most recent move, returning it. `None` if nothing was played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        let mv = undo.mv;

        if let Some((rf, rt)) = undo.rook_move
            && let Some(rook) = self.take(rt)
        {
            self.put(rf, rook);
        }
        self.take(mv.to);
        self.put(mv.from, undo.moved);
        if let Some(cp) = undo.captured {
            self.put(undo.captured_sq, cp);
        }

        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.hash = undo.hash;
        Some(mv)
    }

    /// How many times the current position has occurred, counting itself.
    ///
    /// Only positions since the last capture or pawn move can repeat.
    pub fn repetition_count(&self) -> usize {
        1 + self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|u| u.hash == self.hash)
            .count()
    }
}

fn parse_castling(text: &str) -> Result<CastlingRights, ParseError> {
    if text == "-" {
        return Ok(CastlingRights::NONE);
    }
    let mut rights = CastlingRights::NONE;
    for c in text.chars() {
        match c {
            'K' => rights.wk = true,
            'Q' => rights.wq = true,
            'k' => rights.bk = true,
            'q' => rights.bq = true,
            _ => {
                return Err(ParseError::field(
                    FenField::Castling,
                    text,
                    "expected `-` or letters from `KQkq`",
                ));
            }
        }
    }
    if rights.to_string() != text {
        return Err(ParseError::field(
            FenField::Castling,
            text,
            "rights must be listed once each in `KQkq` order",
        ));
    }
    Ok(rights)
}

fn parse_counter(text: &str, field: FenField) -> Result<u32, ParseError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::field(field, text, "expected a non-negative integer"));
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(ParseError::field(field, text, "leading zeros are not allowed"));
    }
    text.parse()
        .map_err(|_| ParseError::field(field, text, "expected a non-negative integer"))
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
