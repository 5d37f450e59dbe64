use crate::{board::Position, types::*};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate all legal moves, returning a freshly allocated vector.
///
/// Moves come out square by square from a1 to h8; within a square in the
/// fixed step order of each piece. Search tie-breaking depends on this order.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Legal moves of the piece standing on `from` (empty if it is not the mover's).
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    let Some(pc) = pos.piece_at(from) else {
        return out;
    };
    if pc.color != pos.side_to_move() {
        return out;
    }
    gen_piece(pos, from, pc, &mut out);
    let mut tmp = pos.clone();
    retain_legal(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// The position is used as scratch space and is restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    for from in pos.pieces(pos.side_to_move()) {
        if let Some(pc) = pos.piece_at(from) {
            gen_piece(pos, from, pc, out);
        }
    }
    retain_legal(pos, out);
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut tmp = pos.clone();
    let mover = tmp.side_to_move();
    let mut buf = Vec::with_capacity(28);
    for from in tmp.pieces(mover) {
        let Some(pc) = tmp.piece_at(from) else {
            continue;
        };
        buf.clear();
        gen_piece(&tmp, from, pc, &mut buf);
        for &mv in &buf {
            tmp.make_move(mv);
            let illegal = tmp.in_check(mover);
            tmp.undo_move();
            if !illegal {
                return true;
            }
        }
    }
    false
}

/// Resolve coordinates to a legal move. A missing promotion piece means queen.
pub fn find_legal(
    pos: &Position,
    from: Square,
    to: Square,
    promo: Option<PieceKind>,
) -> Option<Move> {
    let wanted = promo.unwrap_or(PieceKind::Queen);
    legal_moves_from(pos, from)
        .into_iter()
        .find(|m| m.to == to && m.promo.is_none_or(|p| p == wanted))
        .filter(|m| m.promo.is_some() || promo.is_none())
}

/// Destination squares of legal captures from `from`, for highlighting.
pub fn captures_from(pos: &Position, from: Square) -> Vec<Square> {
    let mut out: Vec<Square> = legal_moves_from(pos, from)
        .into_iter()
        .filter(|m| m.is_capture())
        .map(|m| m.to)
        .collect();
    out.dedup();
    out
}

fn retain_legal(pos: &mut Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move();
    out.retain(|&mv| {
        pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.undo_move();
        !illegal
    });
}

fn gen_piece(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_STEPS),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONAL_STEPS),
        PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONAL_STEPS),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, out, &DIAGONAL_STEPS);
            gen_slider(pos, from, pc.color, out, &ORTHOGONAL_STEPS);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc.color, out, &KING_STEPS);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn quiet_or_capture(pos: &Position, from: Square, to: Square, c: Color) -> Option<Move> {
    match pos.piece_at(to) {
        None => Some(Move::new(from, to)),
        Some(pc) if pc.color != c => {
            let mut mv = Move::new(from, to);
            mv.captured = Some(pc.kind);
            Some(mv)
        }
        _ => None,
    }
}

fn push_pawn_move(mv: Move, promo_rank: bool, out: &mut Vec<Move>) {
    if promo_rank {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move {
                promo: Some(pk),
                ..mv
            });
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // forward 1, then 2 from the start rank
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(Move::new(from, to), rank_of(to) == promo_rank, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => {
                let mut mv = Move::new(from, to);
                mv.captured = Some(tpc.kind);
                push_pawn_move(mv, rank_of(to) == promo_rank, out);
            }
            None if pos.en_passant() == Some(to)
                && sq(f + df, r).and_then(|s| pos.piece_at(s))
                    == Some(Piece::new(c.other(), PieceKind::Pawn)) =>
            {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                mv.captured = Some(PieceKind::Pawn);
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, steps: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in steps {
        if let Some(to) = sq(f + df, r + dr)
            && let Some(mv) = quiet_or_capture(pos, from, to, c)
        {
            out.push(mv);
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            let Some(mv) = quiet_or_capture(pos, from, to, c) else {
                break;
            };
            out.push(mv);
            if mv.is_capture() {
                break;
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let rights = pos.castling();
    let (home, kingside, queenside) = match c {
        Color::White => (4u8, rights.wk, rights.wq),
        Color::Black => (60u8, rights.bk, rights.bq),
    };
    if from != home || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let rook = Some(Piece::new(c, PieceKind::Rook));
    // (right, rook square, squares that must be empty, squares the king crosses)
    let sides = [
        (kingside, home + 3, home + 1..=home + 2, home + 1..=home + 2),
        (queenside, home - 4, home - 3..=home - 1, home - 2..=home - 1),
    ];
    for (allowed, rook_sq, between, crossed) in sides {
        if allowed
            && pos.piece_at(rook_sq) == rook
            && between.into_iter().all(|s| pos.piece_at(s).is_none())
            && crossed.into_iter().all(|s| !pos.is_square_attacked(s, enemy))
        {
            let target = if rook_sq > home { home + 2 } else { home - 2 };
            let mut mv = Move::new(from, target);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
