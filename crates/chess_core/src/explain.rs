//! Plain-language reasons why a requested move cannot be played.

use std::fmt;

use serde::Serialize;

use crate::attacks::{DIAGONAL, ORTHOGONAL, RAYS, first_blocker, king_attacks, knight_attacks};
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::movegen::find_legal;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum IllegalReason {
    EmptySquare,
    NotYourTurn { to_move: Color },
    OwnPiece,
    KnightPattern,
    PawnPattern,
    /// A piece stands between the mover and its target. `blocked` lists the
    /// squares of that line the mover cannot reach, target included.
    PathBlocked {
        kind: PieceKind,
        blocker: Square,
        blocked: Vec<Square>,
    },
    WrongPattern(PieceKind),
    CastlingNotAllowed,
    KingSafety,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::EmptySquare => write!(f, "There is no piece on that square."),
            IllegalReason::NotYourTurn { to_move } => write!(f, "It is {to_move}'s turn to move."),
            IllegalReason::OwnPiece => write!(f, "Illegal Move! You cannot capture your own piece."),
            IllegalReason::KnightPattern => write!(
                f,
                "Illegal Move! Knights move in an 'L' shape and are the only pieces that can jump."
            ),
            IllegalReason::PawnPattern => {
                write!(f, "Illegal Move! Pawns move forward but capture diagonally.")
            }
            IllegalReason::PathBlocked { kind, blocker, .. } => write!(
                f,
                "Path Blocked! Your {} cannot jump over the piece on {}.",
                kind.name(),
                sq_to_coord(*blocker)
            ),
            IllegalReason::WrongPattern(kind) => {
                write!(f, "Illegal Move! That is not how a {} moves.", kind.name())
            }
            IllegalReason::CastlingNotAllowed => write!(
                f,
                "Castling is not allowed: the king or rook has moved, the squares between them are not empty, or the king would cross an attacked square."
            ),
            IllegalReason::KingSafety => write!(f, "That move would leave your king in check."),
        }
    }
}

/// Explain why `from` -> `to` is not legal. `None` means the move is legal.
pub fn explain_illegal(pos: &Position, from: Square, to: Square) -> Option<IllegalReason> {
    let Some(pc) = pos.piece_at(from) else {
        return Some(IllegalReason::EmptySquare);
    };
    if pc.color != pos.side_to_move() {
        return Some(IllegalReason::NotYourTurn {
            to_move: pos.side_to_move(),
        });
    }
    if find_legal(pos, from, to, None).is_some() {
        return None;
    }

    let shape = match pc.kind {
        PieceKind::Knight if !knight_attacks(from).contains(to) => Some(IllegalReason::KnightPattern),
        PieceKind::Knight => None,
        PieceKind::Pawn => pawn_shape(pos, from, to, pc.color),
        PieceKind::Bishop => slider_shape(pos, from, to, pc.kind, &DIAGONAL),
        PieceKind::Rook => slider_shape(pos, from, to, pc.kind, &ORTHOGONAL),
        PieceKind::Queen => slider_shape(pos, from, to, pc.kind, &[0, 1, 2, 3, 4, 5, 6, 7]),
        PieceKind::King => return Some(king_reason(pos, from, to, pc.color)),
    };
    if shape.is_some() {
        return shape;
    }

    if pos.piece_at(to).is_some_and(|t| t.color == pc.color) {
        return Some(IllegalReason::OwnPiece);
    }
    Some(IllegalReason::KingSafety)
}

fn slider_shape(
    pos: &Position,
    from: Square,
    to: Square,
    kind: PieceKind,
    dirs: &[usize],
) -> Option<IllegalReason> {
    let Some(&dir) = dirs.iter().find(|&&d| RAYS[d][from as usize].contains(to)) else {
        return Some(IllegalReason::WrongPattern(kind));
    };
    // Squares strictly between the mover and its target.
    let between = RAYS[dir][from as usize] & !RAYS[dir][to as usize] & !Bitboard::from_square(to);
    let blocker = first_blocker(from, dir, pos.occupancy()).filter(|&b| between.contains(b))?;
    let blocked = RAYS[dir][blocker as usize].collect();
    Some(IllegalReason::PathBlocked {
        kind,
        blocker,
        blocked,
    })
}

fn pawn_shape(pos: &Position, from: Square, to: Square, c: Color) -> Option<IllegalReason> {
    let (dir, start_rank) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };
    let df = file_of(to) - file_of(from);
    let dr = (rank_of(to) - rank_of(from)) * dir;

    match (df, dr) {
        (0, 1) | (0, 2) => {
            if dr == 2 && rank_of(from) != start_rank {
                return Some(IllegalReason::PawnPattern);
            }
            let step = sq(file_of(from), rank_of(from) + dir)?;
            if dr == 2 && pos.piece_at(step).is_some() {
                return Some(IllegalReason::PathBlocked {
                    kind: PieceKind::Pawn,
                    blocker: step,
                    blocked: vec![to],
                });
            }
            // Pawns never capture straight ahead.
            if pos.piece_at(to).is_some() {
                return Some(IllegalReason::PawnPattern);
            }
            None
        }
        (-1, 1) | (1, 1) => {
            // Own piece on the target is reported by the caller.
            let capturable = pos.piece_at(to).is_some() || pos.en_passant() == Some(to);
            if capturable { None } else { Some(IllegalReason::PawnPattern) }
        }
        _ => Some(IllegalReason::PawnPattern),
    }
}

fn king_reason(pos: &Position, from: Square, to: Square, c: Color) -> IllegalReason {
    let home = match c {
        Color::White => 4,
        Color::Black => 60,
    };
    if from == home && rank_of(to) == rank_of(from) && (file_of(to) - file_of(from)).abs() == 2 {
        return IllegalReason::CastlingNotAllowed;
    }
    if !king_attacks(from).contains(to) {
        return IllegalReason::WrongPattern(PieceKind::King);
    }
    if pos.piece_at(to).is_some_and(|t| t.color == c) {
        return IllegalReason::OwnPiece;
    }
    IllegalReason::KingSafety
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod explain_tests;
