//! Pre-computed attack tables used for check detection and move explanation.
//!
//! Leaper tables (knight, king, pawn) are built at compile time from step
//! deltas. Sliding pieces use the classical ray approach: the ray from a
//! square is cut at the first occupied square in that direction.

use crate::bitboard::Bitboard;
use crate::types::Square;

/// (file, rank) steps, indexed by direction: 0=N, 1=NE, 2=E, 3=SE, 4=S, 5=SW, 6=W, 7=NW.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Orthogonal direction indices (rook moves).
pub const ORTHOGONAL: [usize; 4] = [0, 2, 4, 6];
/// Diagonal direction indices (bishop moves).
pub const DIAGONAL: [usize; 4] = [1, 3, 5, 7];

/// Whether walking in the direction increases the square index.
const INCREASING: [bool; 8] = [true, true, true, false, false, false, false, true];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const WHITE_PAWN_DELTAS: [(i8, i8); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_DELTAS: [(i8, i8); 2] = [(-1, -1), (1, -1)];

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < deltas.len() {
            let f = file + deltas[i].0;
            let r = rank + deltas[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }
        table[sq] = Bitboard(bits);
        sq += 1;
    }
    table
}

pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&DIRECTIONS);
pub static WHITE_PAWN_ATTACKS: [Bitboard; 64] = leaper_table(&WHITE_PAWN_DELTAS);
pub static BLACK_PAWN_ATTACKS: [Bitboard; 64] = leaper_table(&BLACK_PAWN_DELTAS);

/// RAYS[direction][square]: every square walked from `square` (exclusive) to the edge.
pub static RAYS: [[Bitboard; 64]; 8] = {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0usize;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0usize;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bits = 0u64;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
                f += df;
                r += dr;
            }
            rays[dir][sq] = Bitboard(bits);
            sq += 1;
        }
        dir += 1;
    }
    rays
};

/// Squares attacked by a pawn of the given color standing on `sq`.
#[inline(always)]
pub fn pawn_attacks(sq: Square, is_white: bool) -> Bitboard {
    if is_white {
        WHITE_PAWN_ATTACKS[sq as usize]
    } else {
        BLACK_PAWN_ATTACKS[sq as usize]
    }
}

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

/// First occupied square met when walking from `sq` in direction `dir`.
#[inline]
pub fn first_blocker(sq: Square, dir: usize, occupied: Bitboard) -> Option<Square> {
    let blockers = RAYS[dir][sq as usize] & occupied;
    if INCREASING[dir] {
        blockers.lsb()
    } else {
        blockers.msb()
    }
}

/// Ray from `sq` in direction `dir`, up to and including the first blocker.
#[inline]
pub fn ray_attacks(sq: Square, dir: usize, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq as usize];
    match first_blocker(sq, dir, occupied) {
        Some(b) => ray & !RAYS[dir][b as usize],
        None => ray,
    }
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    DIAGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, dir, occupied))
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ORTHOGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, dir, occupied))
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
