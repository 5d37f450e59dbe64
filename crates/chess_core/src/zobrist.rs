//! Zobrist keys for repetition tracking.
//!
//! A position's key is the XOR of one random value per (piece, square), the
//! side to move, the castling-rights combination and the en-passant file.
//! `Position` maintains it incrementally while pieces are placed and lifted.

use crate::types::{Color, Piece, Square, file_of};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pieces: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    /// One value per castling-rights bit pattern (KQkq -> 4 bits).
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

impl ZobristKeys {
    /// Keys come from a fixed-seed xorshift64 stream so hashes are reproducible.
    const fn generate() -> Self {
        const fn next(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = next(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = next(state);
        let black_to_move = state;

        // Pattern 0 (no rights) hashes to zero so a bare board keys to piece terms only.
        let mut castling = [0u64; 16];
        let mut i = 1;
        while i < 16 {
            state = next(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant_file = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = next(state);
            en_passant_file[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    #[inline(always)]
    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    #[inline(always)]
    pub fn side(&self, side: Color) -> u64 {
        match side {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }

    #[inline(always)]
    pub fn castling(&self, bits: u8) -> u64 {
        self.castling[(bits & 0x0f) as usize]
    }

    #[inline(always)]
    pub fn en_passant(&self, ep: Option<Square>) -> u64 {
        ep.map_or(0, |s| self.en_passant_file[file_of(s) as usize])
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::generate();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
