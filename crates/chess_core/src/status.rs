//! Terminal-state queries: check, checkmate, stalemate and the draw rules.

use serde::Serialize;

use crate::{bitboard::Bitboard, board::Position, movegen::has_legal_move, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Draw(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Draw(DrawReason::Stalemate) => write!(f, "draw by stalemate"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            GameStatus::Draw(DrawReason::FiftyMoveRule) => write!(f, "draw by the fifty-move rule"),
            GameStatus::Draw(DrawReason::ThreefoldRepetition) => {
                write!(f, "draw by threefold repetition")
            }
        }
    }
}

impl Position {
    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move())
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !has_legal_move(self)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_move(self)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece,
    /// or only bishops that all stand on squares of one color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Bitboard::EMPTY;
        let mut knights = 0;
        for s in self.occupancy() {
            let Some(pc) = self.piece_at(s) else {
                continue;
            };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => {
                    knights += 1;
                    minors.set(s);
                }
                PieceKind::Bishop => minors.set(s),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }
        if minors.popcount() <= 1 {
            return true;
        }
        knights == 0
            && ((minors & Bitboard::LIGHT_SQUARES).is_empty()
                || (minors & Bitboard::DARK_SQUARES).is_empty())
    }

    /// Stalemate or any draw rule.
    pub fn is_stalemate_or_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Draw(_))
    }

    /// No further play: checkmate, stalemate or a draw rule applies.
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.is_fifty_move_draw() {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        let in_check = self.is_check();
        if in_check && !has_legal_move(self) {
            return GameStatus::Checkmate {
                winner: self.side_to_move().other(),
            };
        }
        match self.draw_reason() {
            Some(reason) => GameStatus::Draw(reason),
            None if in_check => GameStatus::Check,
            None => GameStatus::Ongoing,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
