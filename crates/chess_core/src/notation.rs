//! Moves as they cross the boundary to a front-end: coordinate text such as
//! `e2e4` or `e7e8q`, or the equivalent serde record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    board::Position,
    error::{IllegalMoveError, ParseError},
    movegen::find_legal,
    types::*,
};

/// A move described by coordinates only; castling and en-passant are implied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveText {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl MoveText {
    /// Find the legal move these coordinates describe in `pos`.
    pub fn resolve(&self, pos: &Position) -> Result<Move, IllegalMoveError> {
        let illegal = || IllegalMoveError {
            mv: self.to_string(),
            fen: pos.to_fen(),
        };
        let from = coord_to_sq(&self.from).ok_or_else(illegal)?;
        let to = coord_to_sq(&self.to).ok_or_else(illegal)?;
        let promo = match self.promotion {
            Some(c) => Some(promotion_kind(c).ok_or_else(illegal)?),
            None => None,
        };
        find_legal(pos, from, to, promo).ok_or_else(illegal)
    }
}

impl From<Move> for MoveText {
    fn from(mv: Move) -> Self {
        MoveText {
            from: sq_to_coord(mv.from),
            to: sq_to_coord(mv.to),
            promotion: mv.promo.map(PieceKind::to_char),
        }
    }
}

impl fmt::Display for MoveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(c) = self.promotion {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveText {
    type Err = ParseError;

    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ParseError::InvalidMoveText {
            text: txt.to_string(),
            reason,
        };
        if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
            return Err(invalid("expected <from><to>[promotion], e.g. e2e4 or e7e8q"));
        }
        let from = &txt[0..2];
        let to = &txt[2..4];
        if coord_to_sq(from).is_none() || coord_to_sq(to).is_none() {
            return Err(invalid("squares must be a file a-h followed by a rank 1-8"));
        }
        let promotion = match txt[4..].chars().next() {
            Some(c) if promotion_kind(c).is_some() => Some(c.to_ascii_lowercase()),
            Some(_) => return Err(invalid("promotion piece must be one of q, r, b, n")),
            None => None,
        };
        Ok(MoveText {
            from: from.to_string(),
            to: to.to_string(),
            promotion,
        })
    }
}

fn promotion_kind(c: char) -> Option<PieceKind> {
    PieceKind::from_char(c).filter(|k| PieceKind::PROMOTIONS.contains(k))
}

/// Parse coordinate text and resolve it against the legal moves of `pos`.
pub fn parse_move(pos: &Position, txt: &str) -> Result<Move, crate::Error> {
    let text: MoveText = txt.parse()?;
    Ok(text.resolve(pos)?)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
