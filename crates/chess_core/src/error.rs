//! Error types for position parsing and move application.

use std::fmt;

use thiserror::Error;

/// The six space-separated fields of the board notation string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenField {
    Placement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl FenField {
    /// All fields in the order they appear in the string.
    pub const ALL: [FenField; 6] = [
        FenField::Placement,
        FenField::SideToMove,
        FenField::Castling,
        FenField::EnPassant,
        FenField::HalfmoveClock,
        FenField::FullmoveNumber,
    ];
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::Placement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling rights",
            FenField::EnPassant => "en-passant target",
            FenField::HalfmoveClock => "halfmove clock",
            FenField::FullmoveNumber => "fullmove number",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("invalid {field} `{value}`: {reason}")]
    InvalidField {
        field: FenField,
        value: String,
        reason: &'static str,
    },

    #[error("invalid move text `{text}`: {reason}")]
    InvalidMoveText { text: String, reason: &'static str },
}

impl ParseError {
    pub(crate) fn field(field: FenField, value: &str, reason: &'static str) -> Self {
        ParseError::InvalidField {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// The offending board-notation field, if the error came from one.
    pub fn fen_field(&self) -> Option<FenField> {
        match self {
            ParseError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Raised when a move that is not legal in the current position is applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal move {mv} in position {fen}")]
pub struct IllegalMoveError {
    pub mv: String,
    pub fen: String,
}

/// Either failure a caller can hit when feeding text into the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}
