//! Rules engine for the chess tutor: positions, legal moves, game status,
//! board-notation serialization and static evaluation.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod eval;
pub mod explain;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;
pub mod zobrist;

pub use bitboard::Bitboard;
pub use board::{CastlingRights, Position, START_FEN};
pub use error::{Error, FenField, IllegalMoveError, ParseError};
pub use eval::{PIECE_VALUES, Score, evaluate};
pub use explain::{IllegalReason, explain_illegal};
pub use movegen::*;
pub use notation::{MoveText, parse_move};
pub use perft::{divide, perft};
pub use status::{DrawReason, GameStatus};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker (random, minimax)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the game is already over)
    pub best_move: Option<Move>,
    /// Score of the chosen line in centipawns, from White's perspective
    pub score: Score,
    /// Search depth in plies
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

impl SearchResult {
    pub fn none(depth: u8) -> Self {
        SearchResult {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move pickers implement.
///
/// Implementations may use `pos` as scratch space only through clones; the
/// caller's position is never modified.
pub trait Engine {
    /// Choose a move for the side to move, looking `depth` plies ahead.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Short name for logs and front-ends
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
