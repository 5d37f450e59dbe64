//! Tutor Engine
//!
//! Chooses the computer's reply for a difficulty level:
//! - easy: a uniformly random legal move
//! - medium / hard: fixed-depth minimax with alpha-beta pruning
//!
//! The depth for each level comes from [`EngineConfig`]; a depth of 0 selects
//! random play.

mod config;
mod random;
mod search;

use chess_core::{Engine, Move, Position, SearchResult, Square};
use tracing::debug;

pub use config::{ConfigError, DepthTable, Difficulty, EngineConfig, MAX_DEPTH};
pub use random::RandomMover;
pub use search::{pick_best_move, Minimax};

/// Difficulty-aware move picker.
///
/// The caller's position is never modified; searches run on a private copy.
#[derive(Debug, Clone)]
pub struct TutorEngine {
    config: EngineConfig,
    random: RandomMover,
    minimax: Minimax,
}

impl Default for TutorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            random: RandomMover::new(),
            minimax: Minimax::new(),
        }
    }

    /// Default depths with a reproducible random mode.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            random: RandomMover::with_seed(seed),
            ..Self::new()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `pos` at `level` and report the full result.
    ///
    /// Returns no move when the game is already over (checkmate, stalemate
    /// or a draw rule).
    pub fn analyse(&mut self, pos: &Position, level: Difficulty) -> SearchResult {
        let depth = self.config.depth(level);
        if pos.is_game_over() {
            debug!(%level, status = %pos.status(), "game over, no move to search");
            return SearchResult::none(depth);
        }

        let result = self.search(pos, depth);
        debug!(
            %level,
            depth,
            nodes = result.nodes,
            score = result.score,
            best = %result.best_move.map(|m| m.to_string()).unwrap_or_default(),
            "search finished"
        );
        result
    }

    /// The engine's move for the side to move, or `None` if the game is over.
    pub fn select_move(&mut self, pos: &Position, level: Difficulty) -> Option<Move> {
        self.analyse(pos, level).best_move
    }

    /// Like [`TutorEngine::select_move`], taking the level as text.
    ///
    /// An unknown token is rejected before any search work starts.
    pub fn select_move_for(
        &mut self,
        pos: &Position,
        level: &str,
    ) -> Result<Option<Move>, ConfigError> {
        let level: Difficulty = level.parse()?;
        Ok(self.select_move(pos, level))
    }

    /// Destination square of the move the hard level would play.
    pub fn hint(&mut self, pos: &Position) -> Option<Square> {
        self.select_move(pos, Difficulty::Hard).map(|mv| mv.to)
    }
}

impl Engine for TutorEngine {
    /// Depth 0 plays a random move; anything deeper runs the minimax search.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        if depth == 0 {
            self.random.search(pos, depth)
        } else {
            self.minimax.search(pos, depth)
        }
    }

    fn name(&self) -> &str {
        "Tutor"
    }

    fn new_game(&mut self) {
        self.random.new_game();
        self.minimax.new_game();
    }
}
