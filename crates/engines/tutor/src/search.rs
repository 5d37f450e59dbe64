//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White maximizes, Black
//! minimizes. Terminal positions are scored by the static evaluation, so a
//! mate is worth no more than the material left on the board.

use chess_core::{evaluate, legal_moves_into, Color, Engine, Move, Position, Score, SearchResult};
use tracing::trace;

/// Searches the position and returns the best move with its score.
///
/// Every root move is searched with a full window. Ties keep the move that
/// was generated first.
///
/// # Arguments
/// * `pos` - The position to search; it is cloned, never modified
/// * `depth` - Search depth in plies, counting the root move
/// * `nodes` - Counter for positions visited (for statistics)
pub fn pick_best_move(pos: &Position, depth: u8, nodes: &mut u64) -> Option<(Move, Score)> {
    let mut tmp = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let maximizing = tmp.side_to_move() == Color::White;
    let mut best: Option<(Move, Score)> = None;

    for mv in moves {
        tmp.make_move(mv);
        *nodes += 1;

        let score = minimax(
            &mut tmp,
            depth.saturating_sub(1),
            Score::MIN,
            Score::MAX,
            !maximizing,
            nodes,
        );

        tmp.undo_move();
        trace!(%mv, score, "root candidate");

        let improves = match best {
            None => true,
            Some((_, b)) if maximizing => score > b,
            Some((_, b)) => score < b,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    best
}

fn minimax(
    pos: &mut Position,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    nodes: &mut u64,
) -> Score {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for mv in moves {
        pos.make_move(mv);
        *nodes += 1;
        let score = minimax(pos, depth - 1, alpha, beta, !maximizing, nodes);
        pos.undo_move();

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Alpha-beta searcher behind the medium and hard levels.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    /// Node counter for statistics
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for Minimax {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = pick_best_move(pos, depth, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or_else(|| evaluate(pos)),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
