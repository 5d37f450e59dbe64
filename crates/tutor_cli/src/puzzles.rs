//! Built-in practice positions and lesson notes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub title: &'static str,
    pub hint: &'static str,
    pub fen: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub content: &'static str,
}

pub const PUZZLES: &[Puzzle] = &[
    Puzzle {
        title: "Mate in 1 (easy)",
        hint: "Look for a direct check on the king",
        fen: "6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1",
    },
    Puzzle {
        title: "Fork tactic",
        hint: "A knight move forks king and queen",
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 4",
    },
    Puzzle {
        title: "Back-rank mate",
        hint: "Open a line to the enemy king",
        fen: "6k1/5ppp/8/8/8/8/5PPP/6RK w - - 0 1",
    },
];

pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Piece movement",
        content: "Pawns move forward one square (two from their starting square) and capture \
                  diagonally. Rooks move in straight lines, bishops diagonally, knights in an \
                  L-shape. The queen combines rook and bishop, the king moves one square.",
    },
    Lesson {
        title: "Check & Checkmate",
        content: "Check means the king is attacked. You must get out of check by moving the \
                  king, blocking, or capturing the attacker. Checkmate: no legal move escapes \
                  the check.",
    },
    Lesson {
        title: "Basic mate patterns",
        content: "Learn the mate-in-one patterns: the back-rank mate, the smothered mate and \
                  the simple two-rook mate.",
    },
];

/// Puzzle by its 1-based number as shown in the listing.
pub fn puzzle(number: usize) -> Option<&'static Puzzle> {
    number.checked_sub(1).and_then(|i| PUZZLES.get(i))
}
