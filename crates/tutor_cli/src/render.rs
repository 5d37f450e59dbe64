//! Text rendering of the board for the terminal.

use chess_core::{sq, Position, Square};

/// Draw the board from White's side, rank 8 at the top.
///
/// Squares in `marks` are bracketed, the way the tutor highlights move
/// targets or a blocked path.
pub fn render_board(pos: &Position, marks: &[Square]) -> String {
    let mut out = String::with_capacity(400);
    for rank in (0..8i8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8i8 {
            let Some(s) = sq(file, rank) else { continue };
            let glyph = pos.piece_at(s).map_or('·', |pc| pc.glyph());
            if marks.contains(&s) {
                out.push_str(&format!("[{glyph}]"));
            } else {
                out.push_str(&format!(" {glyph} "));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out.push_str(&format!("{} to move\n", pos.side_to_move()));
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
