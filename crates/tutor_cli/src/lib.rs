//! Terminal front-end for the chess tutor.

pub mod puzzles;
pub mod render;
pub mod session;

pub use puzzles::{puzzle, Lesson, Puzzle, LESSONS, PUZZLES};
pub use render::render_board;
pub use session::{Flow, Session, HELP};
