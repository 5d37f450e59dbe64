//! Print per-move perft counts for debugging move generation.
//!
//! Usage:
//!   cargo run --release --example perft_divide -p chess_core -- [depth] [fen]

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::{Position, START_FEN, divide};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let fen = args.get(2).map(String::as_str).unwrap_or(START_FEN);

    let mut pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("bad position: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let rows = divide(&mut pos, depth);
    let elapsed = start.elapsed();

    let mut total = 0u64;
    for (mv, nodes) in &rows {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!();
    println!("Moves: {}", rows.len());
    println!("Nodes: {total}");
    println!("Time: {elapsed:.3?}");
    ExitCode::SUCCESS
}
