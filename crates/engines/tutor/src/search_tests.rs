use super::*;
use chess_core::legal_moves;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Reference minimax without pruning.
fn plain_minimax(pos: &mut Position, depth: u8, maximizing: bool) -> Score {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let scores: Vec<Score> = legal_moves(pos)
        .into_iter()
        .map(|mv| {
            pos.make_move(mv);
            let s = plain_minimax(pos, depth - 1, !maximizing);
            pos.undo_move();
            s
        })
        .collect();
    if maximizing {
        scores.into_iter().max().unwrap()
    } else {
        scores.into_iter().min().unwrap()
    }
}

fn plain_best(pos: &Position, depth: u8) -> Option<(Move, Score)> {
    let mut tmp = pos.clone();
    let maximizing = tmp.side_to_move() == Color::White;
    let mut best: Option<(Move, Score)> = None;
    for mv in legal_moves(pos) {
        tmp.make_move(mv);
        let s = plain_minimax(&mut tmp, depth - 1, !maximizing);
        tmp.undo_move();
        let improves = match best {
            None => true,
            Some((_, b)) => (maximizing && s > b) || (!maximizing && s < b),
        };
        if improves {
            best = Some((mv, s));
        }
    }
    best
}

#[test]
fn test_pick_best_move_start_position() {
    let pos = Position::startpos();
    let mut nodes = 0;
    let result = pick_best_move(&pos, 3, &mut nodes);
    assert!(result.is_some());
    assert!(nodes > 0);
}

#[test]
fn test_search_does_not_modify_position() {
    let pos = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    let mut nodes = 0;
    pick_best_move(&pos, 2, &mut nodes);
    assert_eq!(pos, before);
}

#[test]
fn test_white_maximizes() {
    let pos = pos("7k/8/8/3q4/8/8/8/K2R4 w - - 0 1");
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&pos, 1, &mut nodes).unwrap();
    assert_eq!(mv.to_string(), "d1d5");
    assert!(score > evaluate(&pos));
}

#[test]
fn test_black_minimizes() {
    let pos = pos("k2r4/8/8/8/3Q4/8/8/7K b - - 0 1");
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&pos, 1, &mut nodes).unwrap();
    assert_eq!(mv.to_string(), "d8d4");
    assert!(score < evaluate(&pos));
}

#[test]
fn test_depth_two_sees_recapture() {
    // The d5 pawn is defended by e6.
    let pos = pos("7k/8/4p3/3p4/8/8/8/K2R4 w - - 0 1");
    let mut nodes = 0;
    let greedy = pick_best_move(&pos, 1, &mut nodes).unwrap().0;
    assert_eq!(greedy.to_string(), "d1d5");

    let careful = pick_best_move(&pos, 2, &mut nodes).unwrap().0;
    assert_ne!(careful.to_string(), "d1d5");
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    let cases = [
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
        ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 4", 2),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
    ];
    for (fen, depth) in cases {
        let pos = pos(fen);
        let mut nodes = 0;
        assert_eq!(
            pick_best_move(&pos, depth, &mut nodes),
            plain_best(&pos, depth),
            "{fen}"
        );
    }
}

#[test]
fn test_no_move_when_game_over() {
    let mate = pos("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    let mut nodes = 0;
    assert!(pick_best_move(&mate, 3, &mut nodes).is_none());

    let mut engine = Minimax::new();
    let result = engine.search(&mate, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, evaluate(&mate));
}
