use super::*;

const POSITIONS: &[&str] = &[
    "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 4",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1",
];

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_central_pawn_push_scores_for_white() {
    let mut pos = Position::startpos();
    pos.apply_move(Move::new(12, 28)).unwrap(); // e2e4
    // e2 carries -25, e4 carries +25
    assert_eq!(evaluate(&pos), 50);
}

#[test]
fn test_material_dominates() {
    // White is a queen up
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
    assert!(evaluate(&pos) > 800);
}

#[test]
fn test_black_reads_table_mirrored() {
    let white = piece_value(Piece::new(Color::White, PieceKind::Knight), 18); // c3
    let black = piece_value(Piece::new(Color::Black, PieceKind::Knight), 42); // c6
    assert_eq!(white, black);
    assert_eq!(white, 320 + 10);
}

#[test]
fn test_color_swap_negates_score() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(evaluate(&pos.mirrored()), -evaluate(&pos), "{fen}");
    }
}

#[test]
fn test_ignores_side_to_move() {
    let w = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
    let b = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").unwrap();
    assert_eq!(evaluate(&w), evaluate(&b));
}
