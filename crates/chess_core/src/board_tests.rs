use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn mv(pos: &Position, text: &str) -> Move {
    crate::notation::parse_move(pos, text).unwrap()
}

#[test]
fn test_startpos_matches_fen() {
    assert_eq!(Position::startpos().to_fen(), START_FEN);
    assert_eq!(pos(START_FEN), Position::startpos());
}

#[test]
fn test_fen_round_trip() {
    for fen in [
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K2R b K - 37 112",
    ] {
        assert_eq!(pos(fen).to_fen(), fen);
    }
}

#[test]
fn test_from_fen_field_count() {
    let err = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap_err();
    assert_eq!(err, ParseError::FieldCount(4));
    assert!(Position::from_fen("").is_err());

    let err = Position::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1 ").unwrap_err();
    assert_eq!(err, ParseError::FieldCount(7));
}

#[test]
fn test_from_fen_names_empty_field() {
    let err = Position::from_fen("8/8/8/8/8/8/8/K6k w  - 0 1").unwrap_err();
    assert_eq!(err.fen_field(), Some(FenField::Castling));
    assert!(err.to_string().contains("castling rights"), "{err}");
}

#[test]
fn test_en_passant_target_must_match_side_to_move() {
    for fen in [
        "4k3/8/8/8/8/8/3PK3/8 w - e3 0 1",
        "8/3pk3/8/8/8/8/8/4K3 b - e6 0 1",
    ] {
        let err = Position::from_fen(fen).unwrap_err();
        assert_eq!(err.fen_field(), Some(FenField::EnPassant), "{fen}: {err}");
    }
}

#[test]
fn test_en_passant_needs_a_pawn_to_capture() {
    // Target on the right rank, but nothing stands on d5.
    let p = pos("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1");
    assert!(crate::movegen::legal_moves(&p).iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_make_move_from_empty_square_is_ignored() {
    let mut p = Position::startpos();
    let before = p.to_fen();
    p.make_move(Move::new(coord_to_sq("e4").unwrap(), coord_to_sq("e5").unwrap()));
    assert_eq!(p.to_fen(), before);
    assert_eq!(p.ply_count(), 0);
}

#[test]
fn test_from_fen_reports_field() {
    let cases = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1", FenField::Placement),
        ("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", FenField::Placement),
        ("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", FenField::Placement),
        ("rnbqkbnx/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", FenField::Placement),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", FenField::SideToMove),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QKkq - 0 1", FenField::Castling),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1", FenField::Castling),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1", FenField::EnPassant),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1", FenField::EnPassant),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1", FenField::HalfmoveClock),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 07 1", FenField::HalfmoveClock),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0", FenField::FullmoveNumber),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 x", FenField::FullmoveNumber),
    ];
    for (fen, field) in cases {
        let err = Position::from_fen(fen).unwrap_err();
        assert_eq!(err.fen_field(), Some(field), "{fen}: {err}");
    }
}

#[test]
fn test_apply_updates_state() {
    let mut p = Position::startpos();
    let e4 = mv(&p, "e2e4");
    p.apply_move(e4).unwrap();

    assert_eq!(p.side_to_move(), Color::Black);
    assert_eq!(p.en_passant(), coord_to_sq("e3"));
    assert_eq!(p.halfmove_clock(), 0);
    assert_eq!(p.fullmove_number(), 1);
    assert_eq!(p.last_move(), Some(e4));

    let nf6 = mv(&p, "g8f6");
    p.apply_move(nf6).unwrap();
    assert_eq!(p.fullmove_number(), 2);
    assert_eq!(p.halfmove_clock(), 1);
    assert_eq!(p.en_passant(), None);
    assert_eq!(p.ply_count(), 2);
}

#[test]
fn test_illegal_apply_leaves_position_unchanged() {
    let mut p = Position::startpos();
    let before = p.clone();
    let bogus = Move::new(coord_to_sq("e2").unwrap(), coord_to_sq("e5").unwrap());
    let err = p.apply_move(bogus).unwrap_err();
    assert_eq!(err.mv, "e2e5");
    assert_eq!(err.fen, START_FEN);
    assert_eq!(p, before);
}

#[test]
fn test_undo_restores_every_move_kind() {
    let fens = [
        // castling both ways, rook captures that strip rights
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        // en passant available
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        // promotions with and without capture
        "r3k3/1P6/8/8/8/8/6p1/4K2R b K - 0 1",
    ];
    for fen in fens {
        let mut p = pos(fen);
        let before = p.clone();
        for m in crate::movegen::legal_moves(&p) {
            p.make_move(m);
            assert_eq!(p.undo_move(), Some(m));
            assert_eq!(p, before, "{fen} after {m}");
        }
    }
}

#[test]
fn test_undo_on_fresh_position() {
    let mut p = Position::startpos();
    assert_eq!(p.undo_move(), None);
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let mut p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let castle = mv(&p, "e1g1");
    assert!(castle.is_castle);
    p.apply_move(castle).unwrap();
    assert_eq!(p.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");

    let rook_takes = mv(&p, "a8a1");
    p.apply_move(rook_takes).unwrap();
    assert_eq!(p.castling(), CastlingRights { bk: true, ..CastlingRights::NONE });
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut p = pos("8/P7/8/8/8/8/8/k6K w - - 0 1");
    let push = Move::new(coord_to_sq("a7").unwrap(), coord_to_sq("a8").unwrap());
    p.apply_move(push).unwrap();
    assert_eq!(
        p.piece_at(coord_to_sq("a8").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn test_mirrored() {
    let p = pos("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let m = p.mirrored();
    assert_eq!(
        m.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1"
    );
    assert_eq!(m.mirrored().to_fen(), p.to_fen());
    assert_eq!(m.hash(), pos(&m.to_fen()).hash());
}

#[test]
fn test_square_attacks() {
    let p = Position::startpos();
    let f3 = coord_to_sq("f3").unwrap();
    assert!(p.is_square_attacked(f3, Color::White));
    assert!(!p.is_square_attacked(f3, Color::Black));
    assert!(!p.in_check(Color::White));
}

#[test]
fn test_from_str_and_display() {
    let p: Position = START_FEN.parse().unwrap();
    assert_eq!(p.to_string(), START_FEN);
}
