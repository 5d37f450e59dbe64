use super::*;
use crate::Error;

#[test]
fn test_parse_simple_move() {
    let pos = Position::startpos();
    let mv = parse_move(&pos, "e2e4").unwrap();
    assert_eq!(mv.from, 12);
    assert_eq!(mv.to, 28);
    assert_eq!(mv.to_string(), "e2e4");
}

#[test]
fn test_castling_flag_comes_from_legal_list() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 4")
            .unwrap();
    let mv = parse_move(&pos, "e1g1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_promotion_defaults_to_queen() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    assert_eq!(parse_move(&pos, "e7e8").unwrap().promo, Some(PieceKind::Queen));
    assert_eq!(parse_move(&pos, "e7e8n").unwrap().promo, Some(PieceKind::Knight));
    assert_eq!(parse_move(&pos, "e7e8N").unwrap().promo, Some(PieceKind::Knight));
}

#[test]
fn test_promotion_suffix_on_quiet_move_is_illegal() {
    let pos = Position::startpos();
    assert!(matches!(parse_move(&pos, "e2e4q"), Err(Error::IllegalMove(_))));
}

#[test]
fn test_malformed_text() {
    let pos = Position::startpos();
    for bad in ["", "e2", "e2e9", "i2e4", "e2e4k", "e2e4qq"] {
        assert!(
            matches!(parse_move(&pos, bad), Err(Error::Parse(_))),
            "{bad} should not parse"
        );
    }
}

#[test]
fn test_illegal_move_is_reported() {
    let pos = Position::startpos();
    let err = parse_move(&pos, "e2e5").unwrap_err();
    assert!(matches!(err, Error::IllegalMove(ref e) if e.mv == "e2e5"));
}

#[test]
fn test_move_text_json_shape() {
    let text = MoveText::from(Move::new(12, 28));
    let json = serde_json::to_string(&text).unwrap();
    assert_eq!(json, r#"{"from":"e2","to":"e4"}"#);

    let back: MoveText = serde_json::from_str(r#"{"from":"a7","to":"a8","promotion":"q"}"#).unwrap();
    assert_eq!(back.to_string(), "a7a8q");
}
