use super::*;

fn session(json: bool) -> Session {
    Session::new(TutorEngine::with_seed(1), Difficulty::Medium, json)
}

fn run(session: &mut Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.execute(line, &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

#[test]
fn human_move_gets_engine_reply() {
    let mut s = session(false);
    let (flow, text) = run(&mut s, "move e2e4");
    assert_eq!(flow, Flow::Continue);
    assert!(text.starts_with("White plays e2e4\n"), "{text}");
    assert!(text.contains("Black plays "), "{text}");
    assert_eq!(s.position().ply_count(), 2);
    assert_eq!(s.position().side_to_move(), Color::White);
}

#[test]
fn illegal_move_is_explained() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "move e2e5");
    assert_eq!(text.trim(), IllegalReason::PawnPattern.to_string());
    assert_eq!(s.position().ply_count(), 0);

    let (_, text) = run(&mut s, "move a1a3");
    assert!(text.starts_with("Path Blocked! Your Rook"), "{text}");
    assert!(text.contains("[♙]"), "blocker should be highlighted: {text}");
}

#[test]
fn promotion_suffix_on_ordinary_move() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "move e2e4q");
    assert!(text.starts_with("illegal move e2e4q"), "{text}");
}

#[test]
fn bad_input_is_reported() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "move zz");
    assert!(text.starts_with("invalid move text"), "{text}");

    let (_, text) = run(&mut s, "fen not a position");
    assert!(text.starts_with("invalid position"), "{text}");

    let (_, text) = run(&mut s, "dance");
    assert!(text.contains("unknown command"));
}

#[test]
fn undo_takes_back_one_ply() {
    let mut s = session(false);
    run(&mut s, "move d2d4");
    let (_, text) = run(&mut s, "undo");
    assert!(text.starts_with("took back "));
    assert_eq!(s.position().ply_count(), 1);
    run(&mut s, "undo");
    let (_, text) = run(&mut s, "undo");
    assert_eq!(text.trim(), "nothing to take back");
}

#[test]
fn level_changes_and_rejects_unknown() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "level hard");
    assert_eq!(text.trim(), "level set to hard");
    assert_eq!(s.level(), Difficulty::Hard);

    let (_, text) = run(&mut s, "level expert");
    assert!(text.contains("unknown difficulty"));
    assert_eq!(s.level(), Difficulty::Hard);
}

#[test]
fn puzzles_load_by_number() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "puzzles");
    assert_eq!(text.lines().count(), PUZZLES.len());

    let (_, text) = run(&mut s, "puzzle 2");
    assert!(text.starts_with("Fork tactic\nhint: "), "{text}");
    assert_eq!(s.position().to_fen(), PUZZLES[1].fen);

    let (_, text) = run(&mut s, "puzzle 0");
    assert!(text.starts_with("no such puzzle"));
}

#[test]
fn game_over_stops_play() {
    let mut s = session(false);
    run(
        &mut s,
        "fen r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    );
    let (_, text) = run(&mut s, "go");
    assert_eq!(text.trim(), "the game is over: checkmate, White wins");
    let (_, text) = run(&mut s, "hint");
    assert_eq!(text.trim(), "no hint, the game is over");
}

#[test]
fn moves_for_one_square() {
    let mut s = session(false);
    let (_, text) = run(&mut s, "moves g1");
    assert_eq!(text.lines().next(), Some("g1h3 g1f3"));
}

#[test]
fn json_reports() {
    let mut s = session(true);
    let (_, text) = run(&mut s, "move e2e4");
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["move"]["from"], "e2");
    assert_eq!(lines[0]["move"]["to"], "e4");
    assert_eq!(lines[0]["side"], "White");
    assert_eq!(lines[1]["side"], "Black");

    let (_, text) = run(&mut s, "move a1a3");
    let report: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert!(report["reason"]["PathBlocked"].is_object());
}

#[test]
fn json_mode_answers_every_reply_as_json() {
    let mut s = session(true);
    let json = |text: String| -> serde_json::Value { serde_json::from_str(text.trim()).unwrap() };

    assert_eq!(json(run(&mut s, "level hard").1)["level"], "hard");
    assert_eq!(json(run(&mut s, "level").1)["level"], "hard");
    assert_eq!(json(run(&mut s, "eval").1)["score"], 0);
    assert!(json(run(&mut s, "hint").1)["hint"].is_string());

    let undo = json(run(&mut s, "undo").1);
    assert!(undo["undone"].is_null());
    assert_eq!(undo["fen"], Position::startpos().to_fen());

    for line in ["level extreme", "frobnicate", "move", "fen 8/8 w - - 0 1", "moves z9"] {
        let reply = json(run(&mut s, line).1);
        assert!(reply["error"].is_string(), "{line}: {reply}");
    }
}

#[test]
fn quit_ends_session() {
    let mut s = session(false);
    assert_eq!(run(&mut s, "quit").0, Flow::Quit);
    assert_eq!(run(&mut s, "").0, Flow::Continue);
}
