//! Line-oriented command interpreter for one tutoring game.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use chess_core::{
    captures_from, coord_to_sq, evaluate, explain_illegal, legal_moves, legal_moves_from,
    sq_to_coord, Color, Engine, GameStatus, IllegalReason, Move, MoveText, Position, Score,
};
use serde::Serialize;
use tracing::{debug, info};
use tutor_engine::{Difficulty, TutorEngine};

use crate::puzzles::{puzzle, LESSONS, PUZZLES};
use crate::render::render_board;

pub const HELP: &str = "\
Commands:
  new                 start a new game
  fen [<position>]    print the position, or load one
  show                draw the board
  moves [<square>]    list legal moves, optionally for one piece
  move <from><to>[p]  play a move (e.g. e2e4, e7e8q); the engine replies
  undo                take back one move
  go [<level>]        let the engine move for the side to move
  hint                show where the engine would move
  level [<level>]     show or set the difficulty (easy, medium, hard)
  eval                static evaluation, positive favors White
  status              check, checkmate or draw
  puzzles             list practice positions
  puzzle <n>          load practice position n
  lessons             show the lesson notes
  quit                leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Serialize)]
struct MoveReport {
    side: Color,
    #[serde(rename = "move")]
    mv: MoveText,
    fen: String,
    status: GameStatus,
}

#[derive(Serialize)]
struct IllegalReport<'a> {
    requested: &'a str,
    reason: &'a IllegalReason,
    message: String,
}

#[derive(Serialize)]
struct StatusReport {
    fen: String,
    status: GameStatus,
}

#[derive(Serialize)]
struct UndoReport {
    undone: Option<MoveText>,
    fen: String,
}

#[derive(Serialize)]
struct HintReport {
    hint: Option<String>,
}

#[derive(Serialize)]
struct EvalReport {
    score: Score,
    fen: String,
}

#[derive(Serialize)]
struct LevelReport {
    level: Difficulty,
}

#[derive(Serialize)]
struct ErrorReport {
    error: String,
}

pub struct Session {
    pos: Position,
    engine: TutorEngine,
    level: Difficulty,
    json: bool,
}

impl Session {
    pub fn new(engine: TutorEngine, level: Difficulty, json: bool) -> Self {
        Self {
            pos: Position::startpos(),
            engine,
            level,
            json,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn level(&self) -> Difficulty {
        self.level
    }

    /// Run one command line. Errors are only returned when `out` fails;
    /// bad input is answered on `out`.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = parts.collect();
        debug!(cmd, ?args, "command");

        match cmd {
            "new" => {
                self.pos = Position::startpos();
                self.engine.new_game();
                self.show(out)?;
            }
            "fen" if args.is_empty() => writeln!(out, "{}", self.pos.to_fen())?,
            "fen" => self.load_fen(&args.join(" "), out)?,
            "show" => self.show(out)?,
            "moves" => self.list_moves(args.first().copied(), out)?,
            "move" => match args.first() {
                Some(text) => self.human_move(text, out)?,
                None => self.error(out, "usage: move <from><to>[promotion], e.g. move e2e4")?,
            },
            "undo" => {
                let undone = self.pos.undo_move();
                let report = UndoReport {
                    undone: undone.map(MoveText::from),
                    fen: self.pos.to_fen(),
                };
                match undone {
                    Some(mv) => self.reply(out, &report, format_args!("took back {mv}"))?,
                    None => self.reply(out, &report, "nothing to take back")?,
                }
            }
            "go" => {
                let level = match args.first().map(|t| t.parse::<Difficulty>()) {
                    None => self.level,
                    Some(Ok(level)) => level,
                    Some(Err(e)) => {
                        self.error(out, e)?;
                        return Ok(Flow::Continue);
                    }
                };
                self.engine_move(level, out)?;
            }
            "hint" => {
                let hint = self.engine.hint(&self.pos).map(sq_to_coord);
                let report = HintReport { hint: hint.clone() };
                match hint {
                    Some(s) => self.reply(out, &report, format_args!("hint: consider a move to {s}"))?,
                    None => self.reply(out, &report, "no hint, the game is over")?,
                }
            }
            "level" => match args.first() {
                None => {
                    let report = LevelReport { level: self.level };
                    self.reply(out, &report, format_args!("level: {}", self.level))?;
                }
                Some(token) => match token.parse::<Difficulty>() {
                    Ok(level) => {
                        self.level = level;
                        self.reply(out, &LevelReport { level }, format_args!("level set to {level}"))?;
                    }
                    Err(e) => self.error(out, e)?,
                },
            },
            "eval" => {
                let score = evaluate(&self.pos);
                let report = EvalReport {
                    score,
                    fen: self.pos.to_fen(),
                };
                self.reply(
                    out,
                    &report,
                    format_args!("evaluation: {score} (positive favors White)"),
                )?;
            }
            "status" => self.report_status(out)?,
            "puzzles" => {
                for (i, p) in PUZZLES.iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, p.title)?;
                }
            }
            "puzzle" => self.load_puzzle(args.first().copied(), out)?,
            "lessons" => {
                for lesson in LESSONS {
                    writeln!(out, "{}\n  {}\n", lesson.title, lesson.content)?;
                }
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => self.error(out, format_args!("unknown command `{other}`, try `help`"))?,
        }
        Ok(Flow::Continue)
    }

    /// Answer with `report` as a JSON line, or with `text` otherwise.
    fn reply<T: Serialize>(&self, out: &mut dyn Write, report: &T, text: impl Display) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        } else {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn error(&self, out: &mut dyn Write, message: impl Display) -> Result<()> {
        let report = ErrorReport {
            error: message.to_string(),
        };
        self.reply(out, &report, message)
    }

    fn show(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", render_board(&self.pos, &[]))?;
        Ok(())
    }

    fn load_fen(&mut self, fen: &str, out: &mut dyn Write) -> Result<()> {
        match Position::from_fen(fen) {
            Ok(pos) => {
                self.pos = pos;
                self.show(out)
            }
            Err(e) => self.error(out, format_args!("invalid position: {e}")),
        }
    }

    fn load_puzzle(&mut self, arg: Option<&str>, out: &mut dyn Write) -> Result<()> {
        let Some(p) = arg.and_then(|a| a.parse().ok()).and_then(puzzle) else {
            return self.error(out, format_args!("no such puzzle, choose 1-{}", PUZZLES.len()));
        };
        self.pos = Position::from_fen(p.fen)?;
        writeln!(out, "{}\nhint: {}", p.title, p.hint)?;
        self.show(out)
    }

    fn list_moves(&self, square: Option<&str>, out: &mut dyn Write) -> Result<()> {
        let Some(coord) = square else {
            let moves: Vec<String> = legal_moves(&self.pos).iter().map(Move::to_string).collect();
            writeln!(out, "{}", moves.join(" "))?;
            return Ok(());
        };
        let Some(from) = coord_to_sq(coord) else {
            return self.error(out, format_args!("`{coord}` is not a square"));
        };

        let moves = legal_moves_from(&self.pos, from);
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        let texts: Vec<String> = moves.iter().map(Move::to_string).collect();
        writeln!(out, "{}", texts.join(" "))?;
        let captures: Vec<String> = captures_from(&self.pos, from)
            .into_iter()
            .map(sq_to_coord)
            .collect();
        if !captures.is_empty() {
            writeln!(out, "captures: {}", captures.join(" "))?;
        }
        write!(out, "{}", render_board(&self.pos, &targets))?;
        Ok(())
    }

    fn human_move(&mut self, text: &str, out: &mut dyn Write) -> Result<()> {
        let requested: MoveText = match text.parse() {
            Ok(m) => m,
            Err(e) => return self.error(out, e),
        };
        if self.pos.is_game_over() {
            return self.error(out, format_args!("the game is over: {}", self.pos.status()));
        }

        match requested.resolve(&self.pos) {
            Ok(mv) => {
                self.pos.apply_move(mv)?;
                self.report_move(mv, out)?;
                if !self.pos.is_game_over() {
                    self.engine_move(self.level, out)?;
                }
            }
            Err(err) => {
                let reason = coord_to_sq(&requested.from)
                    .zip(coord_to_sq(&requested.to))
                    .and_then(|(from, to)| explain_illegal(&self.pos, from, to));
                match reason {
                    Some(reason) => self.report_illegal(text, &reason, out)?,
                    None => self.error(out, err)?,
                }
            }
        }
        Ok(())
    }

    fn engine_move(&mut self, level: Difficulty, out: &mut dyn Write) -> Result<()> {
        if self.pos.is_game_over() {
            return self.error(out, format_args!("the game is over: {}", self.pos.status()));
        }
        let result = self.engine.analyse(&self.pos, level);
        let Some(mv) = result.best_move else {
            return self.error(out, "no move available");
        };
        info!(%mv, %level, score = result.score, "engine reply");
        self.pos.apply_move(mv)?;
        self.report_move(mv, out)
    }

    fn report_move(&self, mv: Move, out: &mut dyn Write) -> Result<()> {
        let side = self.pos.side_to_move().other();
        let status = self.pos.status();
        if self.json {
            let report = MoveReport {
                side,
                mv: MoveText::from(mv),
                fen: self.pos.to_fen(),
                status,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
            return Ok(());
        }
        writeln!(out, "{side} plays {mv}")?;
        if status != GameStatus::Ongoing {
            writeln!(out, "{status}")?;
        }
        Ok(())
    }

    fn report_illegal(&self, text: &str, reason: &IllegalReason, out: &mut dyn Write) -> Result<()> {
        if self.json {
            let report = IllegalReport {
                requested: text,
                reason,
                message: reason.to_string(),
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
            return Ok(());
        }
        writeln!(out, "{reason}")?;
        if let IllegalReason::PathBlocked {
            blocker, blocked, ..
        } = reason
        {
            let mut marks = vec![*blocker];
            marks.extend(blocked);
            write!(out, "{}", render_board(&self.pos, &marks))?;
        }
        Ok(())
    }

    fn report_status(&self, out: &mut dyn Write) -> Result<()> {
        let status = self.pos.status();
        let report = StatusReport {
            fen: self.pos.to_fen(),
            status,
        };
        self.reply(out, &report, status)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
