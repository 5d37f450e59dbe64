//! Chess tutor CLI
//!
//! Reads one command per line from stdin and answers on stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use tutor_cli::{Flow, Session};
use tutor_engine::{Difficulty, EngineConfig, TutorEngine};

fn print_usage() {
    println!("Chess Tutor");
    println!();
    println!("Usage:");
    println!("  tutor [--level <easy|medium|hard>] [--config <file.toml>] [--json]");
    println!();
    println!("Options:");
    println!("  --level, -l    difficulty of the engine's replies (default: medium)");
    println!("  --config, -c   depth table, see tutor.toml");
    println!("  --json         print replies as JSON lines; boards, lists and help stay text");
    println!();
    println!("Type `help` once running for the list of commands.");
}

struct Args {
    level: Difficulty,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        level: Difficulty::Medium,
        config: None,
        json: false,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--level" | "-l" => {
                let token = args.get(i + 1).context("--level needs a value")?;
                parsed.level = token.parse()?;
                i += 1;
            }
            "--config" | "-c" => {
                let path = args.get(i + 1).context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => bail!("unknown argument `{other}`"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args)?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    tracing::info!(?config, level = %args.level, "starting");

    let mut session = Session::new(TutorEngine::with_config(config), args.level, args.json);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !args.json {
        writeln!(stdout, "Chess Tutor, level {}. Type `help` for commands.", session.level())?;
        session.execute("show", &mut stdout)?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let flow = session.execute(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
