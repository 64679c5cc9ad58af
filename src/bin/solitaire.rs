//! Interactive terminal solitaire.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, warn};

use solitaire::rules::GameRegistry;
use solitaire::session::{Outcome, ReplayLog, ReplayWriter, Session, SessionConfig, SessionError};

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Show the game menu and read a choice. Anything but a listed number
/// returns `None`.
fn choose_game(registry: &GameRegistry, input: &mut impl BufRead) -> Result<Option<String>> {
    let names = registry.names();
    println!("GAMES:");
    for (i, name) in names.iter().enumerate() {
        println!("{} {}", i + 1, name);
    }
    println!("Anything else to exit");
    print!("Option: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = line
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=names.len()).contains(n))
        .map(|n| names[n - 1].to_string());
    Ok(choice)
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn start(
    config: &SessionConfig,
    registry: &GameRegistry,
    input: &mut impl BufRead,
) -> Result<Option<Session>> {
    if config.resume {
        match ReplayLog::load(&config.log_file) {
            Ok(log) => {
                let mut session = Session::resume(registry, log)?;
                match ReplayWriter::append(&config.log_file) {
                    Ok(writer) => session.attach_writer(writer),
                    Err(err) => warn!(error = %err, "continuing without a replay log"),
                }
                return Ok(Some(session));
            }
            Err(err) => println!("ERROR: could not resume the game ({err})"),
        }
    }

    let game = match &config.game {
        Some(name) => name.clone(),
        None => match choose_game(registry, input)? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    let seed = config.seed.unwrap_or_else(default_seed);

    let mut session = Session::new(registry, &game, seed)
        .with_context(|| format!("could not start {game}"))?;
    match ReplayWriter::create(&config.log_file, seed, &game) {
        Ok(writer) => session.attach_writer(writer),
        Err(err) => warn!(error = %err, "continuing without a replay log"),
    }
    Ok(Some(session))
}

fn main() -> Result<()> {
    let config = SessionConfig::parse();
    init_tracing(&config.log_level);

    let registry = GameRegistry::builtin();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(mut session) = start(&config, &registry, &mut input)? else {
        return Ok(());
    };

    println!();
    println!("PLAYING {}", session.game_name());
    println!();
    print!("{}", session.table());

    while !session.is_finished() {
        print!("{}", session.table().prompt());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading command")? == 0 {
            break;
        }
        let command = line.trim_end_matches(&['\r', '\n'][..]);

        match session.submit(command) {
            Ok(Outcome::Quit) => break,
            Ok(_) => {
                println!();
                print!("{}", session.table());
            }
            Err(SessionError::BadCommand(_)) => println!("ERROR: bad command"),
            Err(SessionError::Game(err)) => println!("ERROR: {err}"),
            Err(err) => {
                error!(error = %err, "session error");
                println!("ERROR: {err}");
            }
        }
    }

    println!();
    println!("Game over!");
    Ok(())
}
