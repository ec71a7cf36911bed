use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use connect_four_minimax::config::AppConfig;
use connect_four_minimax::error::SessionError;
use connect_four_minimax::game::{GameOutcome, Player};
use connect_four_minimax::session::{MatchStats, Role, Session, Turn};

/// Play Connect Four in the terminal against random, greedy or minimax opponents.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against an AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Who plays X
    #[arg(long, value_enum)]
    p1: Option<Role>,

    /// Who plays O
    #[arg(long, value_enum)]
    p2: Option<Role>,

    /// Which piece moves first
    #[arg(long, value_enum)]
    first: Option<Player>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for reproducible AI choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many games between two AI players and print a summary
    #[arg(long)]
    games: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(role) = cli.p1 {
        config.players.one = role;
    }
    if let Some(role) = cli.p2 {
        config.players.two = role;
    }
    if let Some(first) = cli.first {
        config.players.first = first;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    match cli.games {
        Some(games) => run_series(&config, games),
        None => run_interactive(&config),
    }
}

fn run_series(config: &AppConfig, games: usize) -> Result<()> {
    if games == 0 {
        bail!("--games must be at least 1");
    }
    if config.players.one.is_human() || config.players.two.is_human() {
        bail!("--games needs two automated players (use --p1/--p2)");
    }

    let mut session = Session::new(config)?;
    let mut stats = MatchStats::new();
    for game in 1..=games {
        let outcome = session.play_out()?;
        let length = session.state().history().len();
        info!("game {game}/{games}: {} in {length} moves", describe(&session, outcome));
        stats.record(outcome, length);
        session.reset();
    }

    println!("-------------------------------------------");
    for player in [Player::One, Player::Two] {
        println!(
            "{player} ({}): {} wins ({:.1}%)",
            session.participant_name(player),
            stats.wins(player),
            stats.win_rate(player) * 100.0
        );
    }
    println!("Draws: {}", stats.draws());
    println!("Average game length: {:.1} moves", stats.average_length());
    Ok(())
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        for turn in session.play_until_human()? {
            print_turn(&session, &turn);
        }
        println!("\n{}\n", session.state().board());

        if let Some(outcome) = session.state().outcome() {
            println!("{}", describe(&session, outcome));
            if !prompt_yes(&mut lines, "Play again? [y/N] ")? {
                return Ok(());
            }
            session.reset();
            continue;
        }

        let player = session.state().current_player();
        print!(
            "{player}, choose a column [0-{}] or q to quit: ",
            session.state().board().cols() - 1
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        match input.parse::<usize>() {
            Ok(column) => match session.play_human(column) {
                Ok(_) => {}
                Err(SessionError::Move(err)) => println!("{err}, try again"),
                Err(err) => return Err(err.into()),
            },
            Err(_) => println!("'{input}' is not a column number"),
        }
    }
}

fn print_turn(session: &Session, turn: &Turn) {
    println!(
        "{} ({}) plays column {}",
        turn.player,
        session.participant_name(turn.player),
        turn.position.col
    );
}

fn describe(session: &Session, outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => {
            format!("{player} ({}) wins!", session.participant_name(player))
        }
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

fn prompt_yes<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
