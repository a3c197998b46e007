//! Gomoku AI command line
//!
//! - `move`: read a board file and print the engine's move
//! - `selfplay`: let two tiers play each other

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gomoku::config::{apply_env_overrides, load_from_path};
use gomoku::rules::find_winner;
use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Gomoku AI engine with four difficulty tiers")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the engine's move for a position
    Move {
        /// Board file: one row per line, '.' empty, 'X' black, 'O' white
        #[arg(long)]
        board: PathBuf,
        /// Side to move (black or white)
        #[arg(long)]
        player: String,
        /// Difficulty tier
        #[arg(long, default_value = "intermediate")]
        tier: String,
    },
    /// Play a full game between two tiers
    Selfplay {
        #[arg(long, default_value = "intermediate")]
        black: String,
        #[arg(long, default_value = "beginner")]
        white: String,
        /// Board size; defaults to the configured size
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn parse_player(s: &str) -> Result<Stone> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" | "x" => Ok(Stone::Black),
        "white" | "o" => Ok(Stone::White),
        _ => bail!("unknown player '{}', expected black or white", s),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_from_path(path)?,
        None => {
            let config = apply_env_overrides(EngineConfig::default());
            config.validate()?;
            config
        }
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    init_tracing(&config.log_level)?;
    info!(board_size = config.board_size, seed = ?config.seed, "Configuration loaded");

    match cli.command {
        Command::Move {
            board,
            player,
            tier,
        } => run_move(config, &board, &player, &tier),
        Command::Selfplay {
            black,
            white,
            size,
            max_moves,
        } => {
            if let Some(size) = size {
                config.board_size = size;
                config.validate()?;
            }
            run_selfplay(config, &black, &white, max_moves)
        }
    }
}

fn run_move(mut config: EngineConfig, path: &Path, player: &str, tier: &str) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board {}", path.display()))?;
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut board = Board::from_rows(&rows)?;
    let player = parse_player(player)?;
    let tier: Difficulty = tier.parse()?;

    // The board file decides the size
    config.board_size = board.size();
    let mut engine = AIEngine::with_config(&config);
    let result = engine.get_move_with_stats(&mut board, player, tier)?;

    if let Some(pos) = result.best_move {
        println!("{} {}", pos.row, pos.col);
    }
    info!(
        search_type = ?result.search_type,
        score = result.score,
        nodes = result.nodes,
        time_ms = result.time_ms,
        "Search finished"
    );
    Ok(())
}

fn run_selfplay(
    config: EngineConfig,
    black: &str,
    white: &str,
    max_moves: Option<usize>,
) -> Result<()> {
    let black: Difficulty = black.parse()?;
    let white: Difficulty = white.parse()?;
    let mut engine = AIEngine::with_config(&config);
    let mut board = Board::new(config.board_size)?;
    let limit = max_moves.unwrap_or(config.board_size * config.board_size);

    let mut to_move = Stone::Black;
    for ply in 0..limit {
        let tier = if to_move == Stone::Black { black } else { white };
        let result = match engine.get_move_with_stats(&mut board, to_move, tier) {
            Ok(result) => result,
            Err(gomoku::EngineError::BoardFull) => break,
            Err(e) => return Err(e.into()),
        };
        let Some(pos) = result.best_move else { break };
        board.place_stone(pos, to_move);
        info!(ply, ?to_move, %tier, %pos, path = ?result.search_type, "Move played");

        if find_winner(&board).is_some() {
            break;
        }
        to_move = to_move.opponent();
    }

    println!("{}", board);
    match find_winner(&board) {
        Some(Stone::Black) => println!("Black ({}) wins", black),
        Some(Stone::White) => println!("White ({}) wins", white),
        _ => println!("Draw"),
    }
    Ok(())
}
