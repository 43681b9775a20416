//! Mancala-Rust: a Kalah-style sowing game against a minimax engine.
//!
//! ## Usage
//!
//! - `mancala-rust` - Play as First against the engine
//! - `mancala-rust play --human second --depth 6` - Choose seat and depth
//! - `mancala-rust demo` - Watch the engine play a random opponent
//! - `mancala-rust session` - Start the line-based command engine
//!
//! Set `RUST_LOG=debug` to see search summaries on stderr.

use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mancala_rust::board::Side;
use mancala_rust::constants::AI_DEPTH;
use mancala_rust::eval::{final_tally, winner};
use mancala_rust::playout::random_move;
use mancala_rust::position::Position;
use mancala_rust::rules::Rules;
use mancala_rust::search::choose_move;
use mancala_rust::session::{Session, play_game};

/// Mancala-Rust: Kalah-style sowing game with a minimax engine
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    rules: RuleArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// Search depth for the engine
        #[arg(long, default_value_t = AI_DEPTH)]
        depth: i32,
        /// Which side the human plays
        #[arg(long, value_enum, default_value_t = Seat::First)]
        human: Seat,
    },
    /// Let the engine play a random opponent
    Demo {
        /// Search depth for the engine
        #[arg(long, default_value_t = AI_DEPTH)]
        depth: i32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Start the line-based command engine on stdin/stdout
    Session {
        /// Search depth for `genmove`
        #[arg(long, default_value_t = AI_DEPTH)]
        depth: i32,
    },
}

#[derive(Args)]
struct RuleArgs {
    /// Capture even when the opposite hollow is empty
    #[arg(long, global = true)]
    capture_empty: bool,
    /// Allow captures on the opponent's row
    #[arg(long, global = true)]
    capture_opponent_side: bool,
    /// Skip the opponent's store while sowing
    #[arg(long, global = true)]
    skip_opponent_store: bool,
}

impl RuleArgs {
    fn to_rules(&self) -> Rules {
        Rules {
            capture_empty_opposite: self.capture_empty,
            capture_on_opponent_side: self.capture_opponent_side,
            sow_opponent_store: !self.skip_opponent_store,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Seat {
    First,
    Second,
}

impl From<Seat> for Side {
    fn from(seat: Seat) -> Side {
        match seat {
            Seat::First => Side::First,
            Seat::Second => Side::Second,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = cli.rules.to_rules();
    info!(?rules, "starting");

    match cli.command {
        Some(Commands::Play { depth, human }) => {
            let stdin = io::stdin();
            play_game(&rules, depth, human.into(), stdin.lock(), io::stdout())?;
        }
        Some(Commands::Demo { depth, seed }) => run_demo(&rules, depth, seed),
        Some(Commands::Session { depth }) => {
            let mut session = Session::with_config(rules, depth);
            session.run()?;
        }
        None => {
            let stdin = io::stdin();
            play_game(&rules, AI_DEPTH, Side::First, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}

/// Engine plays First, a random player plays Second.
fn run_demo(rules: &Rules, depth: i32, seed: u64) {
    println!("Mancala-Rust: engine (one) vs random (two), depth {depth}\n");

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut pos = Position::new();
    print!("{}", pos.board);

    while !pos.is_terminal() {
        let mv = match pos.to_move {
            Side::First => choose_move(rules, &pos.board, pos.to_move, depth),
            Side::Second => random_move(&pos.board, pos.to_move, &mut rng),
        };
        let Some(mv) = mv else { break };
        println!("Player {} plays {mv}", pos.to_move);
        match pos.play(rules, mv) {
            Ok(next) => pos = next,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
        print!("{}", pos.board);
    }

    let [first, second] = final_tally(&pos.board);
    println!("Game over!");
    println!("Player one: {first}");
    println!("Player two: {second}");
    match winner(&pos.board) {
        Some(side) => println!("Winner: player {side}"),
        None => println!("Draw"),
    }
}
