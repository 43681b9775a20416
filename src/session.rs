//! Text front ends for the engine.
//!
//! Two drivers live here:
//!
//! - [`play_game`] - the interactive human-vs-engine game: prompts the human
//!   for a hollow, answers with a searched move, and prints the board after
//!   every move.
//! - [`Session`] - a line-based command engine for scripts and other front
//!   ends. Each command gets a single response, `= <message>` on success or
//!   `? <message>` on failure.
//!
//! ## Supported Session Commands
//!
//! - `name`, `version` - engine identification
//! - `list_commands`, `known_command <cmd>` - command discovery
//! - `quit` - end the session
//! - `new` - reset to the starting position
//! - `board` - print the board
//! - `moves` - list legal hollows for the side to move
//! - `play <hollow>` - sow from a hollow for the side to move
//! - `genmove` - search and play a move for the side to move
//! - `undo` - take back the last move
//! - `depth [n]` - show or set the search depth
//! - `score` - store difference and final tally

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use tracing::info;

use crate::board::Side;
use crate::constants::AI_DEPTH;
use crate::eval::{final_tally, score};
use crate::position::{Move, Position};
use crate::rules::Rules;
use crate::search::choose_move;

/// The list of known session commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "depth",
    "genmove",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new",
    "play",
    "quit",
    "score",
    "undo",
    "version",
];

/// Session state.
pub struct Session {
    /// Current position
    pos: Position,
    /// Earlier positions, most recent last
    history: Vec<Position>,
    rules: Rules,
    /// Search depth for `genmove`
    depth: i32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(Rules::default(), AI_DEPTH)
    }

    pub fn with_config(rules: Rules, depth: i32) -> Self {
        Self {
            pos: Position::new(),
            history: Vec::new(),
            rules,
            depth,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        self.run_io(stdin.lock(), io::stdout())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_io<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            writeln!(output, "{prefix} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" => {
                self.pos = Position::new();
                self.history.clear();
                (true, String::new())
            }

            "board" => (true, format!("\n{}", self.pos.board)),

            "moves" => {
                let moves: Vec<String> = self.pos.legal_moves().iter().map(Move::to_string).collect();
                (true, moves.join(" "))
            }

            "play" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(mv) = arg.parse::<Move>() else {
                    return (false, format!("invalid hollow: {arg}"));
                };
                match self.pos.play(&self.rules, mv) {
                    Ok(next) => {
                        self.advance(next);
                        (true, self.pos.to_move.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if self.pos.is_terminal() {
                    return (false, "game over".to_string());
                }
                let Some(mv) = choose_move(&self.rules, &self.pos.board, self.pos.to_move, self.depth) else {
                    return (false, "no legal move".to_string());
                };
                match self.pos.play(&self.rules, mv) {
                    Ok(next) => {
                        self.advance(next);
                        (true, mv.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "undo" => match self.history.pop() {
                Some(prev) => {
                    self.pos = prev;
                    (true, String::new())
                }
                None => (false, "nothing to undo".to_string()),
            },

            "depth" => {
                let Some(arg) = args.first() else {
                    return (true, self.depth.to_string());
                };
                match arg.parse::<i32>() {
                    Ok(depth) if depth >= 0 => {
                        self.depth = depth;
                        (true, String::new())
                    }
                    _ => (false, format!("invalid depth: {arg}")),
                }
            }

            "score" => {
                let [first, second] = final_tally(&self.pos.board);
                let diff = score(&self.pos.board, Side::First);
                (true, format!("{diff} ({first}-{second})"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn advance(&mut self, next: Position) {
        self.history.push(self.pos);
        self.pos = next;
    }
}

/// Play an interactive game: `human` types hollow numbers, the engine plays
/// the other side at `depth`. Returns the final position.
///
/// Input that does not parse or names an illegal hollow is reported and the
/// human is asked again.
pub fn play_game<R: BufRead, W: Write>(
    rules: &Rules,
    depth: i32,
    human: Side,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Position> {
    let mut pos = Position::new();
    write!(output, "{}", pos.board)?;

    while !pos.is_terminal() {
        writeln!(output, "It's player {}'s turn", pos.to_move)?;

        let mv = if pos.to_move == human {
            match read_move(&mut input, &mut output)? {
                Some(mv) => mv,
                None => continue,
            }
        } else {
            let mv = choose_move(rules, &pos.board, pos.to_move, depth)
                .context("engine found no move on a live position")?;
            writeln!(output, "AI move: {mv}")?;
            mv
        };

        match pos.play(rules, mv) {
            Ok(next) => {
                info!(side = %pos.to_move, mv, "move played");
                pos = next;
                write!(output, "{}", pos.board)?;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    let [first, second] = final_tally(&pos.board);
    writeln!(output, "Game over!")?;
    writeln!(output, "Player one:  {first}")?;
    writeln!(output, "Player two:  {second}")?;
    output.flush()?;
    Ok(pos)
}

/// Prompt for one move. `Ok(None)` means the line did not parse.
fn read_move<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Option<Move>> {
    write!(output, "Move (0-5): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read move")? == 0 {
        bail!("input closed before the game finished");
    }
    match line.trim().parse::<Move>() {
        Ok(mv) => Ok(Some(mv)),
        Err(_) => {
            writeln!(output, "Not a hollow number: {:?}", line.trim())?;
            Ok(None)
        }
    }
}
