//! Line commands typed by the player.

use derive_more::{Display, Error};
use std::str::FromStr;
use timetravel_tictactoe::Position;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell for the next player.
    Play(Position),
    /// Move the cursor to a history step.
    Jump(usize),
    /// Flip the move-list order.
    Toggle,
    /// Redraw the current frame.
    Board,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Why an input line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// The first word is not a known command.
    #[display("Unknown command {_0:?}, type `help` for a list")]
    Unknown(#[error(not(source))] String),
    /// A command needs an argument that was not given.
    #[display("`{_0}` needs an argument")]
    MissingArgument(#[error(not(source))] &'static str),
    /// The cell is neither 0-8 nor a position label.
    #[display("No such cell {_0:?} (use 0-8 or a label like `top-left`)")]
    UnknownCell(#[error(not(source))] String),
    /// The step is not a number.
    #[display("Step {_0:?} is not a number")]
    InvalidStep(#[error(not(source))] String),
    /// The step is past the end of the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  <0-8>              mark that cell (row-major, 0 is top-left)
  play <cell|label>  mark a cell by index or label, e.g. `play center`
  jump <step>        go back (or forward) to a history step
  toggle             reverse the move list
  board              redraw
  help               this text
  quit               leave (also `exit` or end of input)";

fn parse_cell(arg: &str) -> Result<Position, CommandError> {
    Position::from_label_or_number(arg).ok_or_else(|| CommandError::UnknownCell(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_lowercase();

        match word.as_str() {
            "" => Err(CommandError::Empty),
            "play" | "p" if rest.is_empty() => Err(CommandError::MissingArgument("play")),
            "play" | "p" => parse_cell(rest).map(Command::Play),
            "jump" | "j" if rest.is_empty() => Err(CommandError::MissingArgument("jump")),
            "jump" | "j" => rest
                .parse()
                .map(Command::Jump)
                .map_err(|_| CommandError::InvalidStep(rest.to_string())),
            "toggle" | "t" => Ok(Command::Toggle),
            "board" | "b" => Ok(Command::Board),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ if word.chars().all(|c| c.is_ascii_digit()) && rest.is_empty() => {
                parse_cell(&word).map(Command::Play)
            }
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}
