//! Interactive game loop.
//!
//! Reads one command per line, applies it to a [`GameController`] and
//! writes a fresh frame after every command. The controller is queried
//! again each time; nothing about the frame is cached here.

use crate::command::{Command, CommandError, HELP};
use crate::config::DisplayConfig;
use crate::frame::{OutputFormat, render_json, render_text};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use timetravel_tictactoe::GameController;
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// One game played over a line-oriented input and output.
#[derive(Debug)]
pub struct Session<W: Write> {
    game: GameController,
    display: DisplayConfig,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session at the empty board.
    pub fn new(display: DisplayConfig, format: OutputFormat, out: W) -> Self {
        Self {
            game: GameController::new(),
            display,
            format,
            out,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until `quit` or end of input.
    #[instrument(skip_all, fields(format = ?self.format))]
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Session started");
        if self.format == OutputFormat::Text {
            writeln!(self.out, "Type `help` for commands.\n")?;
        }
        self.write_frame()?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(err) => {
                    debug!(%err, %line, "Unparsable command");
                    self.write_notice(&err.to_string())?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => self.write_notice(&err.to_string())?,
            }
        }

        info!(moves = self.game.history().len() - 1, "Session finished");
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Applies one command and writes the resulting output.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Play(pos) => {
                if let Err(reason) = self.game.check_move(pos) {
                    self.write_notice(&format!("Ignored: {}", reason))?;
                }
                self.game.attempt_move(pos);
            }
            Command::Jump(step) => {
                let len = self.game.history().len();
                if step >= len {
                    warn!(step, len, "Jump past end of history");
                    return Err(CommandError::StepOutOfRange { step, len }.into());
                }
                self.game.jump_to(step);
            }
            Command::Toggle => self.game.toggle_order(),
            Command::Board => {}
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        self.write_frame()?;
        Ok(Flow::Continue)
    }

    fn write_frame(&mut self) -> Result<()> {
        let data = self.game.render();
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", render_text(&data, &self.display))?,
            OutputFormat::Json => {
                let json = render_json(&data).context("Failed to encode frame")?;
                writeln!(self.out, "{}", json)?;
            }
        }
        Ok(())
    }

    fn write_notice(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "! {}", message)?,
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::json!({ "notice": message }))?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::Position;

    fn session() -> Session<Vec<u8>> {
        Session::new(DisplayConfig::default(), OutputFormat::Text, Vec::new())
    }

    #[test]
    fn test_play_then_quit() {
        let mut session = session();
        assert_eq!(
            session.execute(Command::Play(Position::Center)).unwrap(),
            Flow::Continue
        );
        assert_eq!(session.execute(Command::Quit).unwrap(), Flow::Quit);
        assert_eq!(session.game().cursor(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_reported_not_forwarded() {
        let mut session = session();
        let err = session.execute(Command::Jump(3)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CommandError>(),
            Some(&CommandError::StepOutOfRange { step: 3, len: 1 })
        );
        assert_eq!(session.game().cursor(), 0);
    }

    #[test]
    fn test_occupied_square_prints_notice() {
        let mut session = session();
        session.execute(Command::Play(Position::Center)).unwrap();
        session.execute(Command::Play(Position::Center)).unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("! Ignored: Square Center is already occupied"));
    }
}
