use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use sapper_core::Grid;
use web_time::Instant;

use crate::command::{Command, parse_command};
use crate::render::BoardView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Active)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionReport {
    pub state: SessionState,
    pub elapsed: Duration,
}

/// Interactive game loop: prints the board, reads one command per line and
/// applies it to the grid until the game is won, lost, or abandoned.
pub struct Session<R, W> {
    grid: Grid,
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(grid: Grid, input: R, output: W) -> Self {
        Self {
            grid,
            input,
            output,
            state: SessionState::Active,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run(&mut self) -> Result<SessionReport> {
        let started = Instant::now();
        let mut line = String::new();

        while !self.state.is_finished() {
            self.prompt()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Could not read command")?;
            if read == 0 {
                log::info!("Input closed, ending game");
                self.finish(SessionState::Quit, "Quit game.")?;
                break;
            }

            self.handle_line(&line)?;
        }

        let elapsed = started.elapsed();
        writeln!(
            self.output,
            "Game duration: {:.2} seconds",
            elapsed.as_secs_f64()
        )?;
        self.output.flush()?;

        Ok(SessionReport {
            state: self.state,
            elapsed,
        })
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.output, "{}", BoardView::new(&self.grid, false))?;
        writeln!(
            self.output,
            "Coordinates are a 1-based index. (1, 1) is the top-left corner."
        )?;
        writeln!(
            self.output,
            "Enter your move in the format 'cmd x y' (cmd: reveal, flag), or type 'quit' to exit:"
        )?;
        self.output.flush().context("Could not write prompt")
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        let command = match parse_command(line, self.grid.size()) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(err) => {
                log::debug!("Rejected input {:?}: {:?}", line.trim(), err);
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };

        log::debug!("command: {:?}", command);
        match command {
            Command::Reveal(coords) => {
                if self.grid.reveal(coords).hit_hazard() {
                    self.finish(SessionState::Lost, "You hit a hazard! Game over!")?;
                } else if self.grid.check_win() {
                    self.finish(SessionState::Won, "Congratulations, you won!")?;
                }
            }
            Command::Flag(coords) => {
                self.grid.toggle_flag(coords);
            }
            Command::Quit => self.finish(SessionState::Quit, "Quit game.")?,
        }
        Ok(())
    }

    fn finish(&mut self, state: SessionState, message: &str) -> Result<()> {
        self.state = state;
        write!(self.output, "{}", BoardView::new(&self.grid, true))?;
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
