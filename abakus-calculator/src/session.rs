//! The calculator loop.

use crate::{render, Config, Result};
use abakus::{
    input::{self, ContinueChoice, MenuChoice, NumberInput},
    terminal::Terminal,
    History, Operation,
};
use std::io;

/// One calculator session: a terminal, its settings and the history of calculations.
pub struct Session<T> {
    terminal: T,
    config: Config,
    history: History,
}

impl<T: Terminal> Session<T> {
    /// Create a new session with an empty history.
    pub fn new(terminal: T, config: Config) -> Self {
        Self {
            terminal,
            config,
            history: History::new(),
        }
    }

    /// The calculations performed so far.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The terminal of this session.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// End the session and take back the terminal.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Run calculations until the user quits or the input ends.
    ///
    /// Quitting at any prompt never records a partial calculation.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Calculator session started.");
        self.clear_screen()?;
        self.show(&render::header())?;
        if self.config.show_features {
            self.show(&render::features())?;
        }

        while self.calculate()? {}

        let summary = self.history.summary();
        log::info!(
            "Calculator session finished: {} calculations ({} successful, {} failed).",
            summary.total,
            summary.successful,
            summary.failed
        );
        self.dump_history();
        self.show(&render::summary(&summary))?;
        self.show(&render::farewell())?;
        Ok(())
    }

    /// One round of the loop. Returns whether to keep going.
    fn calculate(&mut self) -> io::Result<bool> {
        self.show(&render::operations())?;

        let lhs = match self.read_number(render::FIRST_NUMBER_PROMPT)? {
            Some(lhs) => lhs,
            None => return Ok(false),
        };
        let operation = match self.read_choice()? {
            Some(operation) => operation,
            None => return Ok(false),
        };
        let operation = match operation {
            MenuChoice::Operation(operation) => operation,
            MenuChoice::History => {
                self.show(&render::history(&self.history))?;
                return Ok(true);
            }
            MenuChoice::Quit => return Ok(false),
        };
        let rhs = match self.read_number(render::SECOND_NUMBER_PROMPT)? {
            Some(rhs) => rhs,
            None => return Ok(false),
        };

        self.evaluate(lhs, operation, rhs)?;

        let choice = self
            .terminal
            .read_line(render::CONTINUE_PROMPT)?
            .map_or(ContinueChoice::Quit, |line| input::parse_continue(&line));
        match choice {
            ContinueChoice::Quit => Ok(false),
            ContinueChoice::History => {
                self.show(&render::history(&self.history))?;
                Ok(true)
            }
            ContinueChoice::Next => {
                self.clear_screen()?;
                self.show(&render::header())?;
                Ok(true)
            }
        }
    }

    fn evaluate(&mut self, lhs: f64, operation: Operation, rhs: f64) -> io::Result<()> {
        let text = render::result(self.history.record(lhs, operation, rhs));
        self.show(&text)
    }

    /// Prompt until a number is entered. `None` means quit.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let line = match self.terminal.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match input::parse_number(&line) {
                Ok(NumberInput::Number(number)) => return Ok(Some(number)),
                Ok(NumberInput::Quit) => return Ok(None),
                Err(err) => {
                    log::trace!("Rejected number input {:?}.", line);
                    self.show(&render::error(&err))?;
                }
            }
        }
    }

    /// Prompt until a valid menu entry is chosen. `None` means the input ended.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            let line = match self.terminal.read_line(render::OPERATION_PROMPT)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match input::parse_choice(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(err) => {
                    log::trace!("Rejected menu choice {:?}.", line);
                    self.show(&render::error(&err))?;
                }
            }
        }
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.terminal.write_line(text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.config.clear_screen {
            self.terminal.clear_screen()?;
        }
        Ok(())
    }

    fn dump_history(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match serde_yaml::to_string(&self.history) {
            Ok(dump) => log::trace!("Session history:\n{}", dump),
            Err(err) => log::warn!("Could not serialize the session history: {}", err),
        }
    }
}
