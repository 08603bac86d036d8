//! The seam between the programs and the user's terminal.

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Stdout, Write};

/// Line-based terminal interaction.
pub trait Terminal {
    /// Show `prompt` and read one line of input, without the line terminator.
    ///
    /// Returns `None` at the end of the input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen.
    fn clear_screen(&mut self) -> io::Result<()>;
}

/// How a program talks to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `dialoguer` prompts (`Prompter`).
    Interactive,
    /// Plain lines on stdin and stdout (`LineTerminal`).
    Plain,
}

impl Mode {
    /// Interactive prompts need a terminal on both ends.
    #[must_use]
    pub const fn select(force_plain: bool, stdin_is_terminal: bool, stdout_is_terminal: bool) -> Self {
        if force_plain || !stdin_is_terminal || !stdout_is_terminal {
            Self::Plain
        } else {
            Self::Interactive
        }
    }

    /// Select the mode for the standard streams of this process.
    #[must_use]
    pub fn detect(force_plain: bool) -> Self {
        let mode = Self::select(
            force_plain,
            io::stdin().is_terminal(),
            io::stdout().is_terminal(),
        );
        log::debug!("Selected {:?} terminal mode.", mode);
        mode
    }
}

/// Interactive prompts using `dialoguer`.
///
/// `dialoguer` cannot tell the end of a redirected input from an empty line,
/// so reading gives `None` whenever stdin is not a terminal.
pub struct Prompter {
    theme: ColorfulTheme,
    term: Term,
}

impl Prompter {
    /// Create a prompter writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return Ok(None);
        }
        // the theme renders its own separator after the prompt
        let prompt = prompt.trim_end().trim_end_matches(':');
        let line = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact()?;
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.term.clear_screen()
    }
}

/// Plain line-by-line interaction over any reader and writer.
///
/// Used when the input is piped. Clearing the screen does nothing.
pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl LineTerminal<BufReader<Stdin>, Stdout> {
    /// A line terminal on stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> LineTerminal<R, W> {
    /// Create a line terminal.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Take the writer back.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }
}
