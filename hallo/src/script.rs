//! The greeting scripts.

use crate::{normalize_name, Error, Greeting};
use abakus::{
    style::{bold, paint, rule, Tone},
    terminal::Terminal,
};
use chrono::Local;
use std::{fmt, io, str::FromStr};

/// The prompt for the user's name.
pub const NAME_PROMPT: &str = "Please enter your name: ";

const FEATURES: [&str; 7] = [
    "Input validation and error handling",
    "Conditional logic and personalization",
    "Color-coded output for better UX",
    "Multiple special user recognition",
    "Timestamp and session tracking",
    "Professional code structure",
    "Typed errors and documentation",
];

/// A version of the greeting script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Print "Hello, World!".
    Classic,
    /// Ask for a name and greet it.
    Personal,
    /// The full experience: personalized messages, session information and features.
    Enhanced,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Enhanced
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Classic => "classic",
            Self::Personal => "personal",
            Self::Enhanced => "enhanced",
        })
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "personal" => Ok(Self::Personal),
            "enhanced" => Ok(Self::Enhanced),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

/// Run the given version of the script.
pub fn run(terminal: &mut impl Terminal, variant: Variant) -> io::Result<()> {
    log::debug!("Running the {} greeting.", variant);
    match variant {
        Variant::Classic => terminal.write_line("Hello, World!"),
        Variant::Personal => personal(terminal),
        Variant::Enhanced => enhanced(terminal),
    }
}

/// Prompt until a non-empty name is entered. `None` at the end of the input.
fn ask_name(terminal: &mut impl Terminal) -> io::Result<Option<String>> {
    loop {
        let line = match terminal.read_line(NAME_PROMPT)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match normalize_name(&line) {
            Some(name) => return Ok(Some(name)),
            None => terminal.write_line(&paint(
                Tone::Failure,
                "Error: Name cannot be empty. Please try again.",
            ))?,
        }
    }
}

fn personal(terminal: &mut impl Terminal) -> io::Result<()> {
    match ask_name(terminal)? {
        Some(name) => terminal.write_line(&format!("Hello, {}!", name)),
        None => Ok(()),
    }
}

fn enhanced(terminal: &mut impl Terminal) -> io::Result<()> {
    terminal.clear_screen()?;
    terminal.write_line(&bold(Tone::Header, "Enhanced Interactive Hello World"))?;
    terminal.write_line(&format!(
        "{}\n",
        paint(Tone::Info, "Welcome to the AI Native Journey Demo")
    ))?;

    let name = match ask_name(terminal)? {
        Some(name) => name,
        None => {
            return terminal.write_line(&format!(
                "\n{}",
                paint(Tone::Notice, "Program terminated by user.")
            ))
        }
    };
    let greeting = Greeting::for_name(&name);
    log::info!("Greeting {} (special user: {}).", name, greeting.special);

    terminal.write_line("")?;
    for (tone, line) in &greeting.welcome {
        let text = if greeting.special {
            bold(*tone, line)
        } else {
            paint(*tone, line)
        };
        terminal.write_line(&text)?;
    }

    terminal.write_line(&session_info())?;

    let (tone, line) = &greeting.greeting;
    let text = if greeting.special {
        bold(*tone, line)
    } else {
        paint(*tone, line)
    };
    terminal.write_line(&text)?;

    terminal.write_line(&format!("\n{}", bold(Tone::Header, "Script Features:")))?;
    for feature in &FEATURES {
        terminal.write_line(&format!("  ✅ {}", feature))?;
    }

    terminal.write_line(&format!(
        "\n{}",
        paint(Tone::Success, "Thank you for using our enhanced greeting system!")
    ))
}

fn session_info() -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "\n{}\n{}\n{}\n{}\n{}\n{}",
        rule(60),
        paint(Tone::Title, "Session Information:"),
        paint(Tone::Info, format!("Timestamp: {}", now)),
        paint(
            Tone::Info,
            format!("Version: {}", env!("CARGO_PKG_VERSION"))
        ),
        paint(
            Tone::Info,
            "Script: Enhanced Hello World with Personalization"
        ),
        rule(60),
    )
}
