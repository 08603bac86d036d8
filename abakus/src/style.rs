//! Terminal colors.
//!
//! Whether escape codes are emitted at all is decided globally by
//! `console::set_colors_enabled`.

use console::Style;
use std::fmt::Display;

/// The role of a piece of output, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Banners and rules.
    Header,
    /// Section titles.
    Title,
    /// Prompts and neutral information.
    Info,
    /// Successful results.
    Success,
    /// Hints and notices.
    Notice,
    /// Errors.
    Failure,
}

impl Tone {
    /// The `console` style of this tone.
    #[must_use]
    pub fn style(self) -> Style {
        let style = Style::new();
        match self {
            Self::Header => style.magenta(),
            Self::Title => style.blue(),
            Self::Info => style.cyan(),
            Self::Success => style.green(),
            Self::Notice => style.yellow(),
            Self::Failure => style.red(),
        }
    }
}

/// Paint `text` in the color of `tone`.
pub fn paint(tone: Tone, text: impl Display) -> String {
    tone.style().apply_to(text).to_string()
}

/// Paint `text` in the color of `tone`, in bold.
pub fn bold(tone: Tone, text: impl Display) -> String {
    tone.style().bold().apply_to(text).to_string()
}

/// A horizontal rule of `width` `=` characters.
#[must_use]
pub fn rule(width: usize) -> String {
    paint(Tone::Header, "=".repeat(width))
}
