//! Parsing of user input.
//!
//! Every parser first trims the input and ignores case, so `" Q "` quits just like `"q"`.

use crate::{Error, Operation, Result};

/// The sentinel that ends a session at any prompt.
pub const QUIT: &str = "q";

/// The sentinel that shows the calculation history.
pub const HISTORY: &str = "h";

/// A parsed number prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    /// A number was entered.
    Number(f64),
    /// The quit sentinel was entered.
    Quit,
}

/// A parsed operation menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// One of the six operations (`1` to `6`).
    Operation(Operation),
    /// Show the history (`h` or `7`).
    History,
    /// End the session (`q` or `8`).
    Quit,
}

/// What to do after a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueChoice {
    /// Continue with the next calculation.
    Next,
    /// Show the history, then continue.
    History,
    /// End the session.
    Quit,
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

const fn is_formatting(c: char) -> bool {
    matches!(c, ',' | '_' | ' ' | '\t')
}

/// Parse a floating-point number.
///
/// Thousands separators (`,` and `_`) and inner blanks are ignored, so
/// `"1,234.5"` parses as `1234.5`.
pub fn parse_number(input: &str) -> Result<NumberInput> {
    let input = normalize(input);
    if input == QUIT {
        return Ok(NumberInput::Quit);
    }
    let literal: String = input.chars().filter(|&c| !is_formatting(c)).collect();
    literal
        .parse()
        .map(NumberInput::Number)
        .map_err(|_| Error::InvalidNumber)
}

/// Parse a choice of the operation menu.
pub fn parse_choice(input: &str) -> Result<MenuChoice> {
    match normalize(input).as_str() {
        QUIT | "8" => Ok(MenuChoice::Quit),
        HISTORY | "7" => Ok(MenuChoice::History),
        code => Operation::from_menu_code(code)
            .map(MenuChoice::Operation)
            .ok_or(Error::InvalidChoice),
    }
}

/// Parse the answer to the "press enter to continue" prompt.
///
/// Anything but the two sentinels continues.
#[must_use]
pub fn parse_continue(input: &str) -> ContinueChoice {
    match normalize(input).as_str() {
        QUIT => ContinueChoice::Quit,
        HISTORY => ContinueChoice::History,
        _ => ContinueChoice::Next,
    }
}
