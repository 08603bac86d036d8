//! Everything the calculator prints.
//!
//! Each function returns the (possibly colored) text of one block of output.

use abakus::{
    style::{bold, paint, rule, Tone},
    History, Operation, Outcome, Record, Summary,
};
use std::fmt::Write;

/// Prompt for the left operand.
pub const FIRST_NUMBER_PROMPT: &str = "Enter first number: ";
/// Prompt for the operation.
pub const OPERATION_PROMPT: &str = "Choose operation (1-8): ";
/// Prompt for the right operand.
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";
/// Prompt after a calculation.
pub const CONTINUE_PROMPT: &str = "Press Enter to continue, 'h' for history, or 'q' to quit...";

const FEATURES: [&str; 9] = [
    "Basic arithmetic operations (+, -, *, /, %, **)",
    "Input validation and error handling",
    "Division by zero protection",
    "Clean, color-coded interface",
    "Easy exit with 'q' command",
    "Professional code structure",
    "Typed errors and documentation",
    "Calculation history tracking",
    "Session statistics and summary",
];

/// Format a number the way the calculator shows operands and results.
///
/// Digits are the shortest representation that round-trips. Integral values keep
/// one decimal place (`10.0`). Magnitudes from `1e16` up and below `1e-4` use
/// scientific notation with a signed, two-digit exponent (`1e+16`, `2.5e-05`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && (exponent < -4 || exponent >= 16) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// The banner at the top of the screen.
#[must_use]
pub fn header() -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        bold(Tone::Header, "=".repeat(50)),
        bold(Tone::Info, "Enhanced Simple Command-Line Calculator"),
        paint(Tone::Title, "Basic Arithmetic Operations with History"),
        rule(50),
    )
}

const fn icon(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "➕",
        Operation::Subtract => "➖",
        Operation::Multiply => "✖️ ",
        Operation::Divide => "➗",
        Operation::Modulo => "📊",
        Operation::Power => "💪",
    }
}

/// The operation menu.
#[must_use]
pub fn operations() -> String {
    let mut text = bold(Tone::Success, "Available Operations:");
    for operation in &Operation::ALL {
        let _ = write!(
            text,
            "\n  {}. {} {} ({})",
            operation.menu_code(),
            icon(*operation),
            operation.name(),
            operation.symbol()
        );
    }
    text.push_str("\n  7. 📋 View History (h)");
    text.push_str("\n  8. 🔢 Exit (q)\n");
    text
}

/// The feature list.
#[must_use]
pub fn features() -> String {
    let mut text = bold(Tone::Header, "Calculator Features:");
    for feature in &FEATURES {
        let _ = write!(text, "\n  ✅ {}", feature);
    }
    text.push('\n');
    text
}

/// An error message for invalid input.
pub fn error(err: &abakus::Error) -> String {
    paint(Tone::Failure, err)
}

fn equation(record: &Record) -> String {
    format!(
        "{} {} {}",
        number(record.lhs),
        record.operation,
        number(record.rhs)
    )
}

fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Value(value) => number(*value),
        Outcome::Failure(message) => message.clone(),
    }
}

/// The result of a single calculation.
#[must_use]
pub fn result(record: &Record) -> String {
    let body = match &record.outcome {
        Outcome::Value(value) => format!(
            "{}\n{}",
            bold(Tone::Success, "Calculation Result:"),
            paint(
                Tone::Info,
                format!("{} = {}", equation(record), number(*value))
            ),
        ),
        Outcome::Failure(message) => format!(
            "{}\n{}",
            bold(Tone::Failure, "Calculation Error:"),
            paint(Tone::Failure, message),
        ),
    };
    format!("\n{}\n{}\n{}\n", rule(40), body, rule(40))
}

/// The calculation history, one numbered row per record.
#[must_use]
pub fn history(history: &History) -> String {
    if history.is_empty() {
        return format!("{}\n", paint(Tone::Notice, "No calculations in history yet."));
    }

    let mut text = format!(
        "\n{}\n{}\n{}",
        bold(Tone::Header, "=".repeat(60)),
        bold(Tone::Title, "📋 CALCULATION HISTORY"),
        rule(60),
    );
    for (i, record) in history.iter().enumerate() {
        let tone = if record.is_success() {
            Tone::Success
        } else {
            Tone::Failure
        };
        let row = format!(
            "{:2}. [{}] {} = {}",
            i + 1,
            record.formatted_timestamp(),
            equation(record),
            outcome(&record.outcome)
        );
        let _ = write!(text, "\n{}", paint(tone, row));
    }
    let _ = write!(
        text,
        "\n{}\n{}\n",
        rule(60),
        paint(Tone::Info, format!("Total calculations: {}", history.len()))
    );
    text
}

/// The statistics shown at the end of a session.
#[must_use]
pub fn summary(summary: &Summary) -> String {
    if summary.is_empty() {
        return paint(Tone::Notice, "No calculations performed in this session.");
    }

    let mut text = format!(
        "\n{}\n{}\n{}\n{}\n{}\n{}",
        bold(Tone::Header, "=".repeat(50)),
        bold(Tone::Title, "📊 SESSION SUMMARY"),
        rule(50),
        paint(Tone::Info, format!("Total calculations: {}", summary.total)),
        paint(Tone::Success, format!("Successful: {}", summary.successful)),
        paint(Tone::Failure, format!("Failed: {}", summary.failed)),
    );
    if let Some(operation) = summary.most_used {
        let _ = write!(
            text,
            "\n{}",
            paint(Tone::Notice, format!("Most used operation: {}", operation))
        );
    }
    let _ = write!(text, "\n{}\n", rule(50));
    text
}

/// The last words of a session.
#[must_use]
pub fn farewell() -> String {
    format!(
        "\n{}",
        paint(Tone::Success, "Thank you for using the Enhanced Calculator!")
    )
}
