//! Personalized messages.

use abakus::style::Tone;
use lazy_static::lazy_static;
use std::collections::HashMap;

struct SpecialUser {
    welcome: &'static str,
    greeting: &'static str,
    tone: Tone,
}

lazy_static! {
    static ref SPECIAL_USERS: HashMap<&'static str, SpecialUser> = {
        let mut users = HashMap::new();
        users.insert(
            "Musa",
            SpecialUser {
                welcome: "Hey, it's the awesome AI Director! Welcome back!",
                greeting: "Hello, Awesome AI Director! Your presence makes this program special!",
                tone: Tone::Success,
            },
        );
        users.insert(
            "John",
            SpecialUser {
                welcome: "Welcome back, John! Great to see you again!",
                greeting: "Hello, John! You're a valued member of our community!",
                tone: Tone::Title,
            },
        );
        users.insert(
            "Sarah",
            SpecialUser {
                welcome: "Sarah! The coding wizard is back!",
                greeting: "Hello, Sarah! Your expertise lights up our program!",
                tone: Tone::Notice,
            },
        );
        users
    };
}

/// Clean up a name as typed by the user.
///
/// Surrounding whitespace is removed and every word is title-cased
/// (`"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`).
/// Returns `None` if nothing is left.
#[must_use]
pub fn normalize_name(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut name = String::with_capacity(input.len());
    let mut word_start = true;
    for c in input.chars() {
        if word_start {
            name.extend(c.to_uppercase());
        } else {
            name.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }
    Some(name)
}

/// The messages for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Lines shown right after the name was entered, with their tone.
    pub welcome: Vec<(Tone, String)>,
    /// The greeting shown after the session information.
    pub greeting: (Tone, String),
    /// Whether the user is one of the specially recognized users.
    pub special: bool,
}

impl Greeting {
    /// The messages for `name`, which should already be normalized.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match SPECIAL_USERS.get(name) {
            Some(user) => Self {
                welcome: vec![(user.tone, user.welcome.to_string())],
                greeting: (user.tone, user.greeting.to_string()),
                special: true,
            },
            None => Self {
                welcome: vec![
                    (Tone::Info, format!("Welcome {} to Rust Programming!", name)),
                    (Tone::Info, "This is an enhanced welcome message script.".to_string()),
                    (Tone::Success, format!("Hello {}, we're glad to have you here!", name)),
                ],
                greeting: (Tone::Success, format!("Hello, {}! Welcome to the program!", name)),
                special: false,
            },
        }
    }
}
