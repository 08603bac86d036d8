#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! The **Enhanced Simple Command-Line Calculator**.
//!
//! A read-evaluate-print loop asking for two numbers and an operation,
//! keeping every calculation in a session history.

pub mod config;
mod error;
pub mod render;
pub mod session;

pub use config::Config;
pub use error::Error;
pub use session::Session;

/// A `Result` with the error type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
