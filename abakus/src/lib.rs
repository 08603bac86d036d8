#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! **Abakus** - the arithmetic core shared by the command-line calculator and the greeting scripts.
//!
//! ## Overview
//!
//! A calculation takes two `f64` operands and one of six [`Operation`]s.
//! Every attempt, successful or not, ends up as a [`Record`] in the session [`History`],
//! which can be condensed into a [`Summary`] at the end of a session.
//! User input is parsed by the [`input`] module and exchanged through the [`terminal::Terminal`] seam.

mod error;
pub mod history;
pub mod input;
pub mod operation;
pub mod style;
pub mod summary;
pub mod terminal;

pub use error::Error;
pub use history::{History, Outcome, Record};
pub use operation::Operation;
pub use summary::Summary;

/// A `Result` with the error type of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
