#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! **Hallo** - several versions of the classic name-greeting script.

mod error;
pub mod greeting;
pub mod script;

pub use error::Error;
pub use greeting::{normalize_name, Greeting};
pub use script::{run, Variant};
