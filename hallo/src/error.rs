use err_derive::Error;
use std::io;

/// An error of the greeting scripts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// There is no script version with that name.
    #[error(display = "unknown variant {:?} (expected classic, personal or enhanced)", 0)]
    UnknownVariant(String),

    /// Reading from or writing to the terminal failed.
    #[error(display = "{}", 0)]
    Io(#[error(from)] io::Error),
}
