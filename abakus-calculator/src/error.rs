use err_derive::Error;
use std::io;

/// An error of the calculator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The terminal or the config file could not be read or written.
    #[error(display = "{}", 0)]
    Io(#[error(from)] io::Error),

    /// The config file is not valid.
    #[error(display = "invalid config file: {}", 0)]
    Config(#[error(from)] toml::de::Error),
}
