use err_derive::Error;

/// An error of the `abakus` crate.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a number (and not the quit sentinel).
    #[error(display = "Error: Please enter a valid number or 'q' to quit.")]
    InvalidNumber,

    /// The input is not one of the menu choices.
    #[error(display = "Error: Please enter a number between 1-8, 'h' for history, or 'q' to quit.")]
    InvalidChoice,

    /// The input does not name an `Operation`.
    #[error(display = "Error: Unknown operation '{}'", 0)]
    UnknownOperation(String),

    /// Tried to divide by zero.
    #[error(display = "Error: Division by zero is not allowed!")]
    DivisionByZero,

    /// Tried to compute a remainder of a division by zero.
    #[error(display = "Error: Modulo by zero is not allowed!")]
    ModuloByZero,
}
