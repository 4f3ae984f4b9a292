use ::thiserror::Error;

/// Message carried by [`DrillError::InvalidInput`] when the console
/// validator rejects a line and the caller supplied nothing better.
pub const INVALID_CHOICE_MESSAGE: &str =
    "Недопустимое значение, введите 1 или 2.";

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("attempt to divide by zero")]
    DivideByZero,

    #[error("value to parse was null")]
    NullArgument,

    #[error("index {index} is out of range for an array of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Format(String),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrillError {
    /// Invalid-input error with the default message.
    pub fn invalid_input() -> Self {
        Self::InvalidInput(INVALID_CHOICE_MESSAGE.to_string())
    }
}
