use crate::converter::Notation;
use thiserror::Error;

/// Errors returned by the rejecting converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Input has no usable content
    #[error("{0}")]
    EmptyInput(EmptyInput),

    /// Converted string would not be a valid identifier
    #[error("Cannot use \"{0}\" as a variable name. Variables cannot start with a number in JavaScript and Python.")]
    InvalidIdentifier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyInput {
    #[error("Input cannot be empty.")]
    Empty,

    #[error("Input must contain at least one letter character.")]
    NoLetters,

    #[error("Cannot convert empty string to {0}.")]
    Blank(Notation),

    #[error("String contains only non-letter characters.")]
    NoTokens,
}

impl From<EmptyInput> for CaseError {
    fn from(kind: EmptyInput) -> Self {
        CaseError::EmptyInput(kind)
    }
}

impl CaseError {
    /// Short machine-readable name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::EmptyInput(_) => "empty_input",
            CaseError::InvalidIdentifier(_) => "invalid_identifier",
        }
    }
}
