//! Error types for the ATM session.

use crate::state::AtmState;
use thiserror::Error;

/// Result type alias for ATM operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Errors that can occur while driving an ATM session.
///
/// Domain outcomes such as a wrong PIN or a non-positive amount are not
/// errors: they surface as the `Error` state and an empty breakdown.
#[derive(Error, Debug)]
pub enum AtmError {
    /// Failed to read input or write a listener's output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the session received a required value
    #[error("Missing {what}: input ended before it was entered")]
    MissingInput { what: &'static str },

    /// Amount line is not an integer
    #[error("Invalid amount {input:?}: expected a whole number")]
    InvalidAmountInput { input: String },

    /// Unknown splitting strategy name
    #[error("Unknown strategy {name:?}. Expected one of: greedy, chain")]
    UnknownStrategy { name: String },

    /// Command-line flag given without its value
    #[error("Missing value for argument {flag}")]
    MissingArgumentValue { flag: String },

    /// Unrecognized command-line argument
    #[error("Unknown argument {arg:?}. Usage: atm [--strategy <greedy|chain>]")]
    UnknownArgument { arg: String },

    /// Session driver called out of order
    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: &'static str },
}

impl AtmError {
    /// Builds an `InvalidTransition` from the state the session was in.
    pub(crate) fn invalid_transition(from: Option<&AtmState>, to: &'static str) -> Self {
        AtmError::InvalidTransition {
            from: from.map_or_else(|| "no state".to_string(), |s| s.name().to_string()),
            to,
        }
    }
}
