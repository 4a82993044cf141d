//! Unified error types for the menu composer.
//!
//! [`ValidationError`] is what a failed commit reports back to the user; its
//! `Display` text is the message shown on screen. [`Error`] covers everything
//! that can go wrong around the core (configuration, terminal I/O, free text
//! that does not name a course).

use thiserror::Error;

/// Reasons a draft cannot be committed. Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The dish name is empty once surrounding whitespace is removed.
    #[error("Please enter a dish name.")]
    EmptyName,

    /// The price text is not a finite, non-negative decimal number.
    #[error("Please enter a valid non-negative price.")]
    InvalidPrice,
}

/// Errors raised outside the validation core.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Reading commands or writing the screen failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Free text that is not one of the five course names
    #[error("Unknown course '{name}'. Expected one of: Starter, Main, Dessert, Side, Drink")]
    UnknownCourse {
        /// The rejected input
        name: String,
    },

    /// A terminal command that does not exist
    #[error("Unknown command '{command}'. Type 'help' for the list of commands")]
    UnknownCommand {
        /// The first word of the rejected line
        command: String,
    },

    /// A list position that is not a positive whole number
    #[error("'{text}' is not a valid item number")]
    InvalidPosition {
        /// The rejected input
        text: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
