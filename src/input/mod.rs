//! Input Module
//!
//! Raw keystroke collection for home-row counts.

pub mod session;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

// Re-exports
pub use session::{InputSession, Outcome};
pub use terminal::{CrosstermTerminal, Keystroke, RawMode, RawTerminal};
