//! Translate Module
//!
//! Home-row keystroke codes to row counts.

pub mod alphabet;
pub mod code;

use thiserror::Error;

/// Alphabet validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet must have 10 symbols, got {0}")]
    WrongLength(usize),

    #[error("Duplicate symbol in alphabet: {0:?}")]
    Duplicate(char),

    #[error("Symbol has no single-character case mapping: {0:?}")]
    Uncaseable(char),

    #[error("Control character in alphabet: {0:?}")]
    Control(char),
}

/// Translation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Code must be 1 or 2 symbols, got {0}")]
    Length(usize),

    #[error("Untranslatable symbol: {0:?}")]
    Unknown(char),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

// Re-exports
pub use alphabet::{Alphabet, HOMEROW};
pub use code::{translate, translate_default};
