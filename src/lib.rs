//! Vertigo - home-row counts for vertical movement
//!
//! One upper-case home-row key is a count of 1-10, two lower-case keys are
//! a two-digit count. A host file browser hands `Vertigo` its terminal and
//! gets back a relative or absolute movement.

pub mod app;
pub mod input;
pub mod motion;
pub mod translate;

pub use app::{ConfigError, Host, KeyBindingRegistry, Severity, Vertigo, VertigoConfig};
pub use input::{CrosstermTerminal, InputSession, Keystroke, Outcome, RawMode, RawTerminal, SessionError};
pub use motion::{Direction, MotionError, Movement, Numbering};
pub use translate::{translate, Alphabet, AlphabetError, TranslateError};
