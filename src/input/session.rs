//! Input Session
//!
//! Reads one upper-case keystroke (shorthand) or two lower-case keystrokes
//! (full form) in raw mode and translates them into a count. Escape on
//! either read cancels.

use tracing::debug;

use super::terminal::{Keystroke, RawMode, RawTerminal};
use super::SessionResult;
use crate::motion::{Direction, Movement};
use crate::translate::{translate, Alphabet};

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Resolved(Movement),
    Canceled,
    Untranslatable,
    PreconditionFailed,
    /// Terminal I/O failed mid-session
    Faulted(String),
}

impl Outcome {
    pub fn movement(&self) -> Option<Movement> {
        match self {
            Self::Resolved(movement) => Some(*movement),
            _ => None,
        }
    }
}

/// One-shot keystroke collector for a requested direction
#[derive(Debug, Clone, Copy)]
pub struct InputSession<'a> {
    alphabet: &'a Alphabet,
    direction: Direction,
}

impl<'a> InputSession<'a> {
    pub fn new(alphabet: &'a Alphabet, direction: Direction) -> Self {
        Self { alphabet, direction }
    }

    /// Collect and translate a code. The returned movement carries the
    /// requested direction unresolved.
    pub fn collect<T: RawTerminal + ?Sized>(&self, terminal: &mut T) -> SessionResult<Outcome> {
        let mut raw = RawMode::enter(terminal)?;
        let keys = read_code(&mut *raw);
        let left = raw.finish();

        let keys = keys?;
        left?;

        let Some(keys) = keys else {
            debug!("session canceled");
            return Ok(Outcome::Canceled);
        };

        let Some(code) = keys.iter().map(Keystroke::as_char).collect::<Option<String>>() else {
            debug!(?keys, "non-character keystroke");
            return Ok(Outcome::Untranslatable);
        };

        match translate(self.alphabet, &code) {
            Ok(count) => {
                debug!(%code, count, direction = %self.direction, "code translated");
                Ok(Outcome::Resolved(Movement::new(self.direction, count)))
            }
            Err(e) => {
                debug!(%code, error = %e, "code untranslatable");
                Ok(Outcome::Untranslatable)
            }
        }
    }
}

/// `None` when escape is pressed
fn read_code<T: RawTerminal + ?Sized>(terminal: &mut T) -> std::io::Result<Option<Vec<Keystroke>>> {
    let first = terminal.read_key()?;
    if first == Keystroke::Escape {
        return Ok(None);
    }
    if first.as_char().is_some_and(|c| c.is_uppercase()) {
        return Ok(Some(vec![first]));
    }

    let second = terminal.read_key()?;
    if second == Keystroke::Escape {
        return Ok(None);
    }
    Ok(Some(vec![first, second]))
}
