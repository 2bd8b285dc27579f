//! Terminal
//!
//! Raw keystroke acquisition and the scoped raw-mode guard.

use std::io;
use std::ops::{Deref, DerefMut};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// A single keystroke, case preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Escape,
    /// Arrows, function keys and anything else without a character
    Other,
}

impl Keystroke {
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// Ctrl-C cancels like Esc; raw mode delivers it as a key, not SIGINT.
/// Other Ctrl/Alt chords are not symbols.
impl From<KeyEvent> for Keystroke {
    fn from(key: KeyEvent) -> Self {
        let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Self::Escape,
            (KeyCode::Char('c' | 'C'), m) if m.contains(KeyModifiers::CONTROL) => Self::Escape,
            (KeyCode::Char(_), m) if m.intersects(chord) => Self::Other,
            (KeyCode::Char(c), _) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// Terminal that can switch into raw mode and deliver single keystrokes
pub trait RawTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()>;
    fn leave_raw_mode(&mut self) -> io::Result<()>;
    /// Block until one keystroke arrives
    fn read_key(&mut self) -> io::Result<Keystroke>;
}

/// Holds a terminal in raw mode until finished or dropped.
///
/// Raw mode is left exactly once, whichever comes first.
pub struct RawMode<'a, T: RawTerminal + ?Sized> {
    terminal: &'a mut T,
    active: bool,
}

impl<'a, T: RawTerminal + ?Sized> RawMode<'a, T> {
    pub fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enter_raw_mode()?;
        Ok(Self { terminal, active: true })
    }

    /// Leave raw mode, reporting failure instead of swallowing it
    pub fn finish(mut self) -> io::Result<()> {
        self.active = false;
        self.terminal.leave_raw_mode()
    }
}

impl<T: RawTerminal + ?Sized> Deref for RawMode<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.terminal
    }
}

impl<T: RawTerminal + ?Sized> DerefMut for RawMode<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.terminal
    }
}

impl<T: RawTerminal + ?Sized> Drop for RawMode<'_, T> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = self.terminal.leave_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode");
        }
    }
}

/// Controlling terminal via crossterm
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl RawTerminal for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn read_key(&mut self) -> io::Result<Keystroke> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(Keystroke::from(key));
            }
        }
    }
}
