//! Scripted terminal for tests

use std::collections::VecDeque;
use std::io;

use super::terminal::{Keystroke, RawTerminal};

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Keystroke>,
    fail_enter: bool,
    fail_read: bool,
    pub entered: usize,
    pub left: usize,
    pub reads: usize,
    /// Raw mode state at each read
    pub raw_during_reads: Vec<bool>,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Keystroke>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(Keystroke::Char))
    }

    pub fn failing_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    pub fn failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    fn is_raw(&self) -> bool {
        self.entered > self.left
    }
}

impl RawTerminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        self.entered += 1;
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        self.left += 1;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Keystroke> {
        self.reads += 1;
        self.raw_during_reads.push(self.is_raw());
        if self.fail_read {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        }
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
