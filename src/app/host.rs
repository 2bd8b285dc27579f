//! Host collaborators
//!
//! What the embedding file browser provides.

use crate::motion::{Direction, Movement, Numbering};

/// Notification styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    /// Error styling, usually red
    Attention,
}

pub trait Host {
    /// Current line-number display mode
    fn numbering(&self) -> Numbering;
    /// Move the selection. `Up`/`Down` are relative, `To` is an absolute row.
    fn apply(&mut self, movement: Movement);
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Start-up key binding registration
pub trait KeyBindingRegistry {
    fn register_key_binding(&mut self, key: char, direction: Direction);
}
