//! Motion
//!
//! Requested directions, the host's numbering mode and resolved movements.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("Unknown direction: {0} (expected up, down or to)")]
    UnknownDirection(String),

    #[error("Unknown numbering mode: {0} (expected disabled, absolute or relative)")]
    UnknownNumbering(String),
}

/// Direction the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    To,
}

impl Direction {
    /// Label used in notifications
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::To => "To",
        }
    }

    /// Invocation token
    pub fn token(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::To => "to",
        }
    }
}

impl FromStr for Direction {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "to" => Ok(Self::To),
            _ => Err(MotionError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Host line-number display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    Disabled,
    Absolute,
    Relative,
}

impl FromStr for Numbering {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" | "off" | "disabled" | "none" => Ok(Self::Disabled),
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            _ => Err(MotionError::UnknownNumbering(s.to_string())),
        }
    }
}

/// Direction paired with a row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction: Direction,
    pub count: u8,
}

impl Movement {
    pub fn new(direction: Direction, count: u8) -> Self {
        Self { direction, count }
    }

    pub fn up(count: u8) -> Self {
        Self::new(Direction::Up, count)
    }

    pub fn down(count: u8) -> Self {
        Self::new(Direction::Down, count)
    }

    pub fn to(count: u8) -> Self {
        Self::new(Direction::To, count)
    }

    /// Relative moves only make sense under relative numbering; anything
    /// else becomes an absolute jump to row `count`.
    pub fn resolve(self, numbering: Numbering) -> Self {
        match (self.direction, numbering) {
            (Direction::Up | Direction::Down, Numbering::Relative) => self,
            _ => Self::to(self.count),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction.label(), self.count)
    }
}
