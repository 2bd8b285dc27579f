//! Alphabet
//!
//! The ordered home-row symbols standing in for the digits 1 through 10.

use std::fmt;
use std::str::FromStr;

use super::AlphabetError;

/// Number of symbols, one per digit 1..=10
pub const DIGITS: usize = 10;

/// Canonical QWERTY home row
pub const HOMEROW: &str = "asdfghjkl;";

/// Validated digit alphabet with both case foldings precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    lower: [char; DIGITS],
    upper: [char; DIGITS],
}

impl Alphabet {
    /// Build an alphabet from exactly ten symbols, distinct in both foldings
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() != DIGITS {
            return Err(AlphabetError::WrongLength(chars.len()));
        }

        let mut folded = Vec::with_capacity(DIGITS);
        for c in chars {
            let (lo, up) = fold(c)?;
            if folded.iter().any(|&(l, u)| l == lo || u == up) {
                return Err(AlphabetError::Duplicate(c));
            }
            folded.push((lo, up));
        }

        Ok(Self::from_folded(&folded))
    }

    fn from_folded(folded: &[(char, char)]) -> Self {
        let mut lower = [' '; DIGITS];
        let mut upper = [' '; DIGITS];
        for (i, &(lo, up)) in folded.iter().take(DIGITS).enumerate() {
            lower[i] = lo;
            upper[i] = up;
        }
        Self { lower, upper }
    }

    /// 1-based digit of an upper-case symbol
    pub fn upper_digit(&self, symbol: char) -> Option<u8> {
        position(&self.upper, symbol)
    }

    /// 1-based digit of a lower-case symbol
    pub fn lower_digit(&self, symbol: char) -> Option<u8> {
        position(&self.lower, symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let folded: Vec<(char, char)> = HOMEROW.chars().filter_map(|c| fold(c).ok()).collect();
        Self::from_folded(&folded)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lower.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Lower- and upper-case forms of a symbol
fn fold(c: char) -> Result<(char, char), AlphabetError> {
    if c.is_control() {
        return Err(AlphabetError::Control(c));
    }
    let lo = single(c.to_lowercase()).ok_or(AlphabetError::Uncaseable(c))?;
    let up = single(c.to_uppercase()).ok_or(AlphabetError::Uncaseable(c))?;
    Ok((lo, up))
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let c = mapped.next()?;
    mapped.next().is_none().then_some(c)
}

fn position(symbols: &[char; DIGITS], symbol: char) -> Option<u8> {
    symbols.iter().position(|&c| c == symbol).map(|i| i as u8 + 1)
}
