//! Code Translation
//!
//! One upper-case symbol is a digit 1-10 on its own. Two lower-case symbols
//! are tens and units, with the tenth symbol standing in for a units 0.

use super::{Alphabet, TranslateError, TranslateResult};

/// Translate a one or two symbol code into a count.
///
/// Shorthand reaches 1..=10, the full form 10..=109.
pub fn translate(alphabet: &Alphabet, code: &str) -> TranslateResult<u8> {
    let mut symbols = code.chars();

    match (symbols.next(), symbols.next(), symbols.next()) {
        (Some(digit), None, None) => alphabet
            .upper_digit(digit)
            .ok_or(TranslateError::Unknown(digit)),
        (Some(tens), Some(units), None) => {
            let tens = alphabet.lower_digit(tens).ok_or(TranslateError::Unknown(tens))?;
            let units = alphabet.lower_digit(units).ok_or(TranslateError::Unknown(units))?;
            Ok(tens * 10 + units % 10)
        }
        _ => Err(TranslateError::Length(code.chars().count())),
    }
}

/// Translate against the canonical home row
pub fn translate_default(code: &str) -> TranslateResult<u8> {
    translate(&Alphabet::default(), code)
}
