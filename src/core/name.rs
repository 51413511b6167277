//! Guess input validation
//!
//! Raw text typed by the player is normalised into a `GuessInput` before it is
//! scored. The comparator itself never validates; this is where the length
//! precondition is enforced.

use std::fmt;

/// Why raw guess text could not be turned into a comparable name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    InvalidCharacters(char),
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess must not be empty"),
            Self::InvalidCharacters(ch) => {
                write!(f, "Guess contains an invalid character: '{ch}'")
            }
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters long, got {actual}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// A normalised guess: trimmed, upper-cased, checked against the answer length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInput {
    text: String,
}

impl GuessInput {
    /// Normalise `raw` and check it can be compared against a name of
    /// `expected_len` characters
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - The trimmed input is empty
    /// - It contains something other than ASCII letters, space, `-`, `'` or `.`
    /// - Its character count differs from `expected_len`
    ///
    /// # Examples
    /// ```
    /// use lineup_wordle::core::GuessInput;
    ///
    /// let input = GuessInput::new("  modric ", 6).unwrap();
    /// assert_eq!(input.text(), "MODRIC");
    ///
    /// assert!(GuessInput::new("kroos", 6).is_err());
    /// assert!(GuessInput::new("m0dric", 6).is_err());
    /// ```
    pub fn new(raw: &str, expected_len: usize) -> Result<Self, InputError> {
        let text = raw.trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(InputError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !is_name_char(c)) {
            return Err(InputError::InvalidCharacters(bad));
        }

        let actual = text.chars().count();
        if actual != expected_len {
            return Err(InputError::InvalidLength {
                expected: expected_len,
                actual,
            });
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.text
    }
}

impl fmt::Display for GuessInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Characters that may appear in a player name
#[inline]
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.')
}
