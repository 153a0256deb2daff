//! The 5-letter word type shared by every other module.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::WORD_LENGTH;

/// A validated word of exactly five uppercase ASCII letters.
///
/// Stored inline as bytes so it is `Copy` and cheap to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, trimming surrounding whitespace and uppercasing.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::InvalidWordFormat {
                input: input.to_string(),
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Alphabet index (0..26) of the letter at `position`.
    pub(crate) fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'A') as usize
    }

    /// Per-letter occurrence counts, indexed by alphabet position.
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for position in 0..WORD_LENGTH {
            counts[self.letter_index(position)] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
