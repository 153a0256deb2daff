//! Guess history for a single game.

use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use crate::MAX_GUESSES;

/// A guessed word together with the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    pub word: Word,
    pub pattern: FeedbackPattern,
}

impl Guess {
    pub fn new(word: Word, pattern: FeedbackPattern) -> Self {
        Self { word, pattern }
    }

    /// Parse boundary input: a word and a raw `0`/`1`/`2` pattern.
    pub fn parse(word: &str, raw_pattern: &str) -> Result<Self> {
        Ok(Self {
            word: Word::parse(word)?,
            pattern: FeedbackPattern::parse(raw_pattern)?,
        })
    }
}

/// Ordered, append-only record of the guesses made so far.
///
/// Holds at most [`MAX_GUESSES`] entries and refuses new guesses once the
/// game is complete. Owners clear it with [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: Vec<Guess>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, guess: Guess) -> Result<()> {
        if self.is_complete() {
            return Err(Error::GameOver {
                guesses: self.guesses.len(),
            });
        }
        self.guesses.push(guess);
        Ok(())
    }

    /// Validate and append a guess given as raw text.
    pub fn record(&mut self, word: &str, raw_pattern: &str) -> Result<()> {
        let guess = Guess::parse(word, raw_pattern)?;
        self.push(guess)
    }

    /// Clear the history, returning how many guesses were made.
    pub fn reset(&mut self) -> usize {
        let count = self.guesses.len();
        self.guesses.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Guess> {
        self.guesses.iter()
    }

    pub fn last(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    pub fn is_won(&self) -> bool {
        self.last().is_some_and(|guess| guess.pattern.is_win())
    }

    pub fn is_complete(&self) -> bool {
        self.is_won() || self.guesses.len() >= MAX_GUESSES
    }
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a Guess;
    type IntoIter = std::slice::Iter<'a, Guess>;

    fn into_iter(self) -> Self::IntoIter {
        self.guesses.iter()
    }
}
