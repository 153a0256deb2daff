//! Feedback calculation for guesses.
//!
//! This module computes the per-letter feedback (hit/present/miss) for a
//! guess against an answer, and parses the `0`/`1`/`2` wire form that
//! front-ends send.

use crate::error::{Error, Result};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// This occurrence is not in the answer, once duplicates are accounted for
    Miss,
    /// Correct letter in correct position
    Hit,
    /// Letter is in the answer at another position
    Present,
}

impl Feedback {
    /// Digit used in raw patterns: `0` miss, `1` hit, `2` present.
    pub fn to_digit(self) -> char {
        match self {
            Feedback::Miss => '0',
            Feedback::Hit => '1',
            Feedback::Present => '2',
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Feedback::Miss),
            '1' => Some(Feedback::Hit),
            '2' => Some(Feedback::Present),
            _ => None,
        }
    }

    fn value(self) -> u8 {
        match self {
            Feedback::Miss => 0,
            Feedback::Hit => 1,
            Feedback::Present => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Each position holds its digit value (0 miss, 1 hit, 2 present).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The all-hit pattern that ends a game
    pub const ALL_HIT: Self = Self(1 + 3 + 9 + 27 + 81); // 121

    /// The all-miss pattern
    pub const ALL_MISS: Self = Self(0);

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.value() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Score `guess` against `answer`.
    ///
    /// Hits are resolved in a first pass and consume their letter before any
    /// present marks are handed out, so a letter never earns more hit/present
    /// marks than it occurs in the answer.
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let answer_bytes = answer.as_bytes();

        let mut feedback = [Feedback::Miss; WORD_LENGTH];
        let mut remaining = answer.letter_counts();

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == answer_bytes[i] {
                feedback[i] = Feedback::Hit;
                remaining[guess.letter_index(i)] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] == Feedback::Miss {
                let idx = guess.letter_index(i);
                if remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Miss,
                1 => Feedback::Hit,
                _ => Feedback::Present,
            };
            pattern /= 3;
        }
        feedbacks
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    /// Parse a raw pattern such as `"01020"`.
    ///
    /// Only the digits `0`, `1` and `2` are accepted and the length must be
    /// exactly five.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let count = s.chars().count();
        if count != WORD_LENGTH {
            return Err(Error::invalid_pattern(
                s,
                format!("expected {WORD_LENGTH} symbols, got {count}"),
            ));
        }

        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for (slot, c) in feedbacks.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_digit(c)
                .ok_or_else(|| Error::invalid_pattern(s, format!("unexpected symbol '{c}'")))?;
        }
        Ok(Self::new(feedbacks))
    }

    /// Render back into the `0`/`1`/`2` form accepted by [`parse`](Self::parse).
    pub fn to_digits(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_digit()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.to_digits())
    }
}
