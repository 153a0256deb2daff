//! Narrowing a corpus down to the words consistent with a guess history.

use log::debug;

use crate::corpus::{Corpus, CorpusEntry};
use crate::feedback::Feedback;
use crate::history::{Guess, GuessHistory};
use crate::word::Word;

/// The corpus entries still consistent with a history, in corpus order.
///
/// Recomputed on every call and never cached.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: Vec<CorpusEntry>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn words(&self) -> Vec<Word> {
        self.entries.iter().map(|entry| entry.word).collect()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.word == *word)
    }
}

/// Keep every corpus word that would have produced each recorded pattern.
pub fn filter_candidates(history: &GuessHistory, corpus: &Corpus) -> CandidateSet {
    let entries: Vec<CorpusEntry> = corpus
        .iter()
        .filter(|entry| history.iter().all(|guess| is_consistent(guess, &entry.word)))
        .copied()
        .collect();

    debug!(
        "{} of {} words consistent with {} guesses",
        entries.len(),
        corpus.len(),
        history.len()
    );
    CandidateSet { entries }
}

/// Check whether `candidate` could be the answer given one guess.
///
/// Equivalent to `FeedbackPattern::calculate(&guess.word, candidate) ==
/// guess.pattern`, but works from the candidate's letter counts and bails out
/// at the first contradiction.
pub fn is_consistent(guess: &Guess, candidate: &Word) -> bool {
    let feedbacks = guess.pattern.to_feedbacks();
    let guess_bytes = guess.word.as_bytes();
    let candidate_bytes = candidate.as_bytes();
    let mut remaining = candidate.letter_counts();

    for (i, fb) in feedbacks.iter().enumerate() {
        if *fb == Feedback::Hit {
            if guess_bytes[i] != candidate_bytes[i] {
                return false;
            }
            remaining[guess.word.letter_index(i)] -= 1;
        }
    }

    // Walk the remaining positions left to right, the same order scoring
    // hands out present marks, so malformed patterns are rejected too.
    for (i, fb) in feedbacks.iter().enumerate() {
        if *fb == Feedback::Hit {
            continue;
        }
        if guess_bytes[i] == candidate_bytes[i] {
            return false;
        }
        let idx = guess.word.letter_index(i);
        match fb {
            Feedback::Present if remaining[idx] == 0 => return false,
            Feedback::Present => remaining[idx] -= 1,
            _ if remaining[idx] > 0 => return false,
            _ => {}
        }
    }

    true
}
