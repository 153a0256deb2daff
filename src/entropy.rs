//! Entropy-based ranking.
//!
//! A guess is worth the expected information its feedback reveals about the
//! remaining candidates: the more evenly it splits them across patterns, the
//! higher its entropy and the fewer words are expected to survive.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::config::{StrategyKind, TieBreak};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::history::GuessHistory;
use crate::strategy::{
    candidate_lookup, finish_ranking, require_candidates, sole_candidate, ScoreOrder, Strategy,
    Suggestion,
};
use crate::word::Word;

/// Histogram of the patterns `guess` produces over `answers`.
pub fn pattern_counts(guess: &Word, answers: &[Word]) -> [u32; FeedbackPattern::NUM_PATTERNS] {
    let mut counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for answer in answers {
        let pattern = FeedbackPattern::calculate(guess, answer);
        counts[pattern.0 as usize] += 1;
    }
    counts
}

/// Expected information gain, in bits, of guessing `guess` when the answer
/// is uniformly one of `answers`.
pub fn entropy(guess: &Word, answers: &[Word]) -> f64 {
    let n = answers.len() as f64;
    if answers.len() <= 1 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &count in pattern_counts(guess, answers).iter() {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }

    entropy
}

/// The `k` corpus words with the highest entropy over `answers`.
///
/// Ties keep corpus order. The token is polled once per corpus word.
pub(crate) fn top_by_entropy(
    corpus: &Corpus,
    answers: &[Word],
    k: usize,
    token: &CancelToken,
) -> Result<Vec<Word>> {
    let mut scored = corpus
        .words()
        .map(|word| -> Result<(Word, f64)> {
            token.check()?;
            Ok((word, entropy(&word, answers)))
        })
        .collect::<Result<Vec<_>>>()?;
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k);
    Ok(scored.into_iter().map(|(word, _)| word).collect())
}

/// Ranks every corpus word by entropy over the current candidates.
#[derive(Debug, Clone, Copy)]
pub struct EntropyStrategy {
    tie_break: TieBreak,
}

impl EntropyStrategy {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl Default for EntropyStrategy {
    fn default() -> Self {
        Self::new(TieBreak::PreferCandidates)
    }
}

impl Strategy for EntropyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Entropy
    }

    fn rank(
        &self,
        history: &GuessHistory,
        corpus: &Corpus,
        top_n: usize,
        token: &CancelToken,
    ) -> Result<Vec<Suggestion>> {
        let candidates = require_candidates(history, corpus)?;
        if let Some(only) = sole_candidate(&candidates, 0.0) {
            return Ok(only);
        }

        let start = Instant::now();
        let answers = candidates.words();
        let lookup = candidate_lookup(&candidates);

        let scored = corpus
            .entries()
            .par_iter()
            .map(|entry| -> Result<Suggestion> {
                token.check()?;
                Ok(Suggestion {
                    word: entry.word,
                    score: entropy(&entry.word, &answers),
                    is_candidate: lookup.contains(&entry.word),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "scored {} guesses against {} candidates in {:.2?}",
            scored.len(),
            answers.len(),
            start.elapsed()
        );

        let ranked = finish_ranking(scored, ScoreOrder::HighestFirst, self.tie_break, top_n);
        if let Some(best) = ranked.first() {
            info!("entropy suggests {} ({:.3} bits)", best.word, best.score);
        }
        Ok(ranked)
    }
}
