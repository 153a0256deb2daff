//! The ranking strategy interface and the helpers both strategies share.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::cancel::CancelToken;
use crate::config::{SolverConfig, StrategyKind, TieBreak};
use crate::corpus::Corpus;
use crate::entropy::EntropyStrategy;
use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::filter::{filter_candidates, CandidateSet};
use crate::history::GuessHistory;
use crate::minimax::MinimaxStrategy;
use crate::word::Word;

/// A ranked guess.
///
/// `score` is entropy in bits for [`EntropyStrategy`] and expected guesses to
/// finish for [`MinimaxStrategy`].
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub score: f64,
    pub is_candidate: bool,
}

/// Ranks corpus words as the next guess for a history.
///
/// Implementations are pure: they read the history and corpus, hold no state
/// between calls and fail with [`Error::NoCandidates`] when nothing in the
/// corpus fits the history.
pub trait Strategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Return at most `top_n` suggestions, best first.
    fn rank(
        &self,
        history: &GuessHistory,
        corpus: &Corpus,
        top_n: usize,
        token: &CancelToken,
    ) -> Result<Vec<Suggestion>>;
}

/// Build the strategy a configuration asks for.
pub fn build_strategy(config: &SolverConfig) -> Box<dyn Strategy> {
    match config.strategy {
        StrategyKind::Entropy => Box::new(EntropyStrategy::new(config.tie_break)),
        StrategyKind::Minimax => Box::new(MinimaxStrategy::new(
            config.depth,
            config.prune_width,
            config.tie_break,
        )),
    }
}

/// Filter the corpus, failing when the history rules out every word.
pub(crate) fn require_candidates(history: &GuessHistory, corpus: &Corpus) -> Result<CandidateSet> {
    let candidates = filter_candidates(history, corpus);
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }
    Ok(candidates)
}

/// The lone remaining candidate, if exactly one is left.
pub(crate) fn sole_candidate(candidates: &CandidateSet, score: f64) -> Option<Vec<Suggestion>> {
    match candidates.entries() {
        [only] => Some(vec![Suggestion {
            word: only.word,
            score,
            is_candidate: true,
        }]),
        _ => None,
    }
}

pub(crate) fn candidate_lookup(candidates: &CandidateSet) -> HashSet<Word> {
    candidates.entries().iter().map(|entry| entry.word).collect()
}

/// Group `answers` by the pattern `guess` would produce against each.
///
/// Groups come back in ascending pattern order with empty ones skipped, so
/// iteration is deterministic.
pub fn partition(guess: &Word, answers: &[Word]) -> Vec<(FeedbackPattern, Vec<Word>)> {
    let mut buckets: Vec<Vec<Word>> = vec![Vec::new(); FeedbackPattern::NUM_PATTERNS];
    for answer in answers {
        let pattern = FeedbackPattern::calculate(guess, answer);
        buckets[pattern.0 as usize].push(*answer);
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, group)| !group.is_empty())
        .map(|(pattern, group)| (FeedbackPattern(pattern as u8), group))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoreOrder {
    HighestFirst,
    LowestFirst,
}

/// Sort suggestions best first and keep `top_n`.
///
/// The sort is stable, so anything still tied keeps its corpus position.
pub(crate) fn finish_ranking(
    mut suggestions: Vec<Suggestion>,
    order: ScoreOrder,
    tie_break: TieBreak,
    top_n: usize,
) -> Vec<Suggestion> {
    suggestions.sort_by(|a, b| {
        let by_score = match order {
            ScoreOrder::HighestFirst => b.score.total_cmp(&a.score),
            ScoreOrder::LowestFirst => a.score.total_cmp(&b.score),
        };
        match (by_score, tie_break) {
            (Ordering::Equal, TieBreak::PreferCandidates) => b.is_candidate.cmp(&a.is_candidate),
            (ord, _) => ord,
        }
    });
    suggestions.truncate(top_n);
    suggestions
}
