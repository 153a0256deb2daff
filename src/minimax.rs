//! Expected-cost ranking with bounded lookahead.
//!
//! A guess is scored by the expected number of guesses needed to finish the
//! game after making it. Exact search is exponential, so each node only
//! considers the `prune_width` highest-entropy guesses and nodes past the
//! depth limit are estimated as `log2(n)` for `n` remaining words.

use std::time::Instant;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::config::{StrategyKind, TieBreak};
use crate::corpus::Corpus;
use crate::entropy::top_by_entropy;
use crate::error::Result;
use crate::history::GuessHistory;
use crate::strategy::{
    candidate_lookup, finish_ranking, partition, require_candidates, sole_candidate, ScoreOrder,
    Strategy, Suggestion,
};
use crate::word::Word;

/// Ranks the top entropy guesses by expected guesses to finish.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy {
    depth: u32,
    prune_width: usize,
    tie_break: TieBreak,
}

impl MinimaxStrategy {
    pub fn new(depth: u32, prune_width: usize, tie_break: TieBreak) -> Self {
        Self {
            depth,
            prune_width,
            tie_break,
        }
    }

    /// Minimum expected guesses to finish when the answer is one of
    /// `remaining`, searching `depth` more levels.
    pub fn expected_guesses(
        &self,
        corpus: &Corpus,
        remaining: &[Word],
        depth: u32,
        token: &CancelToken,
    ) -> Result<f64> {
        token.check()?;

        let n = remaining.len();
        match n {
            0 => return Ok(0.0),
            1 => return Ok(1.0),
            _ if depth == 0 => return Ok((n as f64).log2()),
            _ => {}
        }

        let mut best = f64::INFINITY;
        for guess in top_by_entropy(corpus, remaining, self.prune_width, token)? {
            let expected =
                self.expected_guesses_for_guess(corpus, &guess, remaining, depth - 1, token)?;
            best = best.min(expected);
        }
        trace!("{} words at depth {}: {:.3}", n, depth, best);

        if best.is_finite() {
            Ok(best)
        } else {
            Ok((n as f64).log2())
        }
    }

    /// Expected guesses to finish if `guess` is played now, with each
    /// resulting group searched `child_depth` more levels.
    pub fn expected_guesses_for_guess(
        &self,
        corpus: &Corpus,
        guess: &Word,
        remaining: &[Word],
        child_depth: u32,
        token: &CancelToken,
    ) -> Result<f64> {
        let total = remaining.len() as f64;
        let mut expected = 0.0;

        for (pattern, group) in partition(guess, remaining) {
            let probability = group.len() as f64 / total;
            if pattern.is_win() {
                expected += probability;
            } else {
                let rest = self.expected_guesses(corpus, &group, child_depth, token)?;
                expected += probability * (1.0 + rest);
            }
        }

        Ok(expected)
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(0, 50, TieBreak::PreferCandidates)
    }
}

impl Strategy for MinimaxStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }

    fn rank(
        &self,
        history: &GuessHistory,
        corpus: &Corpus,
        top_n: usize,
        token: &CancelToken,
    ) -> Result<Vec<Suggestion>> {
        let candidates = require_candidates(history, corpus)?;
        if let Some(only) = sole_candidate(&candidates, 1.0) {
            return Ok(only);
        }

        let start = Instant::now();
        let answers = candidates.words();
        let lookup = candidate_lookup(&candidates);
        let probes = top_by_entropy(corpus, &answers, self.prune_width, token)?;

        // The top-level guess spends one level; depth 0 and 1 both stop at
        // the log2 estimate for each group.
        let child_depth = self.depth.saturating_sub(1);
        let scored = probes
            .par_iter()
            .map(|guess| -> Result<Suggestion> {
                let score =
                    self.expected_guesses_for_guess(corpus, guess, &answers, child_depth, token)?;
                Ok(Suggestion {
                    word: *guess,
                    score,
                    is_candidate: lookup.contains(guess),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "searched {} guesses at depth {} over {} candidates in {:.2?}",
            scored.len(),
            self.depth,
            answers.len(),
            start.elapsed()
        );

        let ranked = finish_ranking(scored, ScoreOrder::LowestFirst, self.tie_break, top_n);
        if let Some(best) = ranked.first() {
            info!("minimax suggests {} ({:.3} expected guesses)", best.word, best.score);
        }
        Ok(ranked)
    }
}
