//! Solver facade: a corpus, a validated configuration and the strategy it
//! selects.
//!
//! The solver holds no game state. Callers own the [`GuessHistory`] and pass
//! it in on every call, so one solver can serve any number of games.

use log::debug;
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::config::{SolverConfig, StrategyKind};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::filter::{filter_candidates, CandidateSet};
use crate::history::{Guess, GuessHistory};
use crate::strategy::{build_strategy, Strategy, Suggestion};
use crate::word::Word;
use crate::MAX_GUESSES;

pub struct Solver {
    corpus: Corpus,
    config: SolverConfig,
    strategy: Box<dyn Strategy>,
}

impl Solver {
    pub fn new(corpus: Corpus, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let strategy = build_strategy(&config);
        Ok(Self {
            corpus,
            config,
            strategy,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Which strategy ranks this solver's guesses.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn candidates(&self, history: &GuessHistory) -> CandidateSet {
        filter_candidates(history, &self.corpus)
    }

    /// Rank the next guess, honouring the configured timeout.
    pub fn suggest(&self, history: &GuessHistory) -> Result<Vec<Suggestion>> {
        self.suggest_with(history, &self.config.cancel_token())
    }

    /// Rank the next guess under a caller-supplied cancellation token.
    pub fn suggest_with(&self, history: &GuessHistory, token: &CancelToken) -> Result<Vec<Suggestion>> {
        self.strategy
            .rank(history, &self.corpus, self.config.top_n, token)
    }

    /// Like [`suggest`](Self::suggest) but overriding how many come back.
    pub fn suggest_top(&self, history: &GuessHistory, top_n: usize) -> Result<Vec<Suggestion>> {
        self.strategy
            .rank(history, &self.corpus, top_n.max(1), &self.config.cancel_token())
    }

    pub fn best_guess(&self, history: &GuessHistory) -> Result<Option<Suggestion>> {
        Ok(self.suggest(history)?.into_iter().next())
    }

    /// Play a game, asking `get_feedback` to score each suggested guess.
    /// Stops on a win or once six guesses are used. Ranking errors propagate.
    pub fn solve_with_feedback<F>(&self, mut get_feedback: F) -> Result<GuessHistory>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut history = GuessHistory::new();

        while !history.is_complete() {
            let best = match self.best_guess(&history)? {
                Some(best) => best,
                None => break,
            };
            let pattern = get_feedback(&best.word);
            history.push(Guess::new(best.word, pattern))?;
        }

        Ok(history)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&self, target: &Word) -> Result<GuessHistory> {
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(guess, target))
    }

    /// Self-play every corpus word and count how many guesses each took.
    ///
    /// Returns `(guesses, words)` pairs in ascending guess order. Games that
    /// were not won inside six guesses are reported under seven.
    pub fn benchmark_guess_distribution(&self) -> Result<Vec<(usize, usize)>> {
        let guess_counts = self
            .corpus
            .entries()
            .par_iter()
            .map(|entry| -> Result<usize> {
                let history = self.solve_for_target(&entry.word)?;
                Ok(if history.is_won() {
                    history.len()
                } else {
                    MAX_GUESSES + 1
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut distribution = vec![0usize; MAX_GUESSES + 2];
        for count in guess_counts {
            distribution[count] += 1;
        }
        debug!("benchmarked {} words", self.corpus.len());

        Ok(distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect())
    }
}
