//! Solver configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};

/// Which ranking strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Maximize expected information gain
    #[default]
    Entropy,
    /// Minimize expected guesses via pruned lookahead
    Minimax,
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entropy" => Ok(StrategyKind::Entropy),
            "minimax" => Ok(StrategyKind::Minimax),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Entropy => f.write_str("entropy"),
            StrategyKind::Minimax => f.write_str("minimax"),
        }
    }
}

/// How to order guesses whose scores are equal.
///
/// Preferring candidates is a heuristic: a word that might be the answer
/// can win outright, but it is not proven to be the better probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Words that could still be the answer come first
    #[default]
    PreferCandidates,
    /// Equal scores keep corpus order
    CorpusOrder,
}

/// Parameters for a [`Solver`](crate::Solver).
///
/// Build with `Default` and the `with_*` setters; [`validate`](Self::validate)
/// runs once when the solver is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub strategy: StrategyKind,
    /// Number of suggestions to return
    pub top_n: usize,
    /// Minimax lookahead, counting the top-level guess
    pub depth: u32,
    /// Guesses kept per minimax node, chosen by entropy
    pub prune_width: usize,
    pub tie_break: TieBreak,
    /// Abandon a ranking call after this long
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Entropy,
            top_n: 1,
            depth: 0,
            prune_width: 50,
            tie_break: TieBreak::PreferCandidates,
            timeout: None,
        }
    }
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_prune_width(mut self, prune_width: usize) -> Self {
        self.prune_width = prune_width;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::invalid_config("top_n must be at least 1"));
        }
        if self.prune_width == 0 {
            return Err(Error::invalid_config("prune_width must be at least 1"));
        }
        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(Error::invalid_config("timeout must be non-zero"));
        }
        Ok(())
    }

    /// A fresh token for one ranking call, expiring after `timeout` if set.
    pub fn cancel_token(&self) -> CancelToken {
        match self.timeout {
            Some(timeout) => CancelToken::with_timeout(timeout),
            None => CancelToken::new(),
        }
    }
}
