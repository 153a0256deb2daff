//! # Wordle Advisor
//!
//! Decision support for 5-letter word-guessing games.
//!
//! Given the guesses made so far and the feedback each received, the advisor
//! narrows a ranked wordlist to the words that could still be the answer and
//! recommends the next guess, either by maximum entropy or by a pruned
//! expected-cost search.
//!
//! ```no_run
//! use wordle_advisor::{suggest, Corpus, GuessHistory, SolverConfig, StrategyKind};
//!
//! let corpus = Corpus::load("wordlists/sample.csv", Some(1000))?;
//! let mut history = GuessHistory::new();
//! history.record("crane", "00201")?;
//!
//! let config = SolverConfig::default().with_strategy(StrategyKind::Minimax).with_top_n(3);
//! let words = suggest(&history, &corpus, &config)?;
//! # Ok::<_, wordle_advisor::Error>(())
//! ```

pub mod cancel;
pub mod config;
pub mod corpus;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod history;
pub mod minimax;
pub mod solver;
pub mod strategy;
pub mod word;

pub use cancel::CancelToken;
pub use config::{SolverConfig, StrategyKind, TieBreak};
pub use corpus::{Corpus, CorpusEntry};
pub use entropy::EntropyStrategy;
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackPattern};
pub use filter::{filter_candidates, CandidateSet};
pub use history::{Guess, GuessHistory};
pub use minimax::MinimaxStrategy;
pub use solver::Solver;
pub use strategy::{Strategy, Suggestion};
pub use word::Word;

/// Word length for every game
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Score `guess` against `answer`.
pub fn compute_feedback(guess: &Word, answer: &Word) -> FeedbackPattern {
    FeedbackPattern::calculate(guess, answer)
}

/// Rank the next guess with the strategy `config` selects and return the
/// suggested words, best first.
pub fn suggest(history: &GuessHistory, corpus: &Corpus, config: &SolverConfig) -> Result<Vec<Word>> {
    config.validate()?;
    let token = config.cancel_token();
    let ranked = strategy::build_strategy(config).rank(history, corpus, config.top_n, &token)?;
    Ok(ranked.into_iter().map(|suggestion| suggestion.word).collect())
}
