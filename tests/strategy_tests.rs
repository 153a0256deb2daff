use std::time::Duration;

use wordle_advisor::entropy::entropy;
use wordle_advisor::{
    filter_candidates, suggest, CancelToken, Corpus, EntropyStrategy, Error, FeedbackPattern,
    Guess, GuessHistory, MinimaxStrategy, SolverConfig, Strategy, StrategyKind, TieBreak, Word,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn test_corpus() -> Corpus {
    let words = [
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ];
    let n = words.len() as f64;
    Corpus::from_entries(
        words.iter().enumerate().map(|(i, s)| (w(s), (n - i as f64) / n)),
        None,
    )
}

fn history_against(answer: &str, guesses: &[&str]) -> GuessHistory {
    let mut history = GuessHistory::new();
    for guess in guesses {
        let pattern = FeedbackPattern::calculate(&w(guess), &w(answer));
        history.push(Guess::new(w(guess), pattern)).unwrap();
    }
    history
}

/// FACET can never be the answer once FFFFF comes back all-miss, but it
/// splits CRANE/TRACE exactly as well as either of them does.
fn tie_fixture() -> (Corpus, GuessHistory) {
    let corpus = Corpus::from_entries(
        [(w("facet"), 0.9), (w("crane"), 0.8), (w("trace"), 0.7)],
        None,
    );
    let mut history = GuessHistory::new();
    history.record("fffff", "00000").unwrap();
    (corpus, history)
}

fn words_of(ranked: &[wordle_advisor::Suggestion]) -> Vec<String> {
    ranked.iter().map(|s| s.word.to_string()).collect()
}

#[test]
fn test_entropy_ranks_descending() {
    let corpus = test_corpus();
    let ranked = EntropyStrategy::default()
        .rank(&GuessHistory::new(), &corpus, 5, &CancelToken::new())
        .unwrap();

    assert_eq!(ranked.len(), 5);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked.iter().all(|s| s.is_candidate));
}

#[test]
fn test_entropy_bounds() {
    let corpus = test_corpus();
    let answers: Vec<Word> = corpus.words().collect();
    let max = (answers.len() as f64).log2();
    for guess in corpus.words() {
        let bits = entropy(&guess, &answers);
        assert!(bits >= 0.0);
        assert!(bits <= max + 1e-9, "{guess}: {bits} > {max}");
    }
    assert_eq!(entropy(&w("crane"), &[w("crane")]), 0.0);
}

#[test]
fn test_single_candidate_shortcut() {
    let corpus = test_corpus();
    let history = history_against("crate", &["crane"]);

    let strategies: [Box<dyn Strategy>; 2] = [
        Box::new(EntropyStrategy::default()),
        Box::new(MinimaxStrategy::default()),
    ];
    for strategy in strategies {
        let ranked = strategy
            .rank(&history, &corpus, 5, &CancelToken::new())
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, w("crate"));
        assert!(ranked[0].is_candidate);
    }
}

#[test]
fn test_no_candidates_is_an_error() {
    let corpus = Corpus::from_entries(
        [(w("crane"), 0.9), (w("slate"), 0.8), (w("trace"), 0.7)],
        None,
    );
    let mut history = GuessHistory::new();
    history.record("crane", "00000").unwrap();

    for kind in [StrategyKind::Entropy, StrategyKind::Minimax] {
        let config = SolverConfig::default().with_strategy(kind);
        assert!(matches!(
            suggest(&history, &corpus, &config),
            Err(Error::NoCandidates)
        ));
    }
}

#[test]
fn test_entropy_prefers_candidates_on_ties() {
    let (corpus, history) = tie_fixture();

    let preferred = EntropyStrategy::new(TieBreak::PreferCandidates)
        .rank(&history, &corpus, 3, &CancelToken::new())
        .unwrap();
    assert_eq!(words_of(&preferred), ["CRANE", "TRACE", "FACET"]);
    assert!(preferred.iter().all(|s| s.score == 1.0));

    let corpus_order = EntropyStrategy::new(TieBreak::CorpusOrder)
        .rank(&history, &corpus, 3, &CancelToken::new())
        .unwrap();
    assert_eq!(words_of(&corpus_order), ["FACET", "CRANE", "TRACE"]);
}

#[test]
fn test_minimax_two_candidates() {
    let (corpus, history) = tie_fixture();

    let ranked = MinimaxStrategy::new(0, 50, TieBreak::PreferCandidates)
        .rank(&history, &corpus, 3, &CancelToken::new())
        .unwrap();
    assert_eq!(words_of(&ranked), ["CRANE", "TRACE", "FACET"]);
    assert_eq!(ranked[0].score, 1.5);
    assert_eq!(ranked[1].score, 1.5);
    assert_eq!(ranked[2].score, 2.0);
}

#[test]
fn test_minimax_ranks_ascending() {
    let corpus = test_corpus();
    for depth in [0, 1] {
        let ranked = MinimaxStrategy::new(depth, 5, TieBreak::PreferCandidates)
            .rank(&GuessHistory::new(), &corpus, 3, &CancelToken::new())
            .unwrap();

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        assert!(ranked.iter().all(|s| s.score >= 1.0));
    }
}

#[test]
fn test_minimax_depth_one_scores() {
    // ROAST splits the ten words into a win, seven singletons and one pair:
    // 0.1 + 0.7 * (1 + 1) + 0.2 * (1 + log2 2) = 1.9.
    let corpus = test_corpus();
    let answers: Vec<Word> = corpus.words().collect();
    let strategy = MinimaxStrategy::new(1, 5, TieBreak::PreferCandidates);
    let token = CancelToken::new();

    let roast = strategy
        .expected_guesses_for_guess(&corpus, &w("roast"), &answers, 0, &token)
        .unwrap();
    assert!((roast - 1.9).abs() < 1e-9, "{roast}");

    // Depth 1 charges the first guess, so every group is a log2 leaf and
    // ranking matches depth 0.
    let depth_one = strategy
        .rank(&GuessHistory::new(), &corpus, 5, &token)
        .unwrap();
    let depth_zero = MinimaxStrategy::new(0, 5, TieBreak::PreferCandidates)
        .rank(&GuessHistory::new(), &corpus, 5, &token)
        .unwrap();
    assert_eq!(depth_one, depth_zero);
    assert_eq!(depth_one.len(), 5);
    for suggestion in &depth_one {
        assert!((suggestion.score - 1.9).abs() < 1e-9, "{}", suggestion.word);
    }
}

#[test]
fn test_minimax_leaf_estimates() {
    let corpus = test_corpus();
    let strategy = MinimaxStrategy::default();
    let token = CancelToken::new();

    assert_eq!(strategy.expected_guesses(&corpus, &[], 2, &token).unwrap(), 0.0);
    assert_eq!(strategy.expected_guesses(&corpus, &[w("crane")], 2, &token).unwrap(), 1.0);

    let four = [w("crane"), w("slate"), w("roast"), w("beast")];
    assert_eq!(strategy.expected_guesses(&corpus, &four, 0, &token).unwrap(), 2.0);
}

#[test]
fn test_suggest_is_deterministic() {
    let corpus = test_corpus();
    let history = history_against("stare", &["toast"]);
    assert!(filter_candidates(&history, &corpus).len() >= 2);

    for kind in [StrategyKind::Entropy, StrategyKind::Minimax] {
        let config = SolverConfig::default()
            .with_strategy(kind)
            .with_top_n(5)
            .with_depth(1)
            .with_prune_width(4);
        let first = suggest(&history, &corpus, &config).unwrap();
        let second = suggest(&history, &corpus, &config).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

#[test]
fn test_cancelled_token_stops_ranking() {
    let corpus = test_corpus();
    let token = CancelToken::new();
    token.cancel();

    let strategies: [Box<dyn Strategy>; 2] = [
        Box::new(EntropyStrategy::default()),
        Box::new(MinimaxStrategy::new(2, 10, TieBreak::PreferCandidates)),
    ];
    for strategy in strategies {
        assert!(matches!(
            strategy.rank(&GuessHistory::new(), &corpus, 3, &token),
            Err(Error::Cancelled)
        ));
    }
}

#[test]
fn test_expired_deadline_stops_ranking() {
    let corpus = test_corpus();
    let token = CancelToken::with_timeout(Duration::ZERO);
    assert!(token.is_cancelled());
    assert!(matches!(
        MinimaxStrategy::default().rank(&GuessHistory::new(), &corpus, 1, &token),
        Err(Error::Cancelled)
    ));
}

#[test]
fn test_strategy_kind_parsing() {
    assert_eq!("entropy".parse::<StrategyKind>().unwrap(), StrategyKind::Entropy);
    assert_eq!(" Minimax ".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
    assert!(matches!(
        "greedy".parse::<StrategyKind>(),
        Err(Error::UnknownStrategy(name)) if name == "greedy"
    ));
}

#[test]
fn test_config_validation() {
    let corpus = test_corpus();
    let history = GuessHistory::new();

    for config in [
        SolverConfig::default().with_top_n(0),
        SolverConfig::default().with_prune_width(0),
        SolverConfig::default().with_timeout(Duration::ZERO),
    ] {
        assert!(matches!(
            suggest(&history, &corpus, &config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
    assert!(SolverConfig::default().validate().is_ok());
}
