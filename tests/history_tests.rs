use wordle_advisor::{Error, FeedbackPattern, Guess, GuessHistory, Word, MAX_GUESSES};

#[test]
fn test_record_appends_in_order() {
    let mut history = GuessHistory::new();
    history.record("crane", "02001").unwrap();
    history.record("store", "11111").unwrap();

    let words: Vec<String> = history.iter().map(|g| g.word.to_string()).collect();
    assert_eq!(words, ["CRANE", "STORE"]);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_invalid_input_leaves_history_untouched() {
    let mut history = GuessHistory::new();
    history.record("crane", "02001").unwrap();

    assert!(matches!(
        history.record("cran", "02001"),
        Err(Error::InvalidWordFormat { .. })
    ));
    assert!(matches!(
        history.record("store", "0200"),
        Err(Error::InvalidPatternFormat { .. })
    ));
    assert!(matches!(
        history.record("store", "0x001"),
        Err(Error::InvalidPatternFormat { .. })
    ));
    assert_eq!(history.len(), 1);
}

#[test]
fn test_win_ends_the_game() {
    let mut history = GuessHistory::new();
    assert!(!history.is_won());
    assert!(!history.is_complete());

    history.record("crane", "11111").unwrap();
    assert!(history.is_won());
    assert!(history.is_complete());
    assert!(matches!(
        history.record("slate", "00000"),
        Err(Error::GameOver { guesses: 1 })
    ));
}

#[test]
fn test_six_guesses_end_the_game() {
    let mut history = GuessHistory::new();
    let guess = Guess::new(Word::parse("crane").unwrap(), FeedbackPattern::ALL_MISS);
    for _ in 0..MAX_GUESSES {
        assert!(!history.is_complete());
        history.push(guess).unwrap();
    }

    assert!(history.is_complete());
    assert!(!history.is_won());
    assert!(history.push(guess).is_err());
    assert_eq!(history.len(), MAX_GUESSES);
}

#[test]
fn test_win_on_last_guess() {
    let mut history = GuessHistory::new();
    for _ in 0..MAX_GUESSES - 1 {
        history.record("crane", "00000").unwrap();
    }
    history.record("slate", "11111").unwrap();
    assert!(history.is_won());
}

#[test]
fn test_reset_returns_guess_count() {
    let mut history = GuessHistory::new();
    history.record("crane", "02001").unwrap();
    history.record("other", "20100").unwrap();

    assert_eq!(history.reset(), 2);
    assert!(history.is_empty());
    assert_eq!(history.reset(), 0);
}
