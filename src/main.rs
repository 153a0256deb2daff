//! Wordle Advisor CLI
//!
//! Command-line front-end for filtering and ranking guesses.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use wordle_advisor::{
    compute_feedback, filter_candidates, CancelToken, Corpus, Error, Guess, GuessHistory, Result,
    Solver, SolverConfig, StrategyKind, Suggestion, TieBreak, Word, MAX_GUESSES,
};

const REPL_HELP: &str = "\
Commands:
  suggest | s                 best next guess
  top [N]                     top N guesses (default 5)
  feedback <WORD> <PATTERN>   record a guess, pattern digits 0=miss 1=hit 2=present
  remaining | r               list remaining candidates
  reset                       start a new game
  help | h | ?                show this help
  quit | q                    exit";

#[derive(Parser, Debug)]
#[command(name = "wordle-advisor", version, about = "Filter candidates and rank guesses for 5-letter word games")]
struct Cli {
    /// CSV wordlist with `word` and `normalized_frequency` columns
    #[arg(long, short = 'w', global = true, default_value = "wordlists/sample.csv")]
    wordlist: PathBuf,

    /// Only load the most frequent N words
    #[arg(long, global = true)]
    max_words: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the feedback pattern a guess earns against an answer
    Score { guess: Word, answer: Word },
    /// List the words consistent with the given guesses
    Filter {
        #[command(flatten)]
        history: HistoryArgs,
    },
    /// Rank the next guess
    Suggest {
        #[command(flatten)]
        history: HistoryArgs,
        #[command(flatten)]
        strategy: StrategyArgs,
    },
    /// Self-play against a known answer
    Solve {
        target: Word,
        #[command(flatten)]
        strategy: StrategyArgs,
    },
    /// Self-play every word and report the guess distribution
    Bench {
        #[command(flatten)]
        strategy: StrategyArgs,
    },
    /// Interactive session (the default)
    Interactive {
        #[command(flatten)]
        strategy: StrategyArgs,
    },
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// A previous guess as WORD:PATTERN, e.g. CRANE:00201 (repeatable)
    #[arg(long = "guess", short = 'g', value_parser = parse_guess)]
    guesses: Vec<Guess>,
}

impl HistoryArgs {
    fn to_history(&self) -> Result<GuessHistory> {
        let mut history = GuessHistory::new();
        for guess in &self.guesses {
            history.push(*guess)?;
        }
        Ok(history)
    }
}

#[derive(Args, Debug, Default)]
struct StrategyArgs {
    /// Ranking strategy: entropy or minimax
    #[arg(long, short = 's', default_value = "entropy")]
    strategy: StrategyKind,

    /// Number of suggestions to show
    #[arg(long, short = 'n', default_value_t = 5)]
    top: usize,

    /// Minimax lookahead depth
    #[arg(long, default_value_t = 0)]
    depth: u32,

    /// Guesses considered per minimax node
    #[arg(long, default_value_t = 50)]
    prune_width: usize,

    /// Keep corpus order on ties instead of preferring possible answers
    #[arg(long)]
    no_prefer_candidates: bool,

    /// Give up on a ranking call after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl StrategyArgs {
    fn to_config(&self) -> SolverConfig {
        let tie_break = if self.no_prefer_candidates {
            TieBreak::CorpusOrder
        } else {
            TieBreak::PreferCandidates
        };
        let config = SolverConfig::default()
            .with_strategy(self.strategy)
            .with_top_n(self.top)
            .with_depth(self.depth)
            .with_prune_width(self.prune_width)
            .with_tie_break(tie_break);
        match self.timeout_ms {
            Some(ms) => config.with_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}

fn parse_guess(s: &str) -> std::result::Result<Guess, String> {
    let (word, pattern) = s
        .split_once(':')
        .ok_or_else(|| format!("expected WORD:PATTERN, got '{s}'"))?;
    Guess::parse(word, pattern).map_err(|err| err.to_string())
}

/// Spinner on stderr showing what is running and for how long. Dropping it
/// stops the thread and clears the line.
struct Progress {
    stop: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl Progress {
    fn start(label: String) -> Self {
        let stop = CancelToken::new();
        let watcher = stop.clone();
        let handle = thread::spawn(move || {
            const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let started = Instant::now();
            let mut width = 0;
            for frame in FRAMES.iter().cycle() {
                if watcher.is_cancelled() {
                    break;
                }
                let line = format!("{frame} {label} ({:.1}s)", started.elapsed().as_secs_f64());
                width = width.max(line.chars().count());
                eprint!("\r{line}");
                let _ = io::stderr().flush();
                thread::sleep(Duration::from_millis(100));
            }
            eprint!("\r{:width$}\r", "");
            let _ = io::stderr().flush();
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.stop.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn with_progress<T>(label: String, work: impl FnOnce() -> T) -> T {
    let _progress = Progress::start(label);
    work()
}

fn print_suggestions(suggestions: &[Suggestion], kind: StrategyKind) {
    let metric = match kind {
        StrategyKind::Entropy => "Bits",
        StrategyKind::Minimax => "Exp. guesses",
    };
    println!("{:>4} {:>8} {:>12} Possible?", "#", "Word", metric);
    println!("{}", "-".repeat(40));
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>12.3} {}",
            i + 1,
            suggestion.word,
            suggestion.score,
            if suggestion.is_candidate { "yes" } else { "" }
        );
    }
}

fn print_words(words: impl IntoIterator<Item = Word>) {
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word);
    }
    println!();
}

fn rank_with_progress(solver: &Solver, history: &GuessHistory, top_n: usize) -> Result<Vec<Suggestion>> {
    with_progress(format!("ranking with {}", solver.strategy_kind()), || {
        solver.suggest_top(history, top_n)
    })
}

fn run_interactive(corpus: Corpus, config: SolverConfig) -> Result<()> {
    let top_n = config.top_n;
    let solver = Solver::new(corpus, config)?;
    let kind = solver.strategy_kind();
    let mut history = GuessHistory::new();

    println!("Loaded {} words. Strategy: {}.", solver.corpus().len(), kind);
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if read == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let command = parts[0].to_lowercase();
        match command.as_str() {
            "help" | "h" | "?" => println!("{REPL_HELP}"),
            "quit" | "exit" | "q" => break,
            "suggest" | "s" | "top" | "t" => {
                let n = if command.starts_with('s') {
                    1
                } else {
                    parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(top_n)
                };
                match rank_with_progress(&solver, &history, n) {
                    Ok(ranked) => {
                        println!();
                        print_suggestions(&ranked, kind);
                        println!();
                        println!("Remaining possibilities: {}", solver.candidates(&history).len());
                        println!();
                    }
                    Err(err) => println!("{err}. Use 'reset' to start over."),
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane 01020");
                    continue;
                }

                let prev_count = solver.candidates(&history).len();
                if let Err(err) = history.record(parts[1], parts[2]) {
                    println!("{err}");
                    continue;
                }
                let remaining = solver.candidates(&history);

                println!();
                println!(
                    "Eliminated {} words ({} -> {})",
                    prev_count.saturating_sub(remaining.len()),
                    prev_count,
                    remaining.len()
                );

                if history.is_won() {
                    println!("Solved in {} guesses. Use 'reset' for a new game.", history.len());
                } else if history.is_complete() {
                    println!("Out of guesses. Use 'reset' for a new game.");
                } else if remaining.is_empty() {
                    println!("No words match this feedback. Use 'reset' to start over.");
                } else if remaining.len() <= 10 {
                    print_words(remaining.words());
                }
                println!();
            }
            "remaining" | "r" | "left" => {
                let remaining = solver.candidates(&history);
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 50 {
                    print_words(remaining.words());
                }
            }
            "reset" => {
                let count = history.reset();
                println!("Cleared {count} guesses. {} words available.", solver.corpus().len());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Interactive {
        strategy: StrategyArgs {
            top: 5,
            prune_width: 50,
            ..StrategyArgs::default()
        },
    });

    if let Command::Score { guess, answer } = &command {
        println!("{}", compute_feedback(guess, answer));
        return Ok(());
    }

    let corpus = Corpus::load(&cli.wordlist, cli.max_words)?;

    match command {
        Command::Score { .. } => {}
        Command::Filter { history } => {
            let candidates = filter_candidates(&history.to_history()?, &corpus);
            println!("{} candidates", candidates.len());
            print_words(candidates.words());
        }
        Command::Suggest { history, strategy } => {
            let history = history.to_history()?;
            let solver = Solver::new(corpus, strategy.to_config())?;
            print_suggestions(&solver.suggest(&history)?, solver.strategy_kind());
        }
        Command::Solve { target, strategy } => {
            let solver = Solver::new(corpus, strategy.to_config())?;
            println!("Solving for: {target}");
            println!();
            let history = solver.solve_for_target(&target)?;
            for (i, guess) in history.iter().enumerate() {
                println!("Guess {}: {} -> {}", i + 1, guess.word, guess.pattern);
            }
            println!();
            if history.is_won() {
                println!("Solved in {} guesses.", history.len());
            } else {
                println!("Failed to solve within {MAX_GUESSES} guesses.");
            }
        }
        Command::Bench { strategy } => {
            let solver = Solver::new(corpus, strategy.to_config())?;
            let label = format!(
                "self-playing {} words with {}",
                solver.corpus().len(),
                solver.strategy_kind()
            );
            let start = Instant::now();
            let distribution = with_progress(label, || solver.benchmark_guess_distribution())?;
            let elapsed = start.elapsed();

            let total: usize = distribution.iter().map(|(_, c)| c).sum();
            let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
            println!("Guess distribution:");
            for (guesses, count) in &distribution {
                let pct = *count as f64 / total.max(1) as f64 * 100.0;
                let bar = "#".repeat((*count * 40 / total.max(1)).max(1));
                println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
            }
            println!();
            println!("Average guesses: {:.3}", total_guesses as f64 / total.max(1) as f64);
            println!("Total words: {}", total);
            println!("Time elapsed: {:.2?}", elapsed);
        }
        Command::Interactive { strategy } => run_interactive(corpus, strategy.to_config())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
