//! Language Tutor - vocabulary and grammar quizzes in the terminal
//!
//! Single-session, in-memory CLI application.
//! Pick a language, then practise its seed lesson from a menu.

mod cli;
mod error;
mod languages;
mod session;

use std::io::{BufRead, Write};

use clap::Parser;
use cli::{parse_choice, Console};
use error::TutorError;
use languages::Language;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::Tutor;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "Language Tutor")]
#[command(about = "Practise vocabulary and grammar with small quizzes")]
struct Args {
    /// Language to practise (skips the startup prompt)
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Seed for the random generator, for repeatable quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Ask for a language until a valid number is entered.
/// Closed input is fatal.
fn select_language<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Language, TutorError> {
    loop {
        console.display.show_languages(&Language::ALL)?;
        console
            .display
            .prompt("Choose a language by entering the corresponding number: ")?;
        let line = console.input.read_line()?;

        let selected = parse_choice(&line, Language::ALL.len()).and_then(|position| {
            Language::from_position(position).ok_or_else(|| TutorError::InputValidation {
                input: line.clone(),
                max: Language::ALL.len(),
            })
        });

        match selected {
            Ok(language) => return Ok(language),
            Err(err @ TutorError::InputValidation { .. }) => {
                warn!(input = %line, "invalid language selection");
                console.display.show_warning(&err.to_string())?;
            }
            Err(err) => return Err(err),
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "error" };
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("⚠ Could not install logger: {e}");
    }
}

fn run(args: Args) -> Result<(), TutorError> {
    let mut console = Console::stdio(!args.no_color);

    let language = match args.language {
        Some(language) => language,
        None => select_language(&mut console)?,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tutor = Tutor::with_seed_lessons(language, rng);
    debug!(
        language = %tutor.language(),
        words = tutor.vocabulary().len(),
        rules = tutor.grammar_rules().len(),
        seed = ?args.seed,
        "session ready"
    );

    tutor.run_menu(&mut console)
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::{Display, InputHandler};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(
            InputHandler::new(Cursor::new(input.to_string())),
            Display::plain(Vec::new()),
        )
    }

    #[test]
    fn test_select_language() {
        let mut console = console("2\n");
        assert_eq!(select_language(&mut console).unwrap(), Language::Spanish);
    }

    #[test]
    fn test_select_language_reprompts_on_invalid_input() {
        let mut console = console("abc\n6\n0\n4\n");
        assert_eq!(select_language(&mut console).unwrap(), Language::Turkish);

        let text = String::from_utf8(console.display.writer().clone()).unwrap();
        assert_eq!(text.matches("Available languages:").count(), 4);
        assert!(text.contains("invalid selection 'abc': expected a number between 1 and 5"));
    }

    #[test]
    fn test_select_language_fails_on_closed_input() {
        let mut console = console("9\n");
        assert!(matches!(
            select_language(&mut console),
            Err(TutorError::EndOfInput)
        ));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["language-tutor", "--language", "italian", "--seed", "7"]);
        assert_eq!(args.language, Some(Language::Italian));
        assert_eq!(args.seed, Some(7));
        assert!(!args.no_color);
    }
}
