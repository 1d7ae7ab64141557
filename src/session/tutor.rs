//! Tutor session: lesson data, the two quizzes and the menu loop

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::cli::Console;
use crate::error::TutorError;
use crate::languages::Language;

use super::grammar::{grade, Verdict};
use super::quiz::build_options;
use super::state::{ProgressRecord, Score, TestMode};
use super::store::OrderedStore;

/// A word's translation and usage examples
#[derive(Clone, Debug, PartialEq)]
pub struct VocabularyEntry {
    pub translation: String,
    pub examples: Vec<String>,
}

/// A grammar rule's explanation and example sentences
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarRule {
    pub description: String,
    pub examples: Vec<String>,
}

/// Main menu selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Vocabulary,
    Grammar,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Vocabulary),
            "2" => Some(MenuChoice::Grammar),
            "3" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// How a typed vocabulary answer was interpreted
enum Selection {
    Chosen(usize),
    OutOfRange,
    NotANumber,
}

impl Selection {
    fn parse(input: &str, option_count: usize) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) if n >= 1 && (n as usize) <= option_count => Selection::Chosen(n as usize - 1),
            Ok(_) => Selection::OutOfRange,
            Err(_) => Selection::NotANumber,
        }
    }
}

/// Translations of every word except `word`, in insertion order
fn other_translations<'a>(
    vocabulary: &'a OrderedStore<VocabularyEntry>,
    word: &str,
) -> Vec<&'a str> {
    vocabulary
        .iter()
        .filter(|(w, _)| *w != word)
        .map(|(_, entry)| entry.translation.as_str())
        .collect()
}

/// One learner's session for a single language
pub struct Tutor<G = StdRng> {
    language: Language,
    vocabulary: OrderedStore<VocabularyEntry>,
    grammar_rules: OrderedStore<GrammarRule>,
    progress: ProgressRecord,
    rng: G,
}

impl<G: Rng> Tutor<G> {
    /// Session with no vocabulary or grammar loaded
    pub fn new(language: Language, rng: G) -> Self {
        Tutor {
            language,
            vocabulary: OrderedStore::new(),
            grammar_rules: OrderedStore::new(),
            progress: ProgressRecord::new(),
            rng,
        }
    }

    /// Session preloaded with the language's seed lesson
    pub fn with_seed_lessons(language: Language, rng: G) -> Self {
        let mut tutor = Tutor::new(language, rng);
        let profile = language.profile();

        for &(word, translation) in profile.vocabulary {
            tutor.add_word(word, translation);
        }
        for &(name, description, examples) in profile.grammar {
            tutor.add_grammar_rule(
                name,
                description,
                examples.iter().map(|e| e.to_string()).collect(),
            );
        }

        tutor
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn vocabulary(&self) -> &OrderedStore<VocabularyEntry> {
        &self.vocabulary
    }

    pub fn grammar_rules(&self) -> &OrderedStore<GrammarRule> {
        &self.grammar_rules
    }

    /// Insert or silently overwrite a word
    pub fn add_vocabulary(
        &mut self,
        word: impl Into<String>,
        translation: impl Into<String>,
        examples: Vec<String>,
    ) {
        self.vocabulary.insert(
            word,
            VocabularyEntry {
                translation: translation.into(),
                examples,
            },
        );
    }

    /// Add a word with no usage examples
    pub fn add_word(&mut self, word: impl Into<String>, translation: impl Into<String>) {
        self.add_vocabulary(word, translation, Vec::new());
    }

    /// Insert or silently overwrite a rule. Empty `examples` is accepted here
    /// and only rejected when the rule is tested.
    pub fn add_grammar_rule(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        examples: Vec<String>,
    ) {
        self.grammar_rules.insert(
            name,
            GrammarRule {
                description: description.into(),
                examples,
            },
        );
    }

    /// Multiple-choice quiz over every word.
    /// Returns `None` when there is nothing to test.
    pub fn run_vocabulary_test<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Score>, TutorError> {
        if self.vocabulary.is_empty() {
            console
                .display
                .show_notice("No vocabulary words available for testing.")?;
            return Ok(None);
        }

        let mut score = Score::new(self.vocabulary.len() as u32);

        for (word, entry) in self.vocabulary.iter() {
            let others = other_translations(&self.vocabulary, word);
            let options = build_options(&entry.translation, &others, &mut self.rng);
            debug!(word, ?options, "vocabulary options built");

            console.display.show_vocabulary_question(word, &options)?;
            console.display.prompt("Enter the number of your answer: ")?;
            let answer = console.input.read_line()?;

            match Selection::parse(&answer, options.len()) {
                Selection::Chosen(idx) if options[idx] == entry.translation => {
                    score.record_correct();
                    console.display.show_correct()?;
                }
                Selection::Chosen(idx) => {
                    debug!(word, chosen = %options[idx], "wrong translation");
                    console.display.show_incorrect(&format!(
                        "Incorrect. The correct translation is '{}'.",
                        entry.translation
                    ))?;
                }
                Selection::OutOfRange => {
                    warn!(word, input = %answer, "answer out of range");
                    console
                        .display
                        .show_warning("Invalid input. Skipping this word.")?;
                }
                Selection::NotANumber => {
                    warn!(word, input = %answer, "answer is not a number");
                    console
                        .display
                        .show_warning("Invalid input. Please enter a number.")?;
                }
            }
        }

        console.display.show_score(&score)?;
        self.progress.record(TestMode::Vocabulary, &score);
        info!(correct = score.correct, total = score.total, "vocabulary test finished");
        Ok(Some(score))
    }

    /// Free-text exercise for every grammar rule.
    /// Returns `None` when there is nothing to test.
    pub fn run_grammar_test<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Score>, TutorError> {
        if self.grammar_rules.is_empty() {
            console
                .display
                .show_notice("No grammar rules available for testing.")?;
            return Ok(None);
        }

        let mut score = Score::new(self.grammar_rules.len() as u32);

        for (name, rule) in self.grammar_rules.iter() {
            let example = rule
                .examples
                .choose(&mut self.rng)
                .ok_or_else(|| TutorError::EmptySequence {
                    rule: name.to_string(),
                })?;

            console
                .display
                .show_grammar_exercise(name, &rule.description, example)?;
            console.display.prompt("Enter your own example: ")?;
            let answer = console.input.read_line()?;

            let verdict = grade(name, self.language, &answer);
            debug!(rule = name, ?verdict, "grammar answer graded");
            if verdict.earns_point() {
                score.record_correct();
            }
            match verdict {
                Verdict::Correct => console.display.show_correct()?,
                Verdict::Incorrect => console
                    .display
                    .show_incorrect("Incorrect. The verb does not agree with the subject.")?,
                Verdict::WorkInProgress => console
                    .display
                    .show_notice("This feature is a work in progress. Keep practicing!")?,
            }
        }

        console.display.show_score(&score)?;
        self.progress.record(TestMode::Grammar, &score);
        info!(correct = score.correct, total = score.total, "grammar test finished");
        Ok(Some(score))
    }

    /// Menu loop. Ends on "3" or when input is closed.
    pub fn run_menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), TutorError> {
        console.display.show_welcome(self.language)?;

        loop {
            console.display.show_menu()?;
            console.display.prompt("Enter your choice (1-3): ")?;

            let line = match console.input.read_line() {
                Ok(line) => line,
                Err(TutorError::EndOfInput) => {
                    info!("input closed at menu");
                    break;
                }
                Err(e) => return Err(e),
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::Vocabulary) => self.run_vocabulary_test(console),
                Some(MenuChoice::Grammar) => self.run_grammar_test(console),
                Some(MenuChoice::Quit) => break,
                None => {
                    warn!(input = %line, "invalid menu choice");
                    console
                        .display
                        .show_warning("Invalid choice. Please enter a number between 1 and 3.")?;
                    continue;
                }
            };

            match outcome {
                Ok(_) => {}
                Err(TutorError::EndOfInput) => {
                    info!("input closed during a test");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        console.display.show_progress(&self.progress)?;
        console.display.show_goodbye()?;
        Ok(())
    }
}
