//! Console output and prompt rendering
//!
//! Features:
//! - Line-based prompts, menus and numbered option lists
//! - Colour-coded feedback (green correct, red incorrect) via crossterm
//! - Plain mode for piped output and tests

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

use crate::languages::Language;
use crate::session::{ProgressRecord, Score};

/// Console display manager
pub struct Display<W: Write> {
    out: W,
    /// Whether ANSI colours are emitted
    color: bool,
}

impl Display<io::Stdout> {
    /// Display writing to stdout
    pub fn stdout(color: bool) -> Self {
        Display::new(io::stdout(), color)
    }
}

impl<W: Write> Display<W> {
    pub fn new(out: W, color: bool) -> Self {
        Display { out, color }
    }

    /// Display without any colour codes
    #[allow(dead_code)]
    pub fn plain(out: W) -> Self {
        Display::new(out, false)
    }

    /// Access the underlying writer
    #[allow(dead_code)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print a prompt without a newline and flush so it is visible before the read
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Yellow, text)?;
        self.out.flush()
    }

    /// Numbered list of languages for the startup prompt
    pub fn show_languages(&mut self, languages: &[Language]) -> io::Result<()> {
        self.line("Available languages:")?;
        for (i, language) in languages.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, language)?;
        }
        Ok(())
    }

    pub fn show_welcome(&mut self, language: Language) -> io::Result<()> {
        self.colored(
            Color::Cyan,
            &format!("Welcome to the {language} Language Tutor!\n"),
        )?;
        self.out.flush()
    }

    pub fn show_menu(&mut self) -> io::Result<()> {
        self.line("\nChoose a learning phase:")?;
        self.line("1. Vocabulary")?;
        self.line("2. Grammar")?;
        self.line("3. Quit")
    }

    /// Informational notice (empty lessons, unchecked rules)
    pub fn show_notice(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::DarkGrey, text)?;
        self.line("")
    }

    /// Input that could not be accepted
    pub fn show_warning(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Magenta, text)?;
        self.line("")
    }

    /// Word to translate followed by numbered options
    pub fn show_vocabulary_question(&mut self, word: &str, options: &[String]) -> io::Result<()> {
        writeln!(self.out, "\nTranslate '{word}':")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, option)?;
        }
        Ok(())
    }

    pub fn show_grammar_exercise(
        &mut self,
        rule: &str,
        description: &str,
        example: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "\nApply the rule: {rule}")?;
        writeln!(self.out, "Description: {description}")?;
        writeln!(self.out, "Example: {example}")
    }

    pub fn show_correct(&mut self) -> io::Result<()> {
        self.colored(Color::Green, "Correct!")?;
        self.line("")
    }

    pub fn show_incorrect(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Red, text)?;
        self.line("")
    }

    /// Final score line for a test run
    pub fn show_score(&mut self, score: &Score) -> io::Result<()> {
        self.out.write_all(b"\nYour score: ")?;
        let color = if score.fraction() > 0.9 {
            Color::Green
        } else if score.fraction() > 0.5 {
            Color::Yellow
        } else {
            Color::Red
        };
        self.colored(color, &score.to_string())?;
        self.line("")?;
        self.out.flush()
    }

    /// Last-computed score per mode, shown when the session ends
    pub fn show_progress(&mut self, progress: &ProgressRecord) -> io::Result<()> {
        let describe = |fraction: Option<f64>| match fraction {
            Some(f) => format!("{:.2}%", f * 100.0),
            None => "not attempted".to_string(),
        };

        self.line("\nSession progress:")?;
        writeln!(self.out, "Vocabulary: {}", describe(progress.vocabulary))?;
        writeln!(self.out, "Grammar: {}", describe(progress.grammar))
    }

    pub fn show_goodbye(&mut self) -> io::Result<()> {
        self.colored(Color::Cyan, "Goodbye!\n")?;
        self.out.flush()
    }
}
