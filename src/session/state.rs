//! Score and progress tracking
//!
//! Maintains:
//! - Per-run score (correct answers out of items asked)
//! - Last-computed fraction per test mode

use std::fmt;

/// Result of one test run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn new(total: u32) -> Self {
        Score { correct: 0, total }
    }

    pub fn record_correct(&mut self) {
        self.correct += 1;
    }

    /// Fraction correct (0.0-1.0); an empty run counts as 0.0
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.2}%)", self.correct, self.total, self.percentage())
    }
}

/// Which quiz a score belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestMode {
    Vocabulary,
    Grammar,
}

/// Last-computed score fraction per mode. `None` until the mode is run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressRecord {
    pub vocabulary: Option<f64>,
    pub grammar: Option<f64>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the fraction for `mode`; earlier runs are not accumulated
    pub fn record(&mut self, mode: TestMode, score: &Score) {
        let fraction = score.fraction();
        match mode {
            TestMode::Vocabulary => self.vocabulary = Some(fraction),
            TestMode::Grammar => self.grammar = Some(fraction),
        }
    }
}
