//! Error kinds surfaced by the tutor.

use thiserror::Error;

/// Errors emitted by the tutor session and the console layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    /// A grammar rule was tested but holds no example sentences.
    #[error("grammar rule '{rule}' has no examples to choose from")]
    EmptySequence { rule: String },
    /// A numbered selection was not a number in `1..=max`.
    #[error("invalid selection '{input}': expected a number between 1 and {max}")]
    InputValidation { input: String, max: usize },
    /// Standard input was closed while a read was pending.
    #[error("input closed")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
