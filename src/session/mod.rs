//! Session Management: lesson data, quizzes and progress
//!
//! # Components
//! - `tutor.rs`: Tutor session, the two quizzes and the menu loop
//! - `quiz.rs`: Multiple-choice option building
//! - `grammar.rs`: Grammar answer verification strategies
//! - `state.rs`: Score and ProgressRecord
//! - `store.rs`: Insertion-ordered keyed store

pub mod grammar;
pub mod quiz;
pub mod state;
pub mod store;
pub mod tutor;

pub use state::{ProgressRecord, Score};
pub use tutor::Tutor;
