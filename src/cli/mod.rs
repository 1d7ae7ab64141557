//! CLI Interface: console input and output
//!
//! # Components
//! - `input.rs`: Line reads and numbered-choice parsing
//! - `display.rs`: Prompts, menus and feedback rendering

pub mod display;
pub mod input;

use std::io::{self, BufRead, Write};

pub use display::Display;
pub use input::{parse_choice, InputHandler};

/// Paired input and output the session talks through
pub struct Console<R, W: Write> {
    pub input: InputHandler<R>,
    pub display: Display<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: InputHandler<R>, display: Display<W>) -> Self {
        Console { input, display }
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio(color: bool) -> Self {
        Console::new(
            InputHandler::new(io::stdin().lock()),
            Display::stdout(color),
        )
    }
}
