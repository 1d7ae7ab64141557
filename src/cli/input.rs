//! Line-based console input
//!
//! Features:
//! - Blocking line reads from any `BufRead` (stdin in production)
//! - End-of-input detection
//! - Numbered-choice parsing

use std::io::BufRead;

use crate::error::TutorError;

/// Reads user answers one line at a time
pub struct InputHandler<R> {
    reader: R,
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        InputHandler { reader }
    }

    /// Read one line without its trailing newline.
    /// Returns `TutorError::EndOfInput` once the reader is exhausted.
    pub fn read_line(&mut self) -> Result<String, TutorError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TutorError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

/// Parse a 1-based selection in `1..=max`
pub fn parse_choice(input: &str, max: usize) -> Result<usize, TutorError> {
    let invalid = || TutorError::InputValidation {
        input: input.to_string(),
        max,
    };

    let choice: usize = input.trim().parse().map_err(|_| invalid())?;
    if (1..=max).contains(&choice) {
        Ok(choice)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline() {
        let mut input = InputHandler::new(Cursor::new("hola\r\nadiós\n"));
        assert_eq!(input.read_line().unwrap(), "hola");
        assert_eq!(input.read_line().unwrap(), "adiós");
        assert!(matches!(input.read_line(), Err(TutorError::EndOfInput)));
    }

    #[test]
    fn test_read_line_keeps_inner_spaces() {
        let mut input = InputHandler::new(Cursor::new("  We are happy \n"));
        assert_eq!(input.read_line().unwrap(), "  We are happy ");
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2", 3).unwrap(), 2);
        assert_eq!(parse_choice(" 3 ", 3).unwrap(), 3);
        assert!(matches!(
            parse_choice("0", 3),
            Err(TutorError::InputValidation { max: 3, .. })
        ));
        assert!(parse_choice("4", 3).is_err());
        assert!(parse_choice("-1", 3).is_err());
        assert!(parse_choice("abc", 3).is_err());
        assert!(parse_choice("", 3).is_err());
    }
}
