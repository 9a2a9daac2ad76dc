use std::fmt::Display;

use crate::base::log::{LineDisplay, Message, Severity};

/// Represents an error that occurred during the lexical analysis of the source code.
///
/// Every variant records the line on which the offending lexeme began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Error {
    /// A character that matches no lexical rule.
    UnexpectedCharacter {
        /// Line of the character.
        line: usize,
        /// The character that was skipped.
        character: char,
    },
    /// A `"` that is never closed.
    UnterminatedString {
        /// Line of the opening quote.
        line: usize,
    },
    /// A `/*` that is never closed by `*/`.
    UnterminatedComment {
        /// Line of the opening `/*`.
        line: usize,
    },
}

impl Error {
    /// Line on which the offending lexeme began.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnterminatedComment { line } => *line,
        }
    }

    /// The plain diagnostic message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => "Unexpected character.",
            Self::UnterminatedString { .. } => "Unterminated string.",
            Self::UnterminatedComment { .. } => "Unterminated comment.",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = match self {
            Self::UnexpectedCharacter { character, .. } => {
                Some(format!("the character `{}` is skipped", character.escape_debug()))
            }
            Self::UnterminatedString { .. } => {
                Some("add a closing `\"` to end the string".to_string())
            }
            Self::UnterminatedComment { .. } => {
                Some("add a closing `*/` to end the comment".to_string())
            }
        };

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, self.message()),
            LineDisplay::new(self.line(), help)
        )
    }
}
