//! Contains the error types that can occur while lexing a glob pattern.

use std::fmt::Display;

use crate::base::log::{Message, PatternDisplay, Severity};

/// Represents an error that occurred during the lexical analysis of a glob
/// pattern.
///
/// None of these stop the tokenizer: the lenient entry points recover from
/// every one of them and still produce a token stream. They are reported so
/// that strict callers can reject patterns that only tokenize by recovery.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum Error {
    #[error("Bracket expression is not terminated.")]
    UnterminatedBracketExpression(#[from] UnterminatedBracketExpression),
    #[error("Range expression is missing its end character.")]
    IncompleteRangeExpression(#[from] IncompleteRangeExpression),
    #[error("Character matches no glob syntax.")]
    UnrecognizedCharacter(#[from] UnrecognizedCharacter),
}

/// Pattern contains a bracket expression without its closing `]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub struct UnterminatedBracketExpression {
    /// The pattern text from the opening `[` to the end of the pattern.
    pub fragment: String,

    /// Byte offset of the opening `[` within the pattern.
    pub position: usize,
}

impl Display for UnterminatedBracketExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                "found a bracket expression without its closing `]`"
            ),
            PatternDisplay::new(
                &self.fragment,
                Some("this expression is treated as ending at the end of the pattern")
            )
        )
    }
}

/// Range expression ended before its end character was given, e.g. `[a-]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub struct IncompleteRangeExpression {
    /// The pattern text of the range expression.
    pub fragment: String,

    /// Byte offset of the opening `[` within the pattern.
    pub position: usize,
}

impl Display for IncompleteRangeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                "found a range expression without an end character"
            ),
            PatternDisplay::new(
                &self.fragment,
                Some("the missing end is filled in with the NUL character")
            )
        )
    }
}

/// Pattern contains a character that fits no token, such as a `]` outside of
/// any bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub struct UnrecognizedCharacter {
    /// The character that was dropped.
    pub character: char,

    /// Byte offset of the character within the pattern.
    pub position: usize,
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Warning,
                format!(
                    "dropped `{}` at byte {} because it matches no glob syntax",
                    self.character, self.position
                )
            )
        )
    }
}
