//! Contains the [`PatternCursor`] struct, the character-level reader the
//! tokenizer drives over a glob pattern.

use std::{iter::Peekable, str::CharIndices};

use getset::CopyGetters;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Sentinel returned by [`PatternCursor::peek_char`] once the end of the
/// pattern is reached, and standing in for the missing `end` of a truncated
/// range expression.
pub const NULL_CHAR: char = '\0';

/// Marks a bracket expression as negated when it is the first character after
/// the opening bracket, e.g. `[!a-z]`.
pub const EXCLAMATION_MARK_CHAR: char = '!';

/// Separates the start and end characters of a range expression, e.g. `[a-z]`.
pub const DASH_CHAR: char = '-';

/// The path-separator character. It is a fixed constant of the pattern
/// grammar, not a runtime configuration.
pub const PATH_SEPARATOR_CHAR: char = '/';

/// Is an enumeration of the characters that carry special meaning at the top
/// level of a glob pattern.
///
/// Every classification predicate of the [`PatternCursor`] is backed by this
/// set, so the special set and the literal set (its complement) cannot drift
/// apart. Note that `!` and `-` are absent: they are significant only inside
/// a bracket expression and lex as ordinary literal characters elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum SpecialCharacter {
    /// Opens a bracket expression (`[`).
    OpenBracket,
    /// Closes a bracket expression (`]`).
    CloseBracket,
    /// Matches any run of characters (`*`).
    Wildcard,
    /// Matches exactly one character (`?`).
    SingleCharacter,
    /// Matches the path-separator character (`/`).
    PathSeparator,
}

impl SpecialCharacter {
    /// Gets the character representation of the special character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::OpenBracket => '[',
            Self::CloseBracket => ']',
            Self::Wildcard => '*',
            Self::SingleCharacter => '?',
            Self::PathSeparator => PATH_SEPARATOR_CHAR,
        }
    }
}

/// Is an error that is returned when a character cannot be converted into a
/// [`SpecialCharacter`] in the [`TryFrom`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("the character carries no special meaning in a glob pattern.")]
pub struct SpecialCharacterParseError;

impl TryFrom<char> for SpecialCharacter {
    type Error = SpecialCharacterParseError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|special| special.as_char() == character)
            .ok_or(SpecialCharacterParseError)
    }
}

/// Linear, single-direction reader over a glob pattern with one-character
/// lookahead.
///
/// The cursor has no error states: reads past the end of the pattern report
/// `false` or the [`NULL_CHAR`] sentinel instead of failing. Its only side
/// effect is advancing its own position.
#[derive(Debug, Clone, CopyGetters)]
pub struct PatternCursor<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Get the character the cursor is positioned on.
    ///
    /// Undefined (the [`NULL_CHAR`] sentinel) before the first successful
    /// [`PatternCursor::read_char`].
    #[get_copy = "pub"]
    current_char: char,
    /// Get the byte offset of the current character within the pattern.
    #[get_copy = "pub"]
    position: usize,
}

impl<'a> PatternCursor<'a> {
    /// Creates a new [`PatternCursor`] positioned before the first character
    /// of the given pattern.
    #[must_use]
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            chars: pattern.char_indices().peekable(),
            current_char: NULL_CHAR,
            position: 0,
        }
    }

    /// Advances the cursor to the next character.
    ///
    /// Returns `false` and leaves the position untouched when no characters
    /// remain.
    pub fn read_char(&mut self) -> bool {
        match self.chars.next() {
            Some((position, character)) => {
                self.position = position;
                self.current_char = character;
                true
            }
            None => false,
        }
    }

    /// Gets the next character without consuming it, or [`NULL_CHAR`] when at
    /// the end of the pattern.
    pub fn peek_char(&mut self) -> char {
        self.chars.peek().map_or(NULL_CHAR, |&(_, character)| character)
    }

    /// Whether no further characters can be read.
    pub fn has_reached_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// Gets the pattern text from the given byte offset through the current
    /// character.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.pattern[start..self.position + self.current_char.len_utf8()]
    }

    /// Whether the current character opens a bracket expression.
    #[must_use]
    pub fn is_beginning_of_range_or_list(&self) -> bool {
        matches!(self.classification(), Some(SpecialCharacter::OpenBracket))
    }

    /// Whether the current character closes a bracket expression.
    #[must_use]
    pub fn is_end_of_range_or_list(&self) -> bool {
        matches!(self.classification(), Some(SpecialCharacter::CloseBracket))
    }

    /// Whether the current character matches exactly one character (`?`).
    #[must_use]
    pub fn is_single_character_match(&self) -> bool {
        matches!(self.classification(), Some(SpecialCharacter::SingleCharacter))
    }

    /// Whether the current character matches any run of characters (`*`).
    #[must_use]
    pub fn is_wildcard_character_match(&self) -> bool {
        matches!(self.classification(), Some(SpecialCharacter::Wildcard))
    }

    /// Whether the current character is the path-separator character.
    #[must_use]
    pub fn is_path_separator(&self) -> bool {
        matches!(self.classification(), Some(SpecialCharacter::PathSeparator))
    }

    /// Whether the current character can belong to a literal run.
    #[must_use]
    pub fn is_valid_literal_character(&self) -> bool {
        Self::is_literal(self.current_char)
    }

    /// Whether the given character can belong to a literal run.
    ///
    /// The literal set is defined by exclusion: any character without a
    /// special classification is literal-eligible.
    #[must_use]
    pub fn is_literal(character: char) -> bool {
        SpecialCharacter::try_from(character).is_err()
    }

    fn classification(&self) -> Option<SpecialCharacter> {
        SpecialCharacter::try_from(self.current_char).ok()
    }
}
