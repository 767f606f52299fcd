//! Contains the [`Token`] enum and its variant structs.

use derive_more::From;
use enum_as_inner::EnumAsInner;

/// Represents a contiguous run of ordinary characters, matched verbatim.
///
/// A literal run is maximal: the tokenizer extends it until the next special
/// character or the end of the pattern.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralToken {
    /// Is the verbatim text of the run.
    pub text: String,
}

/// Represents the `*` wildcard, matching any run of characters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WildcardToken;

/// Represents the `?` wildcard, matching exactly one character.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SingleCharacterToken;

/// Represents the `/` path-separator character.
///
/// Separators are kept out of literal runs so that a matcher can reason
/// about path segments without re-scanning literal text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathSeparatorToken;

/// Represents an explicit character set, e.g. `[abc]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterListToken {
    /// Is the member characters of the set, in pattern order, duplicates
    /// included.
    pub characters: Vec<char>,
}

/// Represents an alphabetic character range, e.g. `[a-z]` or `[!a-z]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterRangeToken {
    /// Is the first character of the range.
    pub start: char,
    /// Is the last character of the range, or `'\0'` when the expression
    /// ended before one was given.
    pub end: char,
    /// Whether the range was negated with a leading `!`.
    pub is_negated: bool,
}

/// Represents a numeric character range, e.g. `[0-9]` or `[!0-9]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumberRangeToken {
    /// Is the first character of the range.
    pub start: char,
    /// Is the last character of the range, or `'\0'` when the expression
    /// ended before one was given.
    pub end: char,
    /// Whether the range was negated with a leading `!`.
    pub is_negated: bool,
}

/// Is an enumeration containing all kinds of tokens a glob pattern can
/// consist of.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Token {
    Literal(LiteralToken),
    Wildcard(WildcardToken),
    SingleCharacter(SingleCharacterToken),
    PathSeparator(PathSeparatorToken),
    CharacterList(CharacterListToken),
    LetterRange(LetterRangeToken),
    NumberRange(NumberRangeToken),
}
