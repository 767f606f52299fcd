//! Contains the [`TokenStream`] struct and the [`Tokenizer`] that produces it.

use std::fmt::Debug;

use derive_more::Deref;

use crate::base::Handler;

use super::{
    cursor::{PatternCursor, SpecialCharacter, DASH_CHAR, EXCLAMATION_MARK_CHAR, NULL_CHAR},
    error::{
        Error, IncompleteRangeExpression, UnrecognizedCharacter, UnterminatedBracketExpression,
    },
    token::{
        CharacterListToken, LetterRangeToken, LiteralToken, NumberRangeToken, PathSeparatorToken,
        SingleCharacterToken, Token, WildcardToken,
    },
};

/// Is an ordered list of [`Token`]s lexed from a glob pattern.
///
/// This struct is the final output of the lexical analysis phase and is meant
/// to be walked front to back by a matching engine, without ever returning to
/// the pattern text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl TokenStream {
    /// Tokenizes the given glob pattern.
    ///
    /// This is a convenience over [`Tokenizer::tokenize`] with a freshly
    /// created [`Tokenizer`].
    ///
    /// # Parameters
    /// - `pattern`: The glob pattern to lex.
    /// - `handler`: Receives a diagnostic for every construct that only
    ///   tokenizes by recovery.
    ///
    /// # Returns
    /// The stream of tokens lexed from the pattern. Every pattern produces a
    /// stream; diagnostics never suppress output.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(pattern = %pattern))]
    pub fn tokenize(pattern: &str, handler: &impl Handler<Error>) -> Self {
        Tokenizer::new().tokenize(pattern, handler)
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}

/// Lexes glob patterns into [`TokenStream`]s.
///
/// The tokenizer owns the text buffer the token readers accumulate into. The
/// buffer is reset whenever a token is emitted and cleared again once a
/// pattern is exhausted, so one tokenizer can be reused across any number of
/// patterns.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    buffer: String,
}

impl Tokenizer {
    /// Creates a new [`Tokenizer`] with an empty accumulation buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes the given glob pattern.
    ///
    /// Each character is classified in a fixed priority order: bracket
    /// expression, single-character wildcard, wildcard, path separator and
    /// finally literal. A character that fits none of these (a stray `]`) is
    /// dropped and reported to the handler.
    ///
    /// Tokenization never fails. Malformed bracket expressions are resolved
    /// by recovery and reported as [`Error`]s to the handler, which is free
    /// to ignore them.
    pub fn tokenize(&mut self, pattern: &str, handler: &impl Handler<Error>) -> TokenStream {
        let mut tokens = Vec::new();
        let mut cursor = PatternCursor::new(pattern);

        while cursor.read_char() {
            if cursor.is_beginning_of_range_or_list() {
                tokens.push(self.read_range_or_list(&mut cursor, handler));
            } else if cursor.is_single_character_match() {
                tokens.push(Self::read_single_character_match());
            } else if cursor.is_wildcard_character_match() {
                tokens.push(Self::read_wildcard());
            } else if cursor.is_path_separator() {
                tokens.push(Self::read_path_separator());
            } else if cursor.is_valid_literal_character() {
                tokens.push(self.read_literal(&mut cursor));
            } else {
                handler.receive(
                    UnrecognizedCharacter {
                        character: cursor.current_char(),
                        position: cursor.position(),
                    }
                    .into(),
                );
            }
        }

        // The readers reset the buffer on every emitted token, but a reused
        // tokenizer must not carry text over into the next pattern.
        self.buffer.clear();

        tracing::debug!(count = tokens.len(), "tokenized glob pattern");

        TokenStream { tokens }
    }

    /// Reads a maximal run of literal characters.
    fn read_literal(&mut self, cursor: &mut PatternCursor<'_>) -> Token {
        self.accept_current_char(cursor);

        while !cursor.has_reached_end() && PatternCursor::is_literal(cursor.peek_char()) {
            cursor.read_char();
            self.accept_current_char(cursor);
        }

        LiteralToken {
            text: self.take_buffer(),
        }
        .into()
    }

    /// Reads a bracket expression, producing a character list or range token.
    fn read_range_or_list(
        &mut self,
        cursor: &mut PatternCursor<'_>,
        handler: &impl Handler<Error>,
    ) -> Token {
        let opening_position = cursor.position();
        let mut is_negated = false;
        let mut is_number_range = false;
        let mut is_letter_range = false;
        let mut is_char_list = false;

        if cursor.peek_char() == EXCLAMATION_MARK_CHAR {
            is_negated = true;
            cursor.read_char();
        }

        if cursor.peek_char().is_alphanumeric() {
            cursor.read_char();
            if cursor.peek_char() == DASH_CHAR {
                if cursor.current_char().is_alphabetic() {
                    is_letter_range = true;
                } else {
                    is_number_range = true;
                }
            } else {
                is_char_list = true;
            }

            self.accept_current_char(cursor);
        } else {
            // Anything else, a `]` included, is consumed as the first member
            // of a character list.
            is_char_list = true;
            if cursor.read_char() {
                self.accept_current_char(cursor);
            }
        }

        if is_letter_range || is_number_range {
            // skip over the dash char
            cursor.read_char();
        }

        let mut is_terminated = false;
        while cursor.read_char() {
            if cursor.is_end_of_range_or_list() {
                // Close brackets within brackets are escaped with another
                // close bracket, e.g. `[a]]` matches `a` or `]`.
                if cursor.peek_char() == SpecialCharacter::CloseBracket.as_char() {
                    self.accept_current_char(cursor);
                } else {
                    is_terminated = true;
                    break;
                }
            } else {
                self.accept_current_char(cursor);
            }
        }

        if !is_terminated {
            handler.receive(
                UnterminatedBracketExpression {
                    fragment: cursor.slice_from(opening_position).to_owned(),
                    position: opening_position,
                }
                .into(),
            );
        }

        let value = self.take_buffer();
        if is_char_list {
            return CharacterListToken {
                characters: value.chars().collect(),
            }
            .into();
        }

        let mut characters = value.chars();
        let start = characters.next().unwrap_or(NULL_CHAR);
        let end = characters.next().unwrap_or(NULL_CHAR);

        if end == NULL_CHAR {
            handler.receive(
                IncompleteRangeExpression {
                    fragment: cursor.slice_from(opening_position).to_owned(),
                    position: opening_position,
                }
                .into(),
            );
        }

        if is_letter_range {
            LetterRangeToken {
                start,
                end,
                is_negated,
            }
            .into()
        } else {
            NumberRangeToken {
                start,
                end,
                is_negated,
            }
            .into()
        }
    }

    fn read_single_character_match() -> Token {
        SingleCharacterToken.into()
    }

    fn read_wildcard() -> Token {
        WildcardToken.into()
    }

    fn read_path_separator() -> Token {
        PathSeparatorToken.into()
    }

    /// Appends the cursor's current character to the accumulation buffer.
    fn accept_current_char(&mut self, cursor: &PatternCursor<'_>) {
        self.buffer.push(cursor.current_char());
    }

    /// Returns the accumulated text, leaving the buffer empty for the next
    /// token.
    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}
