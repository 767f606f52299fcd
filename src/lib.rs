//! Lexical analysis for glob patterns.
//!
//! `globlex` turns a glob pattern into a flat, ordered stream of typed tokens
//! that a matching engine can walk in a single pass, without returning to the
//! pattern text.
//!
//! # Example
//!
//! ```
//! let tokens = globlex::tokenize("docs/*.md");
//!
//! assert_eq!(tokens.len(), 4);
//! assert!(tokens[2].is_wildcard());
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use base::{Error, Result, SilentHandler, VoidHandler};
use lexical::token_stream::TokenStream;

/// Converts the given glob pattern to tokens.
///
/// Tokenization never fails: characters that match no glob syntax are
/// dropped and malformed bracket expressions are resolved by recovery. Use
/// [`TokenStream::tokenize`] with a custom [`base::Handler`] to observe those
/// cases, or [`tokenize_strict`] to reject them.
#[must_use]
pub fn tokenize(pattern: &str) -> TokenStream {
    TokenStream::tokenize(pattern, &VoidHandler)
}

/// Converts the given glob pattern to tokens, rejecting malformed patterns.
///
/// # Errors
/// - If the pattern only tokenizes by recovery, i.e. it contains an
///   unterminated bracket expression, a range expression without an end
///   character or a character that matches no glob syntax.
pub fn tokenize_strict(pattern: &str) -> Result<TokenStream> {
    let handler = SilentHandler::new();

    let tokens = TokenStream::tokenize(pattern, &handler);

    if handler.has_received() {
        return Err(Error::Other(
            "An error occurred while tokenizing the glob pattern.",
        ));
    }

    Ok(tokens)
}
