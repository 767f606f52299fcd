//! The lexical module is responsible for converting a raw glob pattern into a stream of tokens that a matching engine can understand.

pub mod cursor;

pub mod token_stream;

pub mod token;

pub mod error;
pub use error::Error;
