//! Word Dictionary Library
//!
//! A word dictionary built on a character-level prefix tree. Given a fixed
//! vocabulary it answers whether a word exists, which words start with a prefix,
//! and which prefixes of a string are themselves words.
//!
//! # Architecture
//!
//! - [`data_structures::word_trie`] holds the trie: insertion, descent, suffix
//!   and prefix enumeration, optional case folding
//! - [`dictionary`] wraps a trie root, normalizes queries and sorts results;
//!   [`dictionary::source`] loads word lists from plain or gzipped files
//! - [`config`] and [`error`] carry the layered configuration and error types
//!   shared with the command-line binary
//!
//! A dictionary is built in one pass and never mutated afterwards, so it can be
//! shared between threads by reference.

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, DictionaryResult};

/// Version information for the word dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
