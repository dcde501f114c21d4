//! Data structures for the word dictionary.
//!
//! The dictionary is a thin facade; the real work happens in the word trie
//! defined here.

pub mod word_trie;

pub use word_trie::{Suffixes, TrieNode};
