// Copyright (c) 2025 Word Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary facade over the word trie.
//!
//! A [`Dictionary`] is built once from a word list and is read-only afterwards.
//! Queries trim surrounding whitespace and, unless the dictionary is
//! case-sensitive, fold to lower case before touching the trie. Result lists are
//! always sorted.
//!
//! # Example
//!
//! ```
//! use word_dictionary_lib::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["a", "ab", "abs", "absolute", "be", "bee"]);
//!
//! assert!(dictionary.exists("BEE"));
//! assert!(!dictionary.exists("absol"));
//! assert_eq!(dictionary.starting_with("abs"), vec!["abs", "absolute"]);
//! assert_eq!(dictionary.prefixes("absolutely"), vec!["a", "ab", "abs", "absolute"]);
//! ```

pub mod source;

use std::fmt::{Debug, Formatter};

use serde_json::Value;

use crate::data_structures::word_trie::TrieNode;
use crate::error::{DictionaryError, DictionaryResult};

/// A fixed vocabulary answering exact, prefix and prefix-of queries.
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary {
    root: TrieNode,
}

impl Dictionary {
    /// Builds a dictionary from a word list.
    ///
    /// Every word is trimmed, folded when `case_sensitive` is false, and inserted.
    /// Blank entries are skipped.
    pub fn new<I>(words: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut root = TrieNode::new(case_sensitive);
        for word in words {
            root.insert(word.as_ref());
        }
        tracing::trace!(words = root.len(), case_sensitive, "Dictionary built");
        Self { root }
    }

    /// Builds a case-insensitive dictionary from a word list.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(words, false)
    }

    /// Builds a dictionary from an untyped JSON word list.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidArgument`] if `value` is not an array.
    /// Elements that are not strings are inserted by their text form; `null`
    /// counts as an empty entry.
    pub fn from_json(value: &Value, case_sensitive: bool) -> DictionaryResult<Self> {
        let Value::Array(items) = value else {
            return Err(DictionaryError::InvalidArgument(format!(
                "word list should be an array of strings, got {}",
                json_kind(value)
            )));
        };

        Ok(Self::new(items.iter().map(json_word), case_sensitive))
    }

    /// Returns whether lookups distinguish upper and lower case.
    pub fn case_sensitive(&self) -> bool {
        self.root.case_sensitive()
    }

    /// Returns `true` if `word` is a complete word in the dictionary.
    ///
    /// A word that only exists as the prefix of longer words is not found.
    pub fn exists(&self, word: &str) -> bool {
        self.root.find(word).is_some_and(TrieNode::is_leaf)
    }

    /// Returns every word starting with `prefix`, sorted ascending.
    ///
    /// The prefix itself is included when it is a word. An unmatched prefix
    /// yields an empty list.
    pub fn starting_with(&self, prefix: &str) -> Vec<String> {
        let prefix = self.root.normalize(prefix);
        let Some(node) = self.root.find(&prefix) else {
            return Vec::new();
        };

        let mut words: Vec<String> = node
            .suffixes()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect();
        if node.is_leaf() {
            words.push(prefix.into_owned());
        }

        words.sort_unstable();
        words
    }

    /// Returns every prefix of `string` that is a word, sorted ascending.
    pub fn prefixes(&self, string: &str) -> Vec<String> {
        let string = self.root.normalize(string);
        let mut prefixes = self.root.find_prefixes(&string);
        prefixes.sort_unstable();
        prefixes
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the root of the underlying trie.
    pub fn trie(&self) -> &TrieNode {
        &self.root
    }
}

impl Debug for Dictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("case_sensitive", &self.case_sensitive())
            .field("words", &self.len())
            .finish()
    }
}

fn json_word(value: &Value) -> String {
    match value {
        Value::String(word) => word.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
