// Copyright (c) 2025 Word Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! A [`TrieNode`] is both a single node and, when used as a root, the whole trie.
//! Every node exclusively owns its children, so the structure is a plain ownership
//! tree with no shared or back references.

use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

use fnv::FnvHashMap;

use super::suffixes::Suffixes;

/// A node in the word trie.
///
/// The path of characters from the root to a node spells a string; the node is a
/// leaf when that string was inserted as a complete word.
#[derive(Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Child nodes keyed by the next character of the path
    pub(super) children: FnvHashMap<char, TrieNode>,

    /// Whether the path to this node is a complete word
    pub(super) is_leaf: bool,

    /// Case sensitivity shared by every node of the trie
    pub(super) case_sensitive: bool,
}

impl TrieNode {
    /// Creates an empty node.
    ///
    /// Every node created below this one by [`TrieNode::insert`] carries the same
    /// `case_sensitive` flag.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            children: FnvHashMap::default(),
            is_leaf: false,
            case_sensitive,
        }
    }

    /// Returns `true` if the path to this node is a complete word.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns the case sensitivity fixed when the trie was created.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the direct child for `c` without any normalization.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the number of direct children.
    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Trims `word` and lower-cases it when the trie is case-insensitive.
    ///
    /// This is the normalization applied by every lookup and insertion. Folding is
    /// per character, so a character folds the same way wherever it appears
    /// (`str::to_lowercase` would turn a final `Σ` into `ς`).
    pub fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let trimmed = word.trim();
        if self.case_sensitive {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(trimmed.chars().flat_map(char::to_lowercase).collect())
        }
    }

    /// Inserts a word below this node.
    ///
    /// The word is normalized first. An empty result is a no-op: no node is
    /// created and no leaf flag changes. Inserting the same word twice leaves the
    /// trie exactly as a single insertion would.
    pub fn insert(&mut self, word: &str) {
        let word = self.normalize(word);
        if word.is_empty() {
            return;
        }

        let case_sensitive = self.case_sensitive;
        let mut node = self;
        for c in word.chars() {
            node = node
                .children
                .entry(c)
                .or_insert_with(|| TrieNode::new(case_sensitive));
        }
        node.is_leaf = true;
    }

    /// Descends along `word` and returns the node reached.
    ///
    /// The returned node need not be a leaf: finding a path is distinct from the
    /// path being a complete word. An empty (or all-whitespace) `word` returns
    /// `self`.
    pub fn find(&self, word: &str) -> Option<&TrieNode> {
        let word = self.normalize(word);
        word.chars().try_fold(self, |node, c| node.children.get(&c))
    }

    /// Returns an iterator over every leaf path below this node.
    ///
    /// Each item is the string of characters from this node (exclusive) to the leaf
    /// (inclusive). The order of items is unspecified; sort if it matters.
    pub fn suffixes(&self) -> Suffixes<'_> {
        Suffixes::new(self)
    }

    /// Returns every prefix of `string` that is a complete word below this node.
    ///
    /// Prefixes come out shortest first. The walk stops at the first character
    /// without a matching child.
    pub fn find_prefixes(&self, string: &str) -> Vec<String> {
        let string = self.normalize(string);
        let mut prefixes = Vec::new();
        let mut prefix = String::with_capacity(string.len());
        let mut node = self;

        for c in string.chars() {
            node = match node.children.get(&c) {
                Some(next) => next,
                None => break,
            };
            prefix.push(c);
            if node.is_leaf {
                prefixes.push(prefix.clone());
            }
        }

        prefixes
    }

    /// Returns the number of complete words strictly below this node.
    pub fn len(&self) -> usize {
        let mut pending: Vec<&TrieNode> = self.children.values().collect();
        let mut words = 0;
        while let Some(node) = pending.pop() {
            words += usize::from(node.is_leaf);
            pending.extend(node.children.values());
        }
        words
    }

    /// Returns `true` if no word has been inserted below this node.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<char> = self.children.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("TrieNode")
            .field("is_leaf", &self.is_leaf)
            .field("case_sensitive", &self.case_sensitive)
            .field("children", &keys)
            .finish()
    }
}
