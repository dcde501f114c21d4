// Copyright (c) 2025 Word Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! A character-level prefix tree holding a fixed vocabulary. The trie answers
//! three questions: whether a path exists (and is a complete word), which
//! complete words lie below a path, and which prefixes of a string are complete
//! words.
//!
//! # Features
//!
//! - Case-insensitive folding (configurable, fixed per trie)
//! - Whitespace trimming on every insertion and lookup
//! - Lazy, stack-based suffix enumeration
//! - Structural equality over whole subtrees
//!
//! # Example
//!
//! ```
//! use word_dictionary_lib::data_structures::word_trie::TrieNode;
//!
//! let mut root = TrieNode::new(false);
//! root.insert("pot");
//! root.insert("Potato");
//!
//! let pot = root.find("POT").unwrap();
//! assert!(pot.is_leaf());
//!
//! let mut suffixes: Vec<String> = pot.suffixes().collect();
//! suffixes.sort();
//! assert_eq!(suffixes, vec!["ato"]);
//!
//! assert_eq!(root.find_prefixes("potatoes"), vec!["pot", "potato"]);
//! ```
//!
//! # Mutation
//!
//! Only [`TrieNode::insert`] mutates a trie. Once a trie is shared behind a `&`
//! reference it is read-only, so any number of threads may query it at once.

mod node;
mod suffixes;

pub use node::TrieNode;
pub use suffixes::Suffixes;
