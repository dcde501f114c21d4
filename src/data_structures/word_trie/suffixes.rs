// Copyright (c) 2025 Word Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first enumeration of the leaf paths below a trie node.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator returned by [`TrieNode::suffixes`].
///
/// Walks the subtree with an explicit stack, so the depth of the trie never
/// translates into call-stack depth. Each call to `suffixes` walks afresh.
#[derive(Debug)]
pub struct Suffixes<'a> {
    /// Nodes still to visit, with their path relative to the starting node
    pending: Vec<(&'a TrieNode, String)>,
}

impl<'a> Suffixes<'a> {
    pub(super) fn new(start: &'a TrieNode) -> Self {
        let mut suffixes = Self {
            pending: Vec::with_capacity(start.children.len()),
        };
        suffixes.expand(start, "");
        suffixes
    }

    fn expand(&mut self, node: &'a TrieNode, path: &str) {
        self.pending
            .extend(node.children.iter().map(|(&c, child)| {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(path);
                child_path.push(c);
                (child, child_path)
            }));
    }
}

impl Iterator for Suffixes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.pending.pop() {
            self.expand(node, &path);
            if node.is_leaf {
                return Some(path);
            }
        }
        None
    }
}

impl FusedIterator for Suffixes<'_> {}
