//! Prefix tree over Unicode scalar values.
//!
//! Each `char` of an inserted word is one edge. No normalization is applied.

use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_word = true;
    }

    /// True if `word` was inserted exactly.
    pub fn search(&self, word: &str) -> bool {
        self.node(word).is_some_and(|node| node.is_word)
    }

    /// True if any inserted word starts with `prefix`. The empty prefix always
    /// matches.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    fn node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod test {
    use super::Trie;

    #[test]
    fn words_and_prefixes() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("app");
        trie.insert("banana");

        assert!(trie.search("apple"));
        assert!(trie.search("app"));
        assert!(!trie.search("appl"));
        assert!(trie.has_prefix("appl"));
        assert!(trie.has_prefix("ban"));
        assert!(!trie.has_prefix("c"));
        assert!(!trie.search("bananas"));
    }

    #[test]
    fn empty_string() {
        let mut trie = Trie::new();
        assert!(trie.has_prefix(""));
        assert!(!trie.search(""));

        trie.insert("");
        assert!(trie.search(""));
    }

    #[test]
    fn unicode_edges() {
        let mut trie = Trie::new();
        trie.insert("naïve");
        assert!(trie.has_prefix("naï"));
        assert!(!trie.has_prefix("nai"));
    }
}
