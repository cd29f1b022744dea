//! Node implementation for the Niihau Trie.
//!
//! Nodes are the fundamental building blocks of the trie, each owning its
//! children and the payloads whose key terminates at it.

use std::collections::BTreeMap;

/// A node in the Niihau Trie.
///
/// Each node represents a character in a key path. A node may be an internal
/// branch and a word terminus at the same time, and several payloads may share
/// one spelling.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    /// Map of characters to child nodes, ordered by character
    pub children: BTreeMap<char, TrieNode<V>>,

    /// Payloads whose key ends at this node, in insertion order
    pub values: Vec<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            values: Vec::new(),
        }
    }

    /// Whether at least one payload terminates here.
    pub fn is_terminal(&self) -> bool {
        !self.values.is_empty()
    }

    /// Whether the node carries neither payloads nor children.
    pub fn is_vacant(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// Follows `chars` from this node, returning the node at the end of the path.
    pub fn descend<I>(&self, chars: I) -> Option<&TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in chars {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Follows `chars` from this node, creating missing children on the way.
    pub fn descend_or_create<I>(&mut self, chars: I) -> &mut TrieNode<V>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in chars {
            node = node.children.entry(c).or_default();
        }
        node
    }

    /// Number of payloads stored at or beneath this node.
    pub fn subtree_len(&self) -> usize {
        self.values.len()
            + self
                .children
                .values()
                .map(TrieNode::subtree_len)
                .sum::<usize>()
    }

    /// Depth-first walk handing each payload together with its full key to `visit`.
    ///
    /// Payloads at a node come before those of its children; children are
    /// visited in ascending character order.
    pub fn walk<'a, F>(&'a self, key: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &'a V),
    {
        for value in &self.values {
            visit(key, value);
        }
        for (c, child) in &self.children {
            key.push(*c);
            child.walk(key, visit);
            key.pop();
        }
    }

    /// Collects clones of every payload at or beneath this node.
    pub fn collect_into(&self, out: &mut Vec<V>)
    where
        V: Clone,
    {
        out.extend(self.values.iter().cloned());
        for child in self.children.values() {
            child.collect_into(out);
        }
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_order_is_depth_first_by_character() {
        let mut root = TrieNode::new();
        root.descend_or_create("ba".chars()).values.push(2);
        root.descend_or_create("a".chars()).values.push(0);
        root.descend_or_create("ab".chars()).values.push(1);

        let mut seen = Vec::new();
        root.walk(&mut String::new(), &mut |key, value| {
            seen.push((key.to_string(), *value))
        });

        assert_eq!(
            seen,
            vec![
                ("a".to_string(), 0),
                ("ab".to_string(), 1),
                ("ba".to_string(), 2)
            ]
        );
        assert_eq!(root.subtree_len(), 3);
    }

    #[test]
    fn test_vacant_node() {
        let node: TrieNode<u8> = TrieNode::new();
        assert!(node.is_vacant());
        assert!(!node.is_terminal());
        assert!(node.descend("x".chars()).is_none());
        assert!(node.descend("".chars()).is_some());
    }
}
