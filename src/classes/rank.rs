//! Rank index
//!
//! Flattens a category table into a single prefix -> rank mapping and
//! answers longest-prefix queries against it. Lookups walk a byte trie
//! from every anchor position of a class name instead of scanning all
//! known prefixes.

use std::collections::{BTreeMap, HashMap};

use crate::config::SortConfig;

/// Characters after which a known prefix may start inside a class name
///
/// `tw-flex` (namespaced), `-mt-4` (negative value) and `!bg-red-500`
/// (important modifier) all rank by the prefix following the mark.
const ANCHOR_MARKS: [char; 3] = ['-', '!', ':'];

/// A known prefix located inside a class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// The matched prefix text
    pub prefix: &'a str,
    /// Byte offset of the prefix inside the class name
    pub start: usize,
    /// Rank of the prefix
    pub rank: usize,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(u8, usize)>,
    rank: Option<usize>,
}

/// Byte trie over all known prefixes
#[derive(Debug, Clone)]
struct PrefixTrie {
    nodes: Vec<TrieNode>,
}

impl PrefixTrie {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|(b, _)| *b == byte)
            .map(|(_, next)| *next)
    }

    fn insert(&mut self, key: &str, rank: usize) {
        let mut node = 0;
        for &byte in key.as_bytes() {
            node = match self.child(node, byte) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.push((byte, next));
                    next
                }
            };
        }
        self.nodes[node].rank = Some(rank);
    }

    /// Longest key that is a prefix of `text`, as `(length, rank)`
    fn longest_prefix(&self, text: &str) -> Option<(usize, usize)> {
        let mut node = 0;
        let mut best = None;
        for (idx, &byte) in text.as_bytes().iter().enumerate() {
            match self.child(node, byte) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(rank) = self.nodes[node].rank {
                best = Some((idx + 1, rank));
            }
        }
        best
    }
}

/// Prefix -> rank mapping built from a category table
#[derive(Debug, Clone)]
pub struct RankIndex {
    ranks: HashMap<String, usize>,
    trie: PrefixTrie,
}

impl RankIndex {
    /// Build an index by walking `order` and each category's prefixes
    ///
    /// Ranks start at 0 and increase by one per declared prefix. A prefix
    /// declared more than once keeps the rank of its last declaration.
    /// Names in `order` without a category are skipped; callers validate
    /// the table first (see [`SortConfig::validate`]).
    pub fn build(categories: &BTreeMap<String, Vec<String>>, order: &[String]) -> Self {
        let mut index = Self {
            ranks: HashMap::new(),
            trie: PrefixTrie::new(),
        };
        let mut rank = 0;

        for name in order {
            let Some(prefixes) = categories.get(name) else {
                tracing::debug!(category = %name, "category missing from table, skipped");
                continue;
            };
            for prefix in prefixes {
                if prefix.is_empty() {
                    continue;
                }
                index.ranks.insert(prefix.clone(), rank);
                index.trie.insert(prefix, rank);
                rank += 1;
            }
        }

        index
    }

    /// Rank of an exact prefix
    pub fn rank(&self, prefix: &str) -> Option<usize> {
        self.ranks.get(prefix).copied()
    }

    /// Number of distinct prefixes
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Find the longest known prefix inside `class`
    ///
    /// A prefix counts when the class starts with it, when it follows one of
    /// the anchor marks outside arbitrary-value brackets, or when it follows
    /// a single leading `_`. Equal lengths keep the earliest anchor.
    pub fn longest_match<'a>(&self, class: &'a str) -> Option<PrefixMatch<'a>> {
        let mut best: Option<PrefixMatch<'a>> = None;

        for start in anchor_positions(class) {
            let Some((len, rank)) = self.trie.longest_prefix(&class[start..]) else {
                continue;
            };
            if best.map_or(true, |found| len > found.prefix.len()) {
                best = Some(PrefixMatch {
                    prefix: &class[start..start + len],
                    start,
                    rank,
                });
            }
        }

        best
    }
}

impl Default for RankIndex {
    fn default() -> Self {
        let config = SortConfig::default();
        Self::build(&config.categories, &config.category_order)
    }
}

/// Byte offsets where a prefix lookup may start
fn anchor_positions(class: &str) -> Vec<usize> {
    let mut anchors = vec![0];
    if class.starts_with('_') {
        anchors.push(1);
    }

    let mut depth = 0usize;
    for (idx, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && ANCHOR_MARKS.contains(&ch) => {
                let next = idx + ch.len_utf8();
                if next < class.len() {
                    anchors.push(next);
                }
            }
            _ => {}
        }
    }

    anchors
}
