//! Class ordering
//!
//! Orders the classes of one span: ranked classes by weight, then by their
//! variant chains, then by text; unranked classes follow in their original
//! order.

use std::cmp::Ordering;

use super::rank::RankIndex;
use super::token::ClassToken;

/// Variant families that collapse to their root entry (`group-hover` -> `group-`)
const VARIANT_FAMILIES: [&str; 3] = ["group-", "peer-", "supports-"];

/// Ordered variant fragments used to break ties between variant classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoOrder {
    entries: Vec<String>,
}

impl PseudoOrder {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Position of the entry a variant segment resolves to
    ///
    /// An exact entry wins, then a family root the segment starts with,
    /// then the first entry contained in the segment.
    pub fn position(&self, segment: &str) -> Option<usize> {
        if let Some(pos) = self.entries.iter().position(|entry| entry == segment) {
            return Some(pos);
        }

        for family in VARIANT_FAMILIES {
            if segment.starts_with(family) {
                if let Some(pos) = self.entries.iter().position(|entry| entry == family) {
                    return Some(pos);
                }
            }
        }

        self.entries
            .iter()
            .position(|entry| !entry.is_empty() && segment.contains(entry.as_str()))
    }

    /// Compare two variant chains position by position
    ///
    /// Segments that resolve to no entry sort after those that do.
    pub fn compare_chains(&self, left: &[&str], right: &[&str]) -> Ordering {
        let left = left.iter().map(|segment| self.chain_key(segment));
        let right = right.iter().map(|segment| self.chain_key(segment));
        left.cmp(right)
    }

    fn chain_key(&self, segment: &str) -> usize {
        self.position(segment).unwrap_or(usize::MAX)
    }
}

impl Default for PseudoOrder {
    fn default() -> Self {
        Self::new(
            super::defaults::PSEUDO_ORDER
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
        )
    }
}

impl<S: Into<String>> FromIterator<S> for PseudoOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Total order over two ranked classes
pub fn compare(left: &ClassToken<'_>, right: &ClassToken<'_>, pseudo: &PseudoOrder) -> Ordering {
    left.weight()
        .cmp(&right.weight())
        .then_with(|| {
            if left.has_variants() && right.has_variants() {
                pseudo.compare_chains(left.variants(), right.variants())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| left.raw().cmp(right.raw()))
}

/// Sort a whitespace-separated class list
///
/// The result is joined by single spaces; surrounding whitespace is dropped.
pub fn sort_class_list(content: &str, index: &RankIndex, pseudo: &PseudoOrder) -> String {
    let (mut ranked, unranked): (Vec<ClassToken<'_>>, Vec<ClassToken<'_>>) = content
        .split_whitespace()
        .map(|raw| ClassToken::classify(raw, index))
        .partition(ClassToken::is_ranked);

    ranked.sort_by(|a, b| compare(a, b, pseudo));

    ranked
        .iter()
        .chain(unranked.iter())
        .map(ClassToken::raw)
        .collect::<Vec<_>>()
        .join(" ")
}
