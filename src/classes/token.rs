//! Class token classification
//!
//! Splits a single class token into its variant chain and base class and
//! resolves its rank against a [`RankIndex`].

use super::rank::RankIndex;

/// Marks a negated variant (`not-hover:`) or a negated class
const NEGATION_MARKER: &str = "not-";

/// Separator between variants and the base class
const VARIANT_SEPARATOR: char = ':';

/// One whitespace-delimited class from a matched span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    raw: &'a str,
    variants: Vec<&'a str>,
    base: &'a str,
    prefix: Option<&'a str>,
    rank: Option<usize>,
    negated: bool,
}

impl<'a> ClassToken<'a> {
    /// Classify `raw` against `index`
    pub fn classify(raw: &'a str, index: &RankIndex) -> Self {
        let (variants, base) = split_variants(raw);
        let found = index.longest_match(base);

        let negated = variants
            .iter()
            .any(|variant| variant.contains(NEGATION_MARKER))
            || found.is_some_and(|m| base[..m.start].contains(NEGATION_MARKER));

        Self {
            raw,
            variants,
            base,
            prefix: found.map(|m| m.prefix),
            rank: found.map(|m| m.rank),
            negated,
        }
    }

    /// Original token text
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Variant segments before the base class, outermost first
    pub fn variants(&self) -> &[&'a str] {
        &self.variants
    }

    /// Text after the last variant separator
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// Known prefix the base class matched, if any
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Rank in quarter steps
    ///
    /// Plain classes sit on the rank itself, negated classes a quarter after
    /// it, variant classes half way and negated variant classes three
    /// quarters of the way to the next rank.
    pub fn weight(&self) -> Option<usize> {
        let offset = match (self.has_variants(), self.negated) {
            (false, false) => 0,
            (false, true) => 1,
            (true, false) => 2,
            (true, true) => 3,
        };
        self.rank.map(|rank| rank * 4 + offset)
    }
}

/// Split a class into `(variants, base)`
///
/// Separators inside `[...]` or `(...)` and backslash-escaped separators do
/// not split, so `supports-[display:grid]:grid` has a single variant.
pub fn split_variants(class: &str) -> (Vec<&str>, &str) {
    let mut depth = 0usize;
    let mut escaped = false;
    let mut variants = Vec::new();
    let mut start = 0usize;

    for (idx, ch) in class.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            VARIANT_SEPARATOR if depth == 0 => {
                variants.push(&class[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    (variants, &class[start..])
}
