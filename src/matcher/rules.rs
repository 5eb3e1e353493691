//! Span matching rules
//!
//! Two rules locate class-bearing spans: [`AttributeRule`] for attribute and
//! call-style prefixes followed by a quoted literal, and [`ApplyRule`] for
//! `@apply` directives in stylesheets.

use regex::Regex;

use super::{Delimiter, Span};

/// Prefixes matched by every attribute rule
pub const BUILTIN_PREFIXES: [&str; 2] = ["class=", "className="];

/// Characters that end a quoted literal without producing a span
const REJECTED_IN_LITERAL: [char; 4] = ['<', '{', '>', '?'];

/// Pattern for `@apply` directives; group 1 is the class run
const APPLY_PATTERN: &str = r"@apply\s+([^{;/@\n]+);";

/// Whether a match starting at `start` is preceded by whitespace, `{` or
/// the start of text
fn is_boundary(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some(ch) => ch.is_whitespace() || ch == '{',
    }
}

/// Byte offset of the character after the one at `pos`
fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |ch| pos + ch.len_utf8())
}

/// Attribute and call-style prefixes followed by a quoted literal
#[derive(Debug, Clone)]
pub struct AttributeRule {
    /// Prefixes in match priority order
    pub prefixes: Vec<String>,
    /// Compiled prefix alternation, including trailing whitespace
    pub pattern: Regex,
}

impl AttributeRule {
    /// Create a rule for `custom` prefixes plus the built-in ones
    ///
    /// Prefixes are matched literally. Empty prefixes are dropped.
    pub fn new(custom: &[String]) -> Option<Self> {
        let mut prefixes: Vec<String> = Vec::new();
        for prefix in custom
            .iter()
            .map(String::as_str)
            .chain(BUILTIN_PREFIXES)
        {
            if !prefix.is_empty() && !prefixes.iter().any(|p| p == prefix) {
                prefixes.push(prefix.to_string());
            }
        }

        let alternation = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?:{})\s*", alternation)).ok()?;

        Some(Self { prefixes, pattern })
    }

    /// Find the first span at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<Span> {
        let mut pos = start;
        while pos < text.len() {
            let m = self.pattern.find_at(text, pos)?;
            if is_boundary(text, m.start()) {
                if let Some(span) = scan_literal(text, m.end()) {
                    return Some(span);
                }
            }
            pos = next_char(text, m.start());
        }
        None
    }

    /// All spans in `text`, in order and non-overlapping
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut pos = 0;
        while let Some(span) = self.find_at(text, pos) {
            // Skip the closing quote
            pos = span.end + 1;
            spans.push(span);
        }
        spans
    }
}

/// Scan a quoted literal whose opening quote sits at `open`
///
/// The literal runs to the matching quote. `<`, `{`, `>` and `?` or the
/// end of text reject it.
fn scan_literal(text: &str, open: usize) -> Option<Span> {
    let quote = text[open..].chars().next()?;
    let delimiter = Delimiter::from_quote(quote)?;
    let start = open + quote.len_utf8();

    for (offset, ch) in text[start..].char_indices() {
        if ch == quote {
            return Some(Span {
                start,
                end: start + offset,
                delimiter,
            });
        }
        if REJECTED_IN_LITERAL.contains(&ch) {
            return None;
        }
    }
    None
}

/// `@apply` directives terminated by `;`
#[derive(Debug, Clone)]
pub struct ApplyRule {
    pub pattern: Regex,
}

impl ApplyRule {
    pub fn new() -> Option<Self> {
        Regex::new(APPLY_PATTERN).ok().map(|pattern| Self { pattern })
    }

    /// Find the first span at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<Span> {
        let mut pos = start;
        while pos < text.len() {
            let caps = self.pattern.captures_at(text, pos)?;
            let whole = caps.get(0)?;
            if is_boundary(text, whole.start()) {
                let run = caps.get(1)?;
                return Some(Span {
                    start: run.start(),
                    end: run.end(),
                    delimiter: Delimiter::Semicolon,
                });
            }
            pos = next_char(text, whole.start());
        }
        None
    }

    /// All spans in `text`, in order and non-overlapping
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut pos = 0;
        while let Some(span) = self.find_at(text, pos) {
            pos = span.end + 1;
            spans.push(span);
        }
        spans
    }
}
