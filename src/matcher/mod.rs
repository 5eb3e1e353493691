//! Span matching module
//!
//! This module locates class-bearing spans in source text:
//! - Attribute and call-style literals (`class="..."`, `clsx('...')`)
//! - `@apply ...;` directives
//! - Dynamic content rejection

mod dynamic;
mod rules;

use std::ops::Range;

pub use dynamic::{DynamicGuard, DEFAULT_MARKERS};
pub use rules::{ApplyRule, AttributeRule, BUILTIN_PREFIXES};

/// What encloses a matched span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    DoubleQuote,
    SingleQuote,
    Backtick,
    /// `@apply` directive, closed by `;`
    Semicolon,
}

impl Delimiter {
    /// Delimiter opened by a quote character
    pub fn from_quote(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Delimiter::DoubleQuote),
            '\'' => Some(Delimiter::SingleQuote),
            '`' => Some(Delimiter::Backtick),
            _ => None,
        }
    }
}

/// Byte range of a span's content, delimiters excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub delimiter: Delimiter,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn content<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

/// Both matching rules plus the dynamic content guard
#[derive(Debug, Clone)]
pub struct SpanMatcher {
    attribute: Option<AttributeRule>,
    apply: Option<ApplyRule>,
    guard: DynamicGuard,
}

impl SpanMatcher {
    /// Create a matcher for `custom_prefixes` plus `class=` and `className=`
    pub fn new(custom_prefixes: &[String]) -> Self {
        let attribute = AttributeRule::new(custom_prefixes);
        if attribute.is_none() {
            tracing::warn!(
                prefixes = ?custom_prefixes,
                "could not compile attribute pattern, attribute pass disabled"
            );
        }
        let apply = ApplyRule::new();
        if apply.is_none() {
            tracing::warn!("could not compile @apply pattern, @apply pass disabled");
        }

        Self {
            attribute,
            apply,
            guard: DynamicGuard::default(),
        }
    }

    /// Replace the dynamic content guard
    pub fn with_guard(mut self, guard: DynamicGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> &DynamicGuard {
        &self.guard
    }

    /// Attribute and call-style spans in `text`
    pub fn find_attribute_spans(&self, text: &str) -> Vec<Span> {
        self.attribute
            .as_ref()
            .map(|rule| rule.find_all(text))
            .unwrap_or_default()
    }

    /// `@apply` spans in `text`
    pub fn find_apply_spans(&self, text: &str) -> Vec<Span> {
        self.apply
            .as_ref()
            .map(|rule| rule.find_all(text))
            .unwrap_or_default()
    }

    /// Whether a span's content may be rewritten
    ///
    /// Content with a dynamic marker or without any whitespace is left
    /// alone.
    pub fn is_sortable(&self, content: &str) -> bool {
        content.contains(char::is_whitespace) && !self.guard.is_dynamic(content)
    }
}

impl Default for SpanMatcher {
    fn default() -> Self {
        let custom: Vec<String> = crate::classes::defaults::CUSTOM_PREFIXES
            .iter()
            .map(|p| p.to_string())
            .collect();
        Self::new(&custom)
    }
}
