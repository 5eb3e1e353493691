//! Dynamic content guard
//!
//! Template and interpolation syntax that makes a class string non-static.
//! A span containing any of these markers is never rewritten.

/// Interpolation and template markers recognised by default
pub const DEFAULT_MARKERS: &[&str] = &[
    // JS template literals, Ruby/Elixir interpolation
    "${", "#{",
    // JSX expressions, Handlebars, Vue, Svelte
    "{", "}", "{{", "}}",
    // ERB, EEx, ASP.NET
    "<%", "%>", "<%=",
    // PHP
    "<?php", "<?=", "?>",
    // Django, Jinja, Liquid
    "{%", "%}",
];

/// Marker catalogue checked against captured spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicGuard {
    markers: Vec<String>,
}

impl DynamicGuard {
    /// Guard with no markers at all
    pub fn empty() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Add a marker to the catalogue
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !marker.is_empty() && !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// First marker found in `content`, if any
    pub fn find_marker(&self, content: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|marker| content.contains(marker.as_str()))
            .map(String::as_str)
    }

    pub fn is_dynamic(&self, content: &str) -> bool {
        self.find_marker(content).is_some()
    }
}

impl Default for DynamicGuard {
    fn default() -> Self {
        DEFAULT_MARKERS
            .iter()
            .fold(Self::empty(), |guard, marker| guard.with_marker(*marker))
    }
}
