//! Editor document glue
//!
//! Entry points an editor integration calls: sorting on an explicit command
//! and sorting while a document is being saved. Both produce a single edit
//! that replaces the whole buffer.

use std::ops::Range;

use crate::config::SortConfig;
use crate::error::{Result, SorterError};
use crate::language;
use crate::sorter::Sorter;

/// An open document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Editor language id
    pub language_id: String,
    /// Full buffer contents
    pub text: String,
}

impl Document {
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    pub fn is_supported(&self) -> bool {
        language::is_supported(&self.language_id)
    }

    /// Byte range covering the whole buffer
    pub fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }
}

/// Replacement of a byte range of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub new_text: String,
}

impl TextEdit {
    /// Apply the edit to `text`
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() - self.range.len() + self.new_text.len());
        out.push_str(&text[..self.range.start]);
        out.push_str(&self.new_text);
        out.push_str(&text[self.range.end..]);
        out
    }
}

/// Sort a document on explicit request
///
/// Fails for languages outside the supported set so the caller can tell the
/// user.
pub fn sort_on_command(sorter: &Sorter, document: &Document) -> Result<TextEdit> {
    if !document.is_supported() {
        return Err(SorterError::UnsupportedLanguage(document.language_id.clone()));
    }

    Ok(TextEdit {
        range: document.full_range(),
        new_text: sorter.sort(&document.text),
    })
}

/// Edit to apply while saving, if any
///
/// Returns `None` when sorting on save is switched off or the language is
/// not supported.
pub fn sort_on_save(
    sorter: &Sorter,
    config: &SortConfig,
    document: &Document,
) -> Option<TextEdit> {
    if !config.sort_on_save {
        return None;
    }
    if !document.is_supported() {
        tracing::debug!(
            language = %document.language_id,
            "language not supported, not sorting on save"
        );
        return None;
    }

    Some(TextEdit {
        range: document.full_range(),
        new_text: sorter.sort(&document.text),
    })
}
