//! Configuration file support
//!
//! Sorting is driven by a [`SortConfig`]. It is read from the nearest
//! `tailwind-sorter.toml` above the working directory, falling back to
//! `~/.tailwind-sorter.toml` (or `%USERPROFILE%\.tailwind-sorter.toml` on
//! Windows), and finally to the built-in tables.
//!
//! Every key is optional; missing keys keep their built-in value.
//!
//! Example:
//! ```toml
//! category_order = ["layout", "spacing"]
//! pseudo_order = ["sm", "md", "hover"]
//! custom_prefixes = ["clsx(", "tw="]
//! sort_on_save = false
//!
//! [categories]
//! layout = ["flex", "grid"]
//! spacing = ["m-", "p-"]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classes::defaults;
use crate::error::{ConfigError, Result, SorterError};

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "tailwind-sorter.toml";

/// Name of the per-user configuration file in the home directory
pub const USER_CONFIG_FILE_NAME: &str = ".tailwind-sorter.toml";

/// Sorting configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Category name -> ordered class prefixes
    pub categories: BTreeMap<String, Vec<String>>,
    /// Order in which categories are ranked
    pub category_order: Vec<String>,
    /// Variant order used to break ties between variant classes
    pub pseudo_order: Vec<String>,
    /// Extra literal prefixes that introduce a class string
    pub custom_prefixes: Vec<String>,
    /// Whether documents are sorted when saved
    pub sort_on_save: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            categories: defaults::CATEGORIES
                .iter()
                .map(|(name, prefixes)| {
                    (
                        name.to_string(),
                        prefixes.iter().map(|p| p.to_string()).collect(),
                    )
                })
                .collect(),
            category_order: to_strings(defaults::CATEGORY_ORDER),
            pseudo_order: to_strings(defaults::PSEUDO_ORDER),
            custom_prefixes: to_strings(defaults::CUSTOM_PREFIXES),
            sort_on_save: true,
        }
    }
}

impl SortConfig {
    /// Parse configuration from TOML text
    ///
    /// `origin` is only used in error messages.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| SorterError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Locate the configuration file that applies to `start`
    ///
    /// The closest `tailwind-sorter.toml` in `start` or one of its ancestors
    /// wins, then the per-user file.
    pub fn config_path(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
            .or_else(|| {
                user_config_path().filter(|candidate| candidate.is_file())
            })
    }

    /// Load the configuration that applies to `start`, or the built-ins
    pub fn discover(start: &Path) -> Result<Self> {
        match Self::config_path(start) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Check that the category table, category order and pseudo order fit
    /// together
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        if self.pseudo_order.is_empty() {
            return Err(ConfigError::EmptyPseudoOrder);
        }
        if self.category_order.len() != self.categories.len() {
            return Err(ConfigError::OrderLengthMismatch {
                categories: self.categories.len(),
                order: self.category_order.len(),
            });
        }
        if let Some(missing) = self
            .category_order
            .iter()
            .find(|name| !self.categories.contains_key(name.as_str()))
        {
            return Err(ConfigError::UnknownCategory(missing.clone()));
        }
        Ok(())
    }

    /// `self` if it is valid
    ///
    /// For callers that want to reject a bad configuration instead of
    /// falling back to the built-ins.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Configuration actually used for sorting
    ///
    /// An invalid configuration has its categories, category order and
    /// pseudo order replaced by the built-ins together. Prefixes and the
    /// save flag are kept.
    pub fn resolved(&self) -> Self {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "invalid sort configuration, using the default categories and order"
                );
                let builtin = Self::default();
                Self {
                    categories: builtin.categories,
                    category_order: builtin.category_order,
                    pseudo_order: builtin.pseudo_order,
                    custom_prefixes: self.custom_prefixes.clone(),
                    sort_on_save: self.sort_on_save,
                }
            }
        }
    }

    /// Prefixes declared by more than one category
    pub fn overlapping_prefixes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut overlapping = Vec::new();
        for prefixes in self.categories.values() {
            let unique: HashSet<&str> = prefixes.iter().map(String::as_str).collect();
            for prefix in unique {
                if !seen.insert(prefix) && !overlapping.contains(&prefix) {
                    overlapping.push(prefix);
                }
            }
        }
        overlapping.sort_unstable();
        overlapping
    }
}

/// Per-user configuration file path
fn user_config_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|home| PathBuf::from(home).join(USER_CONFIG_FILE_NAME))
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(USER_CONFIG_FILE_NAME))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
