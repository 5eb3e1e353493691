//! tailwind-sorter - canonical ordering of Tailwind utility classes
//!
//! Finds class strings embedded in markup, templates, scripts and
//! stylesheets and rewrites them into a deterministic order. Content that
//! contains template or interpolation syntax is never touched.
//!
//! ```
//! use tailwind_sorter::Sorter;
//!
//! let sorter = Sorter::default();
//! assert_eq!(
//!     sorter.sort(r#"<div class="text-white bg-blue-500">"#),
//!     r#"<div class="bg-blue-500 text-white">"#
//! );
//! ```

pub mod classes;
pub mod config;
pub mod document;
pub mod error;
pub mod language;
pub mod matcher;
pub mod sorter;

pub use classes::{PseudoOrder, RankIndex};
pub use config::SortConfig;
pub use document::{sort_on_command, sort_on_save, Document, TextEdit};
pub use error::{ConfigError, Result, SorterError};
pub use sorter::{sort, Sorter};
