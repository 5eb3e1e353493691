//! Class ranking and ordering
//!
//! This module turns a category table into a rank index and uses it to
//! order the classes of a single span:
//! - Longest-prefix ranking of base classes
//! - Variant chain and negation handling
//! - Pseudo-class tie breaking

pub mod defaults;
mod order;
mod rank;
mod token;

pub use order::{compare, sort_class_list, PseudoOrder};
pub use rank::{PrefixMatch, RankIndex};
pub use token::{split_variants, ClassToken};
