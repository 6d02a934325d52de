#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]
//! Iconpal Search - fuzzy icon lookup for a jump-to-icon command palette.
//!
//! This crate ranks a small, fully loaded list of icon records against a
//! query typed by the user. Names, aliases and categories are scored with a
//! normalized fuzzy similarity (backed by nucleo-matcher), weighted per
//! field, filtered by a minimum score and truncated.
//!
//! # Features
//!
//! - Weighted name / alias / category ranking with stable ordering
//! - Catalog loading from JSON with duplicate-name validation
//! - TOML search configuration
//! - A headless palette state with keyboard handling and navigation
//!
//! # Example
//!
//! ```
//! use iconpal_search::{Matcher, Record};
//!
//! let records = vec![
//!     Record::new("github").with_aliases(["git"]).with_categories(["dev"]),
//!     Record::new("house").with_aliases(["home"]),
//! ];
//!
//! let mut matcher = Matcher::new();
//! let results = matcher.search(&records, "hom");
//! assert_eq!(results[0].name, "house");
//! ```

mod catalog;
mod config;
mod error;
mod fuzzy;
mod matcher;
mod palette;
mod record;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::{PaletteError, PaletteResult};
pub use fuzzy::FuzzyMatcher;
pub use matcher::Matcher;
pub use palette::{Navigator, PaletteKey, PaletteState, RecordingNavigator, icon_route};
pub use record::{MatchedField, Record, ScoredRecord};
