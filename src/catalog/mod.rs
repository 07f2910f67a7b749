//! Catalog of design patterns and principles.
//!
//! Content is grouped into sections (see [`SectionKey`]). Each section is an
//! ordered list of [`CatalogRecord`]s that is loaded lazily through a shared
//! [`CatalogLoader`] and then cached for the lifetime of the process.
//!
//! # Example
//!
//! ```no_run
//! use patterndex::catalog::{resolve, CatalogLoader, ListViewModel};
//!
//! # async fn demo() -> Result<(), patterndex::catalog::CatalogError> {
//! let loader = CatalogLoader::embedded();
//! let items = loader.load("solid").await?;
//!
//! let mut view = ListViewModel::new(items.clone());
//! view.select(Some("Open/Closed"));
//! assert_eq!(view.filtered_items().len(), 1);
//!
//! let record = resolve(&items, Some("open-closed"));
//! # let _ = record;
//! # Ok(())
//! # }
//! ```

mod detail;
mod loader;
mod record;
mod section;
mod source;
pub mod validate;
mod view;

use std::sync::Arc;
use thiserror::Error;

pub use detail::resolve;
pub use loader::{empty_data_set, CatalogLoader};
pub use record::{stars, CatalogRecord, Rating};
pub use section::SectionKey;
pub use source::{EmbeddedSource, SectionSource};
pub use validate::{validate_section, IssueKind, ValidationIssue};
pub use view::{categories, filter_items, parse_category_filter, ListViewModel, ALL_CATEGORIES};

/// Immutable, shared list of records for one section.
///
/// Cloning is cheap; every clone points at the same cached records.
pub type DataSet = Arc<[CatalogRecord]>;

/// Errors raised while loading catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No section is registered under the given key
    #[error("Unknown section: {key}")]
    UnknownSection {
        /// Key as requested
        key: String,
    },
    /// Embedded content for a section could not be parsed
    #[error("Invalid content for section '{key}'")]
    Content {
        /// Section key
        key: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Validates every catalog section of the embedded content.
///
/// Sections that fail to parse are reported as errors; parsed sections
/// contribute their issues in navigation order.
pub fn validate_embedded() -> Result<Vec<ValidationIssue>, CatalogError> {
    let mut issues = Vec::new();
    for section in SectionKey::catalog_sections() {
        let records = EmbeddedSource.read(section.as_str())?;
        issues.extend(validate_section(section.as_str(), &records));
    }
    Ok(issues)
}
