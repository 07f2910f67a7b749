//! URL path resolution for the catalog pages.
//!
//! Every section has a list page at `/{segment}` and a detail page at
//! `/{segment}/{id}`. The root path and any unmatched path redirect to the
//! patterns list.

use serde::Serialize;
use std::fmt;

use crate::catalog::SectionKey;

/// Section that `/` and unmatched paths redirect to.
pub const DEFAULT_SECTION: SectionKey = SectionKey::Patterns;

/// Page a URL path resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// List page of a catalog section
    List {
        /// Section shown
        section: SectionKey,
    },
    /// Detail page of one record
    Detail {
        /// Section the record belongs to
        section: SectionKey,
        /// Record id, taken verbatim from the path
        id: String,
    },
    /// Architecture reference page
    Architecture,
}

impl Route {
    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List { section } => format!("/{}", section.route_segment()),
            Self::Detail { section, id } => format!("/{}/{id}", section.route_segment()),
            Self::Architecture => format!("/{}", SectionKey::Architecture.route_segment()),
        }
    }

    /// Section this route shows.
    #[must_use]
    pub const fn section(&self) -> SectionKey {
        match self {
            Self::List { section } | Self::Detail { section, .. } => *section,
            Self::Architecture => SectionKey::Architecture,
        }
    }

    /// Where the back link of this page points.
    ///
    /// Detail pages go back to their section list; every other page goes back
    /// to itself.
    #[must_use]
    pub fn back_path(&self) -> String {
        match self {
            Self::Detail { section, .. } => Self::List { section: *section }.path(),
            other => other.path(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolves a URL path to a route.
///
/// Query strings, fragments and surrounding slashes are ignored. Unknown
/// paths never fail; they redirect to the default section list.
#[must_use]
pub fn resolve(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let fallback = Route::List {
        section: DEFAULT_SECTION,
    };

    match segments.as_slice() {
        [] => fallback,
        [segment] => match SectionKey::from_route_segment(segment) {
            Some(SectionKey::Architecture) => Route::Architecture,
            Some(section) => Route::List { section },
            None => fallback,
        },
        [segment, id] => match SectionKey::from_route_segment(segment) {
            Some(section) if section.is_catalog() => Route::Detail {
                section,
                id: (*id).to_string(),
            },
            _ => fallback,
        },
        _ => fallback,
    }
}
