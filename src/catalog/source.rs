//! Static content registry.
//!
//! Each catalog section is authored as a JSON document and embedded in the
//! binary at compile time. The registry is fixed; nothing is added or removed
//! at runtime.

use super::{CatalogError, CatalogRecord, SectionKey};

/// Source of section content consulted by the loader on a cache miss.
pub trait SectionSource: Send + Sync {
    /// Reads every record registered for `key`, in authored order.
    ///
    /// Fails with [`CatalogError::UnknownSection`] if nothing is registered
    /// under `key`.
    fn read(&self, key: &str) -> Result<Vec<CatalogRecord>, CatalogError>;
}

/// Content embedded from `src/catalog/content/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Raw JSON document for a section, or `None` for non-catalog sections.
    #[must_use]
    pub const fn document(section: SectionKey) -> Option<&'static str> {
        match section {
            SectionKey::Patterns => Some(include_str!("content/patterns.json")),
            SectionKey::ClassicPatterns => Some(include_str!("content/classic-patterns.json")),
            SectionKey::Solid => Some(include_str!("content/solid.json")),
            SectionKey::Grasp => Some(include_str!("content/grasp.json")),
            SectionKey::CleanCode => Some(include_str!("content/clean-code.json")),
            SectionKey::FrontendArchitecture => {
                Some(include_str!("content/frontend-architecture.json"))
            }
            SectionKey::ReactivePrinciples => {
                Some(include_str!("content/reactive-principles.json"))
            }
            // Rendered from its own page content, registered with no records
            SectionKey::Architecture => None,
        }
    }
}

impl SectionSource for EmbeddedSource {
    fn read(&self, key: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
        let section: SectionKey = key.parse()?;
        match Self::document(section) {
            Some(json) => serde_json::from_str(json).map_err(|source| CatalogError::Content {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_section_parses() {
        for section in SectionKey::catalog_sections() {
            let records = EmbeddedSource.read(section.as_str()).unwrap();
            assert!(!records.is_empty(), "{section} has no records");
        }
    }

    #[test]
    fn test_architecture_is_registered_empty() {
        let records = EmbeddedSource.read("architecture").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let err = EmbeddedSource.read("does-not-exist").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSection { ref key } if key == "does-not-exist"));
    }

    #[test]
    fn test_route_segment_is_not_a_source_key() {
        assert!(EmbeddedSource.read("classic").is_err());
    }

    #[test]
    fn test_solid_has_five_letters() {
        let records = EmbeddedSource.read("solid").unwrap();
        let letters: String = records.iter().filter_map(|r| r.letter).collect();
        assert_eq!(letters, "SOLID");
    }

    #[test]
    fn test_only_classic_patterns_are_rated() {
        for section in SectionKey::catalog_sections() {
            let records = EmbeddedSource.read(section.as_str()).unwrap();
            let rated = records.iter().filter(|r| r.rating.is_some()).count();
            if section == SectionKey::ClassicPatterns {
                assert_eq!(rated, records.len());
            } else {
                assert_eq!(rated, 0, "{section} should not carry ratings");
            }
        }
    }
}
