//! Section keys and their display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CatalogError;

/// Fixed set of sections served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    /// Angular-oriented design patterns
    Patterns,
    /// Gang of Four patterns with relevance ratings
    ClassicPatterns,
    /// The five SOLID principles
    Solid,
    /// GRASP responsibility assignment patterns
    Grasp,
    /// Clean code principles
    CleanCode,
    /// Frontend architecture principles
    FrontendArchitecture,
    /// Reactive programming principles
    ReactivePrinciples,
    /// Architecture reference page (not a catalog section)
    Architecture,
}

impl SectionKey {
    /// Every section, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Patterns,
        Self::ClassicPatterns,
        Self::Solid,
        Self::Grasp,
        Self::CleanCode,
        Self::FrontendArchitecture,
        Self::ReactivePrinciples,
        Self::Architecture,
    ];

    /// Canonical key (e.g., "classic-patterns").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::ClassicPatterns => "classic-patterns",
            Self::Solid => "solid",
            Self::Grasp => "grasp",
            Self::CleanCode => "clean-code",
            Self::FrontendArchitecture => "frontend-architecture",
            Self::ReactivePrinciples => "reactive-principles",
            Self::Architecture => "architecture",
        }
    }

    /// URL path segment for this section (e.g., "classic").
    #[must_use]
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::ClassicPatterns => "classic",
            Self::ReactivePrinciples => "reactive",
            other => other.as_str(),
        }
    }

    /// Looks a section up by its route segment.
    #[must_use]
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.route_segment() == segment)
    }

    /// Looks a section up by route segment first, then by canonical key.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_route_segment(name).or_else(|| name.parse().ok())
    }

    /// Returns true for sections backed by catalog records.
    #[must_use]
    pub const fn is_catalog(self) -> bool {
        !matches!(self, Self::Architecture)
    }

    /// Catalog sections only (excludes the architecture page).
    pub fn catalog_sections() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|section| section.is_catalog())
    }

    /// Page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Patterns => "Angular Design Patterns",
            Self::ClassicPatterns => "Classic Design Patterns (GoF)",
            Self::Solid => "S.O.L.I.D. Principles",
            Self::Grasp => "GRASP Principles",
            Self::CleanCode => "Clean Code Principles",
            Self::FrontendArchitecture => "Frontend Architecture Principles",
            Self::ReactivePrinciples => "Reactive Principles",
            Self::Architecture => "Angular Software Architecture",
        }
    }

    /// Introductory paragraph shown above the list.
    #[must_use]
    pub const fn intro(self) -> &'static str {
        match self {
            Self::Patterns => {
                "Common patterns used to structure Angular applications, from smart and presentational components to facades and stores."
            }
            Self::ClassicPatterns => {
                "A catalog of classic object-oriented design patterns (Singleton, Factory, Strategy, etc.), shown with Angular & TypeScript examples."
            }
            Self::Solid => {
                "The five foundational object-oriented design principles, illustrated with Angular & TypeScript examples."
            }
            Self::Grasp => {
                "General Responsibility Assignment Software Patterns: guidelines for deciding which object should own which responsibility."
            }
            Self::CleanCode => {
                "Practices that keep code readable, maintainable and easy to change."
            }
            Self::FrontendArchitecture => {
                "Principles for structuring large frontend codebases so features stay isolated and boundaries stay explicit."
            }
            Self::ReactivePrinciples => {
                "Principles for modelling state and events as streams and signals."
            }
            Self::Architecture => {
                "Reference notes on folder layout, facades, repositories and routing for larger Angular applications."
            }
        }
    }

    /// Optional second intro line (star legend for rated sections).
    #[must_use]
    pub const fn intro_extra(self) -> Option<&'static str> {
        match self {
            Self::ClassicPatterns => Some("Stars indicate common usage in Angular."),
            _ => None,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSection { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_keys() {
        for section in SectionKey::ALL {
            assert_eq!(section.as_str().parse::<SectionKey>().unwrap(), section);
        }
        assert!("does-not-exist".parse::<SectionKey>().is_err());
    }

    #[test]
    fn test_route_segments_differ_for_two_sections() {
        assert_eq!(SectionKey::ClassicPatterns.route_segment(), "classic");
        assert_eq!(SectionKey::ReactivePrinciples.route_segment(), "reactive");
        assert_eq!(SectionKey::Solid.route_segment(), "solid");
        assert_eq!(
            SectionKey::from_route_segment("classic"),
            Some(SectionKey::ClassicPatterns)
        );
        // Canonical key is not a route segment for renamed sections
        assert_eq!(SectionKey::from_route_segment("classic-patterns"), None);
    }

    #[test]
    fn test_lookup_accepts_segment_or_key() {
        assert_eq!(SectionKey::lookup("reactive"), Some(SectionKey::ReactivePrinciples));
        assert_eq!(
            SectionKey::lookup("reactive-principles"),
            Some(SectionKey::ReactivePrinciples)
        );
        assert_eq!(SectionKey::lookup("nope"), None);
    }

    #[test]
    fn test_catalog_sections_exclude_architecture() {
        let sections: Vec<_> = SectionKey::catalog_sections().collect();
        assert_eq!(sections.len(), 7);
        assert!(!sections.contains(&SectionKey::Architecture));
    }

    #[test]
    fn test_intro_extra_only_for_classic() {
        assert!(SectionKey::ClassicPatterns.intro_extra().is_some());
        assert!(SectionKey::Solid.intro_extra().is_none());
    }
}
