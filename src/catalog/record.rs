//! Catalog record definition shared by every section.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Single entry in a section (a pattern, a principle, ...).
///
/// Records are built once from embedded content and never mutated. Code and
/// markup snippets may be authored as an array of lines; they are joined with
/// `\n` while deserializing so consumers always see pre-joined text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// URL-safe identifier, unique within its section (e.g., "singleton")
    pub id: String,
    /// Display name (e.g., "Singleton")
    pub name: String,
    /// Grouping label used for filtering (e.g., "Creational")
    pub category: String,
    /// One-line summary shown in list views
    pub short_description: String,
    /// Full description shown in the detail view
    pub description: String,
    /// Source snippet illustrating the entry
    #[serde(
        default,
        alias = "exampleTs",
        deserialize_with = "deserialize_joined_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub code_example: Option<String>,
    /// Companion markup snippet
    #[serde(
        default,
        alias = "exampleHtml",
        deserialize_with = "deserialize_joined_lines",
        skip_serializing_if = "Option::is_none"
    )]
    pub markup_example: Option<String>,
    /// Single-letter abbreviation (SOLID only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    /// Relevance rating driving a star display (classic patterns only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl CatalogRecord {
    /// Creates a record with the required fields and no optional extras.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            short_description: short_description.into(),
            description: description.into(),
            code_example: None,
            markup_example: None,
            letter: None,
            rating: None,
        }
    }

    /// Returns true if the record carries a code or markup example.
    #[must_use]
    pub const fn has_examples(&self) -> bool {
        self.code_example.is_some() || self.markup_example.is_some()
    }
}

/// Star rating in the inclusive range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 5;

    /// Creates a rating, returning `None` when the value is out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the rating.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Star string for display (e.g., "★★★" for 3).
    #[must_use]
    pub fn stars(self) -> String {
        stars(self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Returns `count` stars as a string. Zero yields an empty string.
#[must_use]
pub fn stars(count: u8) -> String {
    "★".repeat(usize::from(count))
}

/// Snippets are authored either as one string or as a list of lines.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snippet {
    Text(String),
    Lines(Vec<String>),
}

fn deserialize_joined_lines<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let snippet = Option::<Snippet>::deserialize(deserializer)?;
    Ok(snippet.map(|snippet| match snippet {
        Snippet::Text(text) => text,
        Snippet::Lines(lines) => lines.join("\n"),
    }))
}
