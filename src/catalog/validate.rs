//! Authoring checks for section content.
//!
//! Lookups tolerate duplicate ids (first match wins), so these checks are the
//! place where such content mistakes are surfaced.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use super::CatalogRecord;

static URL_SAFE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid id regex"));

/// Kind of content problem found in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IssueKind {
    /// Id already used earlier in the same section
    DuplicateId,
    /// Id is not lowercase kebab-case
    InvalidId,
    /// Name is blank
    EmptyName,
    /// Category is blank
    EmptyCategory,
}

/// One problem found in a section's records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Section key the record belongs to
    pub section: String,
    /// Position of the record in authored order
    pub index: usize,
    /// Record id as authored
    pub id: String,
    /// What is wrong
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            IssueKind::DuplicateId => "duplicate id",
            IssueKind::InvalidId => "id is not URL-safe kebab-case",
            IssueKind::EmptyName => "name is empty",
            IssueKind::EmptyCategory => "category is empty",
        };
        write!(f, "{} #{} '{}': {}", self.section, self.index, self.id, what)
    }
}

/// Checks every record of one section.
#[must_use]
pub fn validate_section(section: &str, records: &[CatalogRecord]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let mut push = |kind| {
            issues.push(ValidationIssue {
                section: section.to_string(),
                index,
                id: record.id.clone(),
                kind,
            });
        };

        if !URL_SAFE_ID.is_match(&record.id) {
            push(IssueKind::InvalidId);
        }
        if !seen.insert(record.id.as_str()) {
            push(IssueKind::DuplicateId);
        }
        if record.name.trim().is_empty() {
            push(IssueKind::EmptyName);
        }
        if record.category.trim().is_empty() {
            push(IssueKind::EmptyCategory);
        }
    }

    issues
}
