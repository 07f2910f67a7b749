//! List view model: distinct categories and category filtering.

use std::collections::HashSet;

use super::{CatalogRecord, DataSet};

/// Filter value meaning "no filter" when parsed from user input.
pub const ALL_CATEGORIES: &str = "all";

/// Distinct categories in first-occurrence order.
#[must_use]
pub fn categories(records: &[CatalogRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Records matching `category`, in original order.
///
/// `None` returns every record.
#[must_use]
pub fn filter_items<'a>(records: &'a [CatalogRecord], category: Option<&str>) -> Vec<&'a CatalogRecord> {
    match category {
        None => records.iter().collect(),
        Some(category) => records
            .iter()
            .filter(|record| record.category == category)
            .collect(),
    }
}

/// Maps user input to a filter: the `"all"` sentinel and blank input mean
/// unfiltered.
#[must_use]
pub fn parse_category_filter(input: &str) -> Option<&str> {
    let input = input.trim();
    if input.is_empty() || input == ALL_CATEGORIES {
        None
    } else {
        Some(input)
    }
}

/// Filterable list state over one section's data set.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    items: DataSet,
    selected: Option<String>,
}

impl ListViewModel {
    /// Creates an unfiltered view over `items`.
    #[must_use]
    pub const fn new(items: DataSet) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// The full, unfiltered data set.
    #[must_use]
    pub fn items(&self) -> &[CatalogRecord] {
        &self.items
    }

    /// Distinct categories in first-occurrence order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        categories(&self.items)
    }

    /// Sets the active filter. `None` clears it.
    pub fn select(&mut self, category: Option<&str>) {
        self.selected = category.map(str::to_string);
    }

    /// The active filter, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Records matching the active filter.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&CatalogRecord> {
        filter_items(&self.items, self.selected.as_deref())
    }

    /// Advances the filter: all, then each category in order, then all again.
    pub fn select_next(&mut self) {
        let next = {
            let categories = self.categories();
            match self.position(&categories) {
                None => categories.first().map(|c| (*c).to_string()),
                Some(idx) => categories.get(idx + 1).map(|c| (*c).to_string()),
            }
        };
        self.selected = next;
    }

    /// Moves the filter backwards through the same cycle as
    /// [`select_next`](Self::select_next).
    pub fn select_previous(&mut self) {
        let previous = {
            let categories = self.categories();
            match self.position(&categories) {
                None => categories.last().map(|c| (*c).to_string()),
                Some(0) => None,
                Some(idx) => categories.get(idx - 1).map(|c| (*c).to_string()),
            }
        };
        self.selected = previous;
    }

    fn position(&self, categories: &[&str]) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        categories.iter().position(|c| *c == selected)
    }
}
