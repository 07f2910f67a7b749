//! Detail lookup by record id.

use super::CatalogRecord;

/// Returns the first record whose id equals `id`.
///
/// Lookup is a linear scan with exact string equality. An empty or absent
/// id never matches.
#[must_use]
pub fn resolve<'a>(records: &'a [CatalogRecord], id: Option<&str>) -> Option<&'a CatalogRecord> {
    let id = id.filter(|id| !id.is_empty())?;
    records.iter().find(|record| record.id == id)
}
