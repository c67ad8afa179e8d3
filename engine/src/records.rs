//! Record and game definitions for the matching games
//!
//! Every game is a static table of records; a "match" is one selection per
//! column whose records share the same id.

use serde::{Deserialize, Serialize};

use crate::theme::CelebrationTheme;

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u16);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Game definition
// ============================================================================

/// One display column of a matching game (e.g. "Battle", "Year").
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// A categorical facet the active dataset can be filtered by.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterFacet {
    pub key: &'static str,
    pub label: &'static str,
    pub values: &'static [&'static str],
}

/// One logical record. `facets` holds the display value for each column,
/// `tags` the categorical values used for filtering.
#[derive(Debug, Clone, Copy)]
pub struct MatchRecord {
    pub id: RecordId,
    pub facets: &'static [&'static str],
    pub tags: &'static [(&'static str, &'static str)],
}

impl MatchRecord {
    /// Value of a filter facet, if the record carries it.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// Complete static definition of one matching game.
#[derive(Debug, Clone, Copy)]
pub struct GameSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub theme: CelebrationTheme,
    pub columns: &'static [ColumnSpec],
    pub filters: &'static [FilterFacet],
    pub records: &'static [MatchRecord],
}

impl GameSpec {
    pub fn record(&self, id: RecordId) -> Option<&'static MatchRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn has_filter_value(&self, key: &str, value: &str) -> bool {
        self.filters
            .iter()
            .any(|f| f.key == key && f.values.contains(&value))
    }

    /// Structural sanity check used by the catalog tests: ids unique, facet
    /// arity matches the column count, every tag references a declared facet.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for record in self.records {
            if !seen.insert(record.id) {
                return Err(format!("{}: duplicate record id {}", self.key, record.id));
            }
            if record.facets.len() != self.columns.len() {
                return Err(format!(
                    "{}: record {} has {} facets, expected {}",
                    self.key,
                    record.id,
                    record.facets.len(),
                    self.columns.len()
                ));
            }
            for (key, value) in record.tags {
                if !self.has_filter_value(key, value) {
                    return Err(format!(
                        "{}: record {} tag {}={} not declared in filters",
                        self.key, record.id, key, value
                    ));
                }
            }
        }
        if self.columns.len() < 2 || self.columns.len() > 4 {
            return Err(format!("{}: games need 2-4 columns", self.key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnSpec] = &[
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "year", label: "Year" },
    ];

    const FILTERS: &[FilterFacet] = &[FilterFacet {
        key: "era",
        label: "Era",
        values: &["Old", "New"],
    }];

    const RECORDS: &[MatchRecord] = &[
        MatchRecord { id: RecordId(1), facets: &["A", "1900"], tags: &[("era", "Old")] },
        MatchRecord { id: RecordId(2), facets: &["B", "2000"], tags: &[("era", "New")] },
    ];

    fn spec() -> GameSpec {
        GameSpec {
            key: "test",
            title: "Test",
            theme: CelebrationTheme::Military,
            columns: COLUMNS,
            filters: FILTERS,
            records: RECORDS,
        }
    }

    #[test]
    fn test_tag_lookup() {
        assert_eq!(RECORDS[0].tag("era"), Some("Old"));
        assert_eq!(RECORDS[0].tag("nation"), None);
    }

    #[test]
    fn test_validate_accepts_well_formed_spec() {
        assert!(spec().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut bad = spec();
        bad.records = &[
            MatchRecord { id: RecordId(1), facets: &["A", "1900"], tags: &[] },
            MatchRecord { id: RecordId(1), facets: &["B", "2000"], tags: &[] },
        ];
        assert!(bad.validate().is_err());
    }
}
