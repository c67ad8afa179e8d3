//! Filtering - computes the active dataset
//!
//! Zero, one or two equality constraints over a game's filter facets. The
//! active set is always a subset of the static dataset, in dataset order.

use crate::error::EngineError;
use crate::records::{GameSpec, RecordId};

/// The UI offers at most two filter chips per game.
pub const MAX_FILTERS: usize = 2;

pub fn validate_filters(
    spec: &GameSpec,
    filters: &[(String, String)],
) -> Result<(), EngineError> {
    if filters.len() > MAX_FILTERS {
        return Err(EngineError::TooManyFilters {
            max: MAX_FILTERS,
            got: filters.len(),
        });
    }
    for (key, value) in filters {
        if !spec.has_filter_value(key, value) {
            return Err(EngineError::UnknownFilter {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Records matching every active filter. An empty `filters` slice means the
/// whole dataset.
pub fn active_records(spec: &GameSpec, filters: &[(String, String)]) -> Vec<RecordId> {
    spec.records
        .iter()
        .filter(|record| {
            filters
                .iter()
                .all(|(key, value)| record.tag(key) == Some(value.as_str()))
        })
        .map(|record| record.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn filter(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_no_filters_yields_full_dataset() {
        let spec = catalog::find_game("battles").unwrap();
        assert_eq!(active_records(spec, &[]).len(), spec.records.len());
    }

    #[test]
    fn test_single_filter_subsets() {
        let spec = catalog::find_game("battles").unwrap();
        let active = active_records(spec, &[filter("theatre", "Naval")]);
        assert_eq!(active.len(), 3);
        for id in &active {
            assert_eq!(spec.record(*id).unwrap().tag("theatre"), Some("Naval"));
        }
    }

    #[test]
    fn test_contradictory_filters_yield_empty_set() {
        let spec = catalog::find_game("battles").unwrap();
        let active = active_records(
            spec,
            &[filter("era", "Medieval"), filter("theatre", "Air")],
        );
        assert!(active.is_empty());
    }

    #[test]
    fn test_too_many_filters_rejected() {
        let spec = catalog::find_game("battles").unwrap();
        let filters = vec![
            filter("era", "Medieval"),
            filter("theatre", "Land"),
            filter("era", "Georgian"),
        ];
        assert!(matches!(
            validate_filters(spec, &filters),
            Err(EngineError::TooManyFilters { .. })
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let spec = catalog::find_game("battles").unwrap();
        assert!(matches!(
            validate_filters(spec, &[filter("weather", "Rainy")]),
            Err(EngineError::UnknownFilter { .. })
        ));
    }
}
