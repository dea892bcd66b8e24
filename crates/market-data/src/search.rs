//! Local catalog search.

use crate::models::{Instrument, SchemeCatalogEntry};

/// Anything with a code and a display name can be searched.
pub trait CatalogEntry {
    fn code(&self) -> &str;
    fn name(&self) -> &str;
}

impl CatalogEntry for Instrument {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for SchemeCatalogEntry {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match on name or code.
///
/// Catalog order is kept and nothing is ranked. The query is not validated:
/// an empty query matches every entry, so callers reject blank input first.
pub fn search_catalog<T>(query: &str, catalog: &[T]) -> Vec<T>
where
    T: CatalogEntry + Clone,
{
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| {
            entry.name().to_lowercase().contains(&needle)
                || entry.code().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetClass;

    fn catalog() -> Vec<SchemeCatalogEntry> {
        vec![
            SchemeCatalogEntry::new("SM001001", "SBI PENSION FUND SCHEME - CENTRAL GOVT"),
            SchemeCatalogEntry::new("SM001003", "SBI PENSION FUND SCHEME E - TIER I"),
            SchemeCatalogEntry::new("SM002001", "UTI RETIREMENT SOLUTIONS PENSION FUND SCHEME - CENTRAL GOVT"),
            SchemeCatalogEntry::new("SM008001", "HDFC PENSION MANAGEMENT COMPANY LTD-SCHEME E-TIER I"),
        ]
    }

    #[test]
    fn test_exact_code_matches_once() {
        let results = search_catalog("SM002001", &catalog());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "SM002001");
    }

    #[test]
    fn test_name_match_is_case_insensitive_and_ordered() {
        let results = search_catalog("central govt", &catalog());
        let codes: Vec<_> = results.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["SM001001", "SM002001"]);
    }

    #[test]
    fn test_code_prefix_matches() {
        let results = search_catalog("sm001", &catalog());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_entry_matching_name_and_code_is_listed_once() {
        let catalog = vec![Instrument::new("hdfc", "HDFC Bank", AssetClass::Stock)];
        assert_eq!(search_catalog("hdfc", &catalog).len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(search_catalog("ICICI", &catalog()).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(search_catalog("", &catalog()).len(), catalog().len());
    }
}
