//! Bundled NPS scheme list, served when no fresh snapshot exists.

use crate::models::SchemeCatalogEntry;

const BUNDLED_SCHEMES: &[(&str, &str)] = &[
    ("SM001001", "SBI PENSION FUND SCHEME - CENTRAL GOVT"),
    ("SM001002", "SBI PENSION FUND SCHEME - STATE GOVT"),
    ("SM001003", "SBI PENSION FUND SCHEME E - TIER I"),
    ("SM001004", "SBI PENSION FUND SCHEME C - TIER I"),
    ("SM001005", "SBI PENSION FUND SCHEME G - TIER I"),
    ("SM002001", "UTI RETIREMENT SOLUTIONS PENSION FUND SCHEME - CENTRAL GOVT"),
    ("SM002002", "UTI RETIREMENT SOLUTIONS PENSION FUND SCHEME - STATE GOVT"),
    ("SM002003", "UTI RETIREMENT SOLUTIONS PENSION FUND SCHEME E - TIER I"),
    ("SM008001", "HDFC PENSION MANAGEMENT COMPANY LTD-SCHEME E-TIER I"),
    ("SM008002", "HDFC PENSION MANAGEMENT COMPANY LTD-SCHEME C-TIER I"),
    ("SM008003", "HDFC PENSION MANAGEMENT COMPANY LTD-SCHEME G-TIER I"),
];

pub fn bundled_schemes() -> Vec<SchemeCatalogEntry> {
    BUNDLED_SCHEMES
        .iter()
        .map(|(code, name)| SchemeCatalogEntry::new(*code, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let schemes = bundled_schemes();
        let codes: HashSet<_> = schemes.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes.len(), schemes.len());
        assert_eq!(schemes.len(), 11);
    }
}
