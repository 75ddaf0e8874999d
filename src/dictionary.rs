//! Legal-form term catalog.
//!
//! Holds the read-only term dictionaries the cleaner matches against: terms by
//! legal-form type, terms by country, global terms, country-name synonyms and
//! the country code table. The built-in catalog comes from [`crate::termdata`];
//! a replacement can be loaded from JSON once per process.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use serde::Deserialize;

use crate::error::{CleanError, Result};
use crate::termdata;

/// Global catalog instance (installed once, reused)
static CATALOG: OnceLock<TermCatalog> = OnceLock::new();

/// Set only when `init_catalog` wins the install
static CUSTOM_CATALOG: AtomicBool = AtomicBool::new(false);

/// Term dictionaries keyed by type and by country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TermCatalog {
    pub terms_by_type: BTreeMap<String, Vec<String>>,
    pub terms_by_country: BTreeMap<String, Vec<String>>,
    pub global_terms: Vec<String>,
    pub country_name_by_country: BTreeMap<String, Vec<String>>,
    pub country_codes: BTreeMap<String, String>,
}

fn owned_map(table: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    table
        .iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

impl TermCatalog {
    /// Catalog built from the compiled-in tables
    pub fn builtin() -> Self {
        Self {
            terms_by_type: owned_map(termdata::TERMS_BY_TYPE),
            terms_by_country: owned_map(termdata::TERMS_BY_COUNTRY),
            global_terms: termdata::GLOBAL_TERMS.iter().map(|t| t.to_string()).collect(),
            country_name_by_country: owned_map(termdata::COUNTRY_NAME_BY_COUNTRY),
            country_codes: termdata::COUNTRY_CODES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CleanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Map a 2-letter code to its country name; anything else passes through.
    pub fn resolve_country(&self, selector: &str) -> String {
        self.country_codes
            .get(selector)
            .cloned()
            .unwrap_or_else(|| selector.to_string())
    }

    pub fn country_terms(&self, country: &str) -> &[String] {
        self.terms_by_country
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Country-name synonyms for one country (empty when unknown)
    pub fn country_names(&self, country: &str) -> &[String] {
        self.country_name_by_country
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_country_names(&self) -> Vec<String> {
        self.country_name_by_country.values().flatten().cloned().collect()
    }

    /// Raw terms applicable to a resolved country.
    ///
    /// A country with its own term list gets that list plus the global terms.
    /// Anything else (including `None`) gets the whole catalog: every type
    /// list, every country list and every country name.
    pub fn unique_terms(&self, country: Option<&str>) -> BTreeSet<String> {
        if let Some(terms) = country.and_then(|c| self.terms_by_country.get(c)) {
            return terms.iter().chain(&self.global_terms).cloned().collect();
        }
        self.terms_by_type
            .values()
            .chain(self.terms_by_country.values())
            .chain(self.country_name_by_country.values())
            .flatten()
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> String {
        format!(
            "Catalog: types={}, countries={}, global={}, country_names={}, codes={}",
            self.terms_by_type.len(),
            self.terms_by_country.len(),
            self.global_terms.len(),
            self.country_name_by_country.len(),
            self.country_codes.len()
        )
    }
}

/// Install a JSON catalog for the rest of the process.
///
/// Fails if a catalog is already in use, including the built-in one after the
/// first call to [`catalog`].
pub fn init_catalog(path: &Path) -> Result<()> {
    let loaded = TermCatalog::from_json_file(path)?;
    let stats = loaded.stats();
    match CATALOG.set(loaded) {
        Ok(()) => {
            CUSTOM_CATALOG.store(true, Ordering::Release);
            info!("Term catalog loaded from {}: {}", path.display(), stats);
            Ok(())
        }
        Err(_) => {
            warn!("Term catalog already initialized, ignoring {}", path.display());
            Err(CleanError::AlreadyInitialized)
        }
    }
}

/// The process-wide catalog, falling back to the built-in tables
pub fn catalog() -> &'static TermCatalog {
    CATALOG.get_or_init(TermCatalog::builtin)
}

/// Check if a custom catalog was installed with [`init_catalog`]
pub fn catalog_loaded() -> bool {
    CUSTOM_CATALOG.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_country() {
        let cat = TermCatalog::builtin();
        assert_eq!(cat.resolve_country("FI"), "Finland");
        assert_eq!(cat.resolve_country("Finland"), "Finland");
        assert_eq!(cat.resolve_country("XX"), "XX");
    }

    #[test]
    fn test_country_terms() {
        let cat = TermCatalog::builtin();
        assert!(cat.country_terms("Finland").iter().any(|t| t == "oyj"));
        assert!(cat.country_terms("Atlantis").is_empty());
    }

    #[test]
    fn test_unique_terms_for_country() {
        let cat = TermCatalog::builtin();
        let terms = cat.unique_terms(Some("Finland"));
        assert!(terms.contains("oyj"));
        assert!(terms.contains("ltd"));
        // Country names only join the full catalog
        assert!(!terms.contains("Finland"));
        assert!(!terms.contains("hb"));
    }

    #[test]
    fn test_unique_terms_unknown_country_is_full_catalog() {
        let cat = TermCatalog::builtin();
        let full = cat.unique_terms(None);
        assert_eq!(cat.unique_terms(Some("Atlantis")), full);
        assert!(full.contains("Finland"));
        assert!(full.contains("hb"));
        assert!(full.contains("cooperative"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "terms_by_country": {"Finland": ["oy"]},
            "global_terms": ["ltd"],
            "country_codes": {"FI": "Finland"}
        }"#;
        let cat = TermCatalog::from_json_str(json).unwrap();
        assert_eq!(cat.resolve_country("FI"), "Finland");
        assert_eq!(cat.unique_terms(Some("Finland")).len(), 2);
        assert!(cat.country_names("Finland").is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = TermCatalog::from_json_str("{\"global_terms\": 3}").unwrap_err();
        assert!(matches!(err, CleanError::Catalog(_)));
    }

    #[test]
    fn test_builtin_fallback_is_not_custom() {
        assert!(catalog().country_terms("Finland").iter().any(|t| t == "oyj"));
        assert!(!catalog_loaded());
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = TermCatalog::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CleanError::Read { .. }));
    }
}
