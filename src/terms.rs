//! Term tables: normalized, tokenized legal forms in matching order.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

use crate::dictionary::{TermCatalog, catalog};
use crate::normalize::normalize_term;

/// One legal form split into normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermEntry {
    pub tokens: Vec<String>,
}

impl TermEntry {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Ordered term entries: most tokens first, then lexicographic by tokens.
///
/// Longer forms must be tried first so "osakeyhtiö ab" is consumed whole
/// before "ab" gets a chance at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermTable {
    entries: Vec<TermEntry>,
}

impl TermTable {
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(token_count, tokens)` pairs, the shape exported to Python.
    pub fn to_pairs(&self) -> Vec<(usize, Vec<String>)> {
        self.entries
            .iter()
            .map(|e| (e.len(), e.tokens.clone()))
            .collect()
    }

    pub fn from_pairs(pairs: Vec<(usize, Vec<String>)>) -> Self {
        prepare_tokenized(pairs.into_iter().map(|(_, tokens)| tokens))
    }
}

/// Build a table from raw term strings. Input order does not matter.
pub fn prepare_terms<I, S>(terms: I) -> TermTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prepare_tokenized(terms.into_iter().map(|term| {
        normalize_term(term.as_ref())
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }))
}

fn prepare_tokenized<I>(token_lists: I) -> TermTable
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut entries: Vec<TermEntry> = token_lists
        .into_iter()
        .filter(|tokens| !tokens.is_empty())
        .map(|tokens| TermEntry { tokens })
        .collect();
    entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.tokens.cmp(&b.tokens)));
    entries.dedup();
    TermTable { entries }
}

/// Fresh table for a resolved country name (or the full catalog for `None`).
pub fn prepare_default_terms(country: Option<&str>) -> TermTable {
    prepare_catalog_terms(catalog(), country)
}

pub fn prepare_catalog_terms(cat: &TermCatalog, country: Option<&str>) -> TermTable {
    prepare_terms(cat.unique_terms(country))
}

lazy_static! {
    static ref TABLE_CACHE: RwLock<HashMap<Option<String>, Arc<TermTable>>> =
        RwLock::new(HashMap::new());
}

/// Memoized [`prepare_default_terms`] keyed by resolved country.
pub fn cached_terms(country: Option<&str>) -> Arc<TermTable> {
    let key = country.map(str::to_string);
    if let Ok(cache) = TABLE_CACHE.read() {
        if let Some(table) = cache.get(&key) {
            return Arc::clone(table);
        }
    }
    let table = Arc::new(prepare_default_terms(country));
    if let Ok(mut cache) = TABLE_CACHE.write() {
        cache.entry(key).or_insert_with(|| Arc::clone(&table));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(table: &TermTable) -> Vec<Vec<&str>> {
        table
            .entries()
            .iter()
            .map(|e| e.tokens.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_deterministic_terms() {
        let terms = ["aaa", "bbb", "ccc"];
        let forward = prepare_terms(terms.iter());
        let backward = prepare_terms(terms.iter().rev());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_longest_first_then_lexicographic() {
        let table = prepare_terms(["Oy", "Osakeyhtiö Ab", "Ab", "pty ltd", "S.à r.l."]);
        assert_eq!(
            tokens(&table),
            vec![
                vec!["osakeyhtio", "ab"],
                vec!["pty", "ltd"],
                vec!["sa", "rl"],
                vec!["ab"],
                vec!["oy"],
            ]
        );
    }

    #[test]
    fn test_duplicates_and_empty_terms_dropped() {
        let table = prepare_terms(["Ltd", "ltd.", "LTD", "-", " "]);
        assert_eq!(tokens(&table), vec![vec!["ltd"]]);
    }

    #[test]
    fn test_pairs_round_trip_keeps_order() {
        let table = prepare_default_terms(Some("Finland"));
        let mut pairs = table.to_pairs();
        pairs.reverse();
        assert_eq!(TermTable::from_pairs(pairs), table);
    }

    #[test]
    fn test_cached_terms_match_fresh_build() {
        let cached = cached_terms(Some("Sweden"));
        assert_eq!(*cached, prepare_default_terms(Some("Sweden")));
        let again = cached_terms(Some("Sweden"));
        assert!(Arc::ptr_eq(&cached, &again));
    }

    #[test]
    fn test_country_table_is_smaller_than_catalog() {
        let finland = prepare_default_terms(Some("Finland"));
        let everything = prepare_default_terms(None);
        assert!(finland.len() < everything.len());
        assert!(finland.entries().iter().any(|e| e.tokens == ["asunto", "oy"]));
    }
}
