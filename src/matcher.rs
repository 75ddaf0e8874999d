//! Token-level removal of legal-form terms from a business name.

use crate::normalize::{normalize_term, normalize_token, strip_tail};
use crate::terms::TermTable;

/// Words that keep a trailing country name in place ("... of Sweden").
pub const COUNTRY_PREPOSITIONS: &[&str] = &["in", "of"];

/// A raw token paired with its comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NameToken<'a> {
    raw: &'a str,
    key: String,
}

/// Name split on whitespace; each token carries its normalized form so
/// removals can never desynchronize display and comparison views.
#[derive(Debug, Clone)]
struct NameTokens<'a> {
    tokens: Vec<NameToken<'a>>,
}

impl<'a> NameTokens<'a> {
    fn new(name: &'a str) -> Self {
        let tokens = name
            .split_whitespace()
            .map(|raw| NameToken {
                raw,
                key: normalize_token(raw),
            })
            .collect();
        Self { tokens }
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn keys_match(&self, start: usize, term: &[String]) -> bool {
        start + term.len() <= self.len()
            && self.tokens[start..start + term.len()]
                .iter()
                .zip(term)
                .all(|(tok, t)| tok.key == *t)
    }

    fn ends_with(&self, term: &[String]) -> bool {
        term.len() <= self.len() && self.keys_match(self.len() - term.len(), term)
    }

    fn starts_with(&self, term: &[String]) -> bool {
        self.keys_match(0, term)
    }

    fn remove(&mut self, start: usize, count: usize) {
        self.tokens.drain(start..start + count);
    }

    fn remove_last(&mut self, count: usize) {
        let start = self.len() - count;
        self.remove(start, count);
    }

    /// True when the raw token before the last one is "in" or "of".
    fn last_follows_preposition(&self) -> bool {
        self.len() >= 2 && is_preposition(self.tokens[self.len() - 2].raw)
    }

    fn join(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.raw)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_preposition(word: &str) -> bool {
    let lower = word.to_lowercase();
    COUNTRY_PREPOSITIONS.contains(&lower.as_str())
}

/// Which positions the matcher may strip terms from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPositions {
    pub suffix: bool,
    pub prefix: bool,
    pub middle: bool,
}

/// Country-name knowledge the matcher needs.
#[derive(Debug, Clone, Default)]
pub struct CountryNames {
    /// Normalized keys of every country name in the catalog; single-token
    /// terms in this set get the country-name exceptions.
    pub all_keys: Vec<String>,
    /// Names stripped when they are the literal last token.
    pub trailing: Vec<String>,
}

impl CountryNames {
    pub fn new(all_names: &[String], trailing: &[String]) -> Self {
        let mut all_keys: Vec<String> = all_names.iter().map(|n| normalize_term(n)).collect();
        all_keys.sort();
        all_keys.dedup();
        Self {
            all_keys,
            trailing: trailing.to_vec(),
        }
    }

    fn is_country_term(&self, term: &[String]) -> bool {
        term.len() == 1 && self.all_keys.binary_search(&term[0]).is_ok()
    }
}

/// Strip legal-form terms from one name using a prepared table.
///
/// Suffixes are peeled first, then prefixes, then interior terms, each by a
/// single walk through the table in priority order. A trailing country name
/// is dropped last unless it follows "in"/"of".
pub fn custom_basename(
    name: &str,
    terms: &TermTable,
    positions: MatchPositions,
    countries: &CountryNames,
) -> String {
    let mut parts = NameTokens::new(strip_tail(name));

    if positions.suffix {
        for entry in terms.entries() {
            if !parts.ends_with(&entry.tokens) {
                continue;
            }
            if countries.is_country_term(&entry.tokens) && parts.last_follows_preposition() {
                continue;
            }
            parts.remove_last(entry.len());
        }
    }

    if positions.prefix {
        for entry in terms.entries() {
            if !parts.starts_with(&entry.tokens) {
                continue;
            }
            // Country qualifiers only ever trail a name
            if countries.is_country_term(&entry.tokens) {
                continue;
            }
            parts.remove(0, entry.len());
        }
    }

    if positions.middle {
        remove_middle(&mut parts, terms);
    }

    for country in &countries.trailing {
        let Some(last) = parts.tokens.last() else {
            break;
        };
        if last.raw.to_lowercase() != country.to_lowercase() {
            continue;
        }
        if parts.last_follows_preposition() {
            continue;
        }
        parts.remove_last(1);
    }

    strip_tail(&parts.join()).to_string()
}

fn remove_middle(parts: &mut NameTokens<'_>, terms: &TermTable) {
    for entry in terms.entries() {
        let size = entry.len();
        if size > 1 {
            // Never touch the first or last token
            let mut i = 1;
            while parts.len() > size + 1 && i + size < parts.len() {
                if parts.keys_match(i, &entry.tokens) {
                    parts.remove(i, size);
                } else {
                    i += 1;
                }
            }
        } else if parts.len() > 2 {
            let last = parts.len() - 1;
            if let Some(pos) = (1..last).find(|&i| parts.tokens[i].key == entry.tokens[0]) {
                parts.remove(pos, 1);
            }
        }
    }
}
