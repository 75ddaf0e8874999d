//! Finnish/Swedish "branch of a foreign company" phrasing.
//!
//! "Ferrero Scandinavia AB, filial i Finland" -> "Ferrero Scandinavia AB"

use lazy_static::lazy_static;
use regex::Regex;

// Substrings one of which every branch phrase contains
const BRANCH_INDICATORS: &[&str] = &[
    "filial",
    "sivuliike",
    "suomen",
    "helsingin",
    "helsingissä",
    "suomessa",
    "suomi",
];

// Pre-compile branch patterns. Order matters: only the first match is applied,
// so compound slash/dash forms come before the plain phrases they contain.
lazy_static! {
    static ref BRANCH_PATTERNS: Vec<Regex> = vec![
        // Slash forms
        Regex::new(r"(?i),\s*filial\s+i\s+finland\s*/\s*suomen\s+sivuliike").unwrap(),
        Regex::new(r"(?i),\s*sivuliike\s+helsingissä\s*/\s*helsinki\s+branch.*$").unwrap(),
        Regex::new(r"(?i),\s*filial\s+i\s+finland\s*/\s*suomen\s+sivuliike.*$").unwrap(),

        // Dash forms
        Regex::new(r"(?i),\s*sivuliike\s+suomessa\s*-\s*filial\s+i\s+finland").unwrap(),
        Regex::new(r"(?i)\s+sivuliike\s+suomessa\s*-\s*filial\s+i\s+finland").unwrap(),
        Regex::new(r"(?i)\s*-\s*filial\s+finland\s*\(.*?\)\s*$").unwrap(),
        Regex::new(r"(?i)\s*-\s*filial\s+finland\s*$").unwrap(),

        // Swedish: "filial i Finland", bare "filial", leading "Filialen"
        Regex::new(r"(?i),\s*filial\s+i\s+finland").unwrap(),
        Regex::new(r"(?i)\s+filial\s+i\s+finland").unwrap(),
        Regex::new(r"(?i),\s*filial\s*$").unwrap(),
        Regex::new(r"(?i)\s+filial\s*$").unwrap(),
        Regex::new(r"(?i)^filialen\s+").unwrap(),

        // Finnish
        Regex::new(r"(?i),\s*sivuliike\s+suomessa").unwrap(),
        Regex::new(r"(?i)\s+sivuliike\s+suomessa").unwrap(),
        Regex::new(r"(?i),\s*suomi\s+sivuliike").unwrap(),
        Regex::new(r"(?i)\s+suomi\s+sivuliike").unwrap(),
        Regex::new(r"(?i),\s*suomen\s+sivuliike").unwrap(),
        Regex::new(r"(?i)\s+suomen\s+sivuliike").unwrap(),
        Regex::new(r"(?i),\s*helsingin\s+sivuliike").unwrap(),
        Regex::new(r"(?i)\s+helsingin\s+sivuliike").unwrap(),
        Regex::new(r"(?i),\s*sivuliike\s+helsingissä").unwrap(),
        Regex::new(r"(?i)\s+sivuliike\s+helsingissä").unwrap(),
    ];

    static ref TRAILING_RESIDUE: Regex = Regex::new(r"[,\s/-]+$").unwrap();
    static ref DOUBLE_COMMA: Regex = Regex::new(r",\s*,").unwrap();
    static ref AFTER_SLASH: Regex = Regex::new(r"/.*$").unwrap();
    static ref TRAILING_NORDIC: Regex = Regex::new(r"(?i)\s+nordic\s*$").unwrap();
}

/// Remove the first matching branch phrase and tidy what is left.
///
/// After a match: trailing separators go, anything after a slash goes, only
/// the first comma-separated variant is kept, and a dangling "Nordic" is
/// dropped.
pub fn remove_finnish_branch_patterns(name: &str) -> String {
    let lower = name.to_lowercase();
    if !BRANCH_INDICATORS.iter().any(|ind| lower.contains(ind)) {
        return name.to_string();
    }

    let Some(pattern) = BRANCH_PATTERNS.iter().find(|p| p.is_match(name)) else {
        return name.to_string();
    };
    let result = pattern.replace_all(name, "");

    let result = TRAILING_RESIDUE.replace(&result, "");
    let result = DOUBLE_COMMA.replace_all(&result, ",");
    let result = AFTER_SLASH.replace(&result, "");

    // "Nordisk Kellogg Finland, Nordisk Kellogg ApS" -> "Nordisk Kellogg Finland"
    let first = result
        .split(',')
        .map(str::trim)
        .find(|part| !part.is_empty())
        .unwrap_or("");

    TRAILING_NORDIC.replace(first, "").trim().to_string()
}
