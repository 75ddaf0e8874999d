//! Caseless, accent-free text forms used for term matching.
//!
//! The display form of a name is never touched here; these helpers only
//! produce the comparison keys the matcher works with.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

lazy_static! {
    // Trailing run of anything that is neither a word character nor a dot
    static ref TAIL_PATTERN: Regex = Regex::new(r"[^.\w]+$").unwrap();

    // Letters NFKD leaves intact (stroked, ligature-like and special lowercase forms).
    // Keys are lowercase: lookup happens after case folding.
    static ref NON_NFKD_MAP: HashMap<char, &'static str> = {
        let pairs = [
            ('ß', "ss"),
            ('æ', "ae"),
            ('œ', "oe"),
            ('ø', "o"),
            ('ł', "l"),
            ('ŀ', "l"),
            ('đ', "d"),
            ('ð', "d"),
            ('ħ', "h"),
            ('ı', "i"),
            ('ĸ', "k"),
            ('ŧ', "t"),
            ('þ', "th"),
            ('ŋ', "n"),
            ('ƒ', "f"),
            // final sigma folds like any other sigma
            ('ς', "σ"),
        ];
        pairs.iter().cloned().collect()
    };
}

/// Case-fold, decompose (NFKD), drop combining marks and replace the letters
/// decomposition cannot split.
///
/// ```
/// use rust_company_clean::normalize::remove_accents;
///
/// assert_eq!(remove_accents("Säätämö"), "saatamo");
/// assert_eq!(remove_accents("Łoś"), "los");
/// ```
pub fn remove_accents(text: &str) -> String {
    let folded = text.to_lowercase();
    let mut out = String::with_capacity(folded.len());
    // Compatibility forms can decompose to capitals ("™" -> "TM"), so fold again
    for c in folded.nfkd().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }
        match NON_NFKD_MAP.get(&c) {
            Some(sub) => out.push_str(sub),
            None => out.push(c),
        }
    }
    out
}

/// Remove `.`, `,` and `-`. Other punctuation is significant (`&`, `/`, `'`).
pub fn strip_punct(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '.' | ',' | '-')).collect()
}

/// Comparison key for a whole term or name: accents and punctuation stripped.
pub fn normalize_term(text: &str) -> String {
    strip_punct(&remove_accents(text))
}

/// Comparison key for a single whitespace token.
///
/// Compatibility decomposition can introduce spaces (e.g. a spacing diaeresis);
/// those are dropped so one raw token always yields exactly one key.
pub fn normalize_token(token: &str) -> String {
    normalize_term(token)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Strip a trailing run of non-word symbols, keeping a final dot ("Inc.").
pub fn strip_tail(name: &str) -> &str {
    match TAIL_PATTERN.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}
