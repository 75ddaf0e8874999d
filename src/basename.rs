//! The full cleaning pipeline for one business name.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::bilingual::split_bilingual_name;
use crate::branch::remove_finnish_branch_patterns;
use crate::dictionary::catalog;
use crate::matcher::{CountryNames, MatchPositions, custom_basename};
use crate::qualifiers::{
    group_before_legal_form, handle_finnish_insurance_companies, osuuskunta_is_genitive,
    protect_osuuskunta, remove_group_if_safe, restore_osuuskunta, trim_technologies_nordic,
};
use crate::terms::cached_terms;

/// Resolved country under which the Finnish-specific stages run.
pub const FINLAND: &str = "Finland";

lazy_static! {
    static ref PARENTHESIS: Regex = Regex::new(r"\s*\(.*\)\s*").unwrap();
}

/// Options for [`basename_with`]. Deserializes from partial JSON such as
/// `{"middle": true, "country": "FI"}`; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BasenameOptions {
    pub suffix: bool,
    pub prefix: bool,
    pub middle: bool,
    /// 2-letter code or country name
    pub country: Option<String>,
}

impl Default for BasenameOptions {
    fn default() -> Self {
        Self {
            suffix: true,
            prefix: true,
            middle: false,
            country: None,
        }
    }
}

impl BasenameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suffix(mut self, suffix: bool) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_middle(mut self, middle: bool) -> Self {
        self.middle = middle;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    fn positions(&self) -> MatchPositions {
        MatchPositions {
            suffix: self.suffix,
            prefix: self.prefix,
            middle: self.middle,
        }
    }
}

/// Flags raised by the early stages and consumed by the late ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanState {
    /// A genitive word precedes "osuuskunta"; it must survive term stripping.
    pub protect_osuuskunta: bool,
    /// "Group" sat directly before a legal form before branch removal.
    pub group_before_legal_form: bool,
    /// A branch phrase was removed.
    pub branch_matched: bool,
}

/// Clean a business name down to its base form.
///
/// `country` takes a 2-letter code or a country name. Finnish handling
/// (insurers, bilingual names, branch phrases) runs for Finland and when no
/// country is given.
pub fn basename(
    name: &str,
    suffix: bool,
    prefix: bool,
    middle: bool,
    country: Option<&str>,
) -> String {
    let options = BasenameOptions {
        suffix,
        prefix,
        middle,
        country: country.map(str::to_string),
    };
    basename_with(name, &options)
}

pub fn basename_with(name: &str, options: &BasenameOptions) -> String {
    let cat = catalog();
    let country = options.country.as_deref().map(|c| cat.resolve_country(c));
    let finnish = country.as_deref().is_none_or(|c| c == FINLAND);

    let mut state = CleanState::default();
    let mut current = name.to_string();

    if finnish {
        let rewrite = handle_finnish_insurance_companies(&current);
        if rewrite.protected {
            debug!("Genitive insurer kept verbatim: {:?}", name);
            return rewrite.name.trim().to_string();
        }
        if rewrite.name != current {
            debug!("Insurer rewrite: {:?} -> {:?}", current, rewrite.name);
            current = rewrite.name;
        }

        state.protect_osuuskunta = osuuskunta_is_genitive(&current);

        let split = split_bilingual_name(&current);
        if split != current {
            debug!("Bilingual split: {:?} -> {:?}", current, split);
            current = split.to_string();
        }
    }

    if current.to_lowercase().contains("group") {
        state.group_before_legal_form =
            group_before_legal_form(&current, cat.unique_terms(country.as_deref()));
    }

    let before_branch = current.clone();
    if finnish {
        current = remove_finnish_branch_patterns(&current);
    }
    state.branch_matched = current != before_branch;
    if state.branch_matched {
        debug!("Branch phrase removed: {:?} -> {:?}", before_branch, current);
    }

    let no_parenthesis = PARENTHESIS.replace_all(&current, " ").trim().to_string();

    let terms = cached_terms(country.as_deref());
    let all_names = cat.all_country_names();
    let trailing = match country.as_deref() {
        Some(c) => cat.country_names(c).to_vec(),
        None => all_names.clone(),
    };
    let countries = CountryNames::new(&all_names, &trailing);

    let protected = if state.protect_osuuskunta {
        protect_osuuskunta(&no_parenthesis)
    } else {
        no_parenthesis
    };

    let positions = options.positions();
    let mut cleaned = custom_basename(&protected, &terms, positions, &countries);
    // Nested forms ("Company Ltd Oy") need a second pass
    if cleaned != protected {
        cleaned = custom_basename(&cleaned, &terms, positions, &countries);
        debug!("Terms stripped: {:?} -> {:?}", protected, cleaned);
    }

    if cleaned.is_empty() {
        debug!("Every token was a legal form, keeping {:?}", name);
        return name.to_string();
    }

    if state.branch_matched {
        cleaned = trim_technologies_nordic(&cleaned);
    }
    if state.group_before_legal_form {
        cleaned = remove_group_if_safe(&cleaned);
    }
    if state.protect_osuuskunta {
        cleaned = restore_osuuskunta(&cleaned, &before_branch);
    }

    cleaned
}
