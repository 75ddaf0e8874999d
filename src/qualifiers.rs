//! Special cases around the generic term stripper: Finnish mutual insurers,
//! genitive "osuuskunta" names and the "Group" qualifier.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// "Group" stays when the words before it carry fewer letters than this.
pub const MIN_GROUP_NAME_LENGTH: usize = 5;

/// Stands in for a protected "osuuskunta" while terms are stripped.
pub const OSUUSKUNTA_PLACEHOLDER: &str = "OSUUSKUNTA_PLACEHOLDER";

lazy_static! {
    // "Keskinäinen Vakuutusyhtiö Turva"
    static ref MUTUAL_INSURER_PREFIX: Regex = Regex::new(
        r"(?i)^keskinäinen\s+(?:työeläkevakuutusyhtiö|eläkevakuutusyhtiö|vakuutusyhtiö)\s+(.+)$"
    ).unwrap();
    // "LähiTapiola Keskinäinen Vakuutusyhtiö"
    static ref MUTUAL_INSURER_SUFFIX: Regex =
        Regex::new(r"(?i)^(.+?)\s+keskinäinen\s+vakuutusyhtiö\s*$").unwrap();

    static ref OSUUSKUNTA_AFTER_WORD: Regex = Regex::new(r"(?i)\b(\w+)\s+osuuskunta\b").unwrap();
    static ref OSUUSKUNTA_WORD: Regex = Regex::new(r"(?i)\bosuuskunta\b").unwrap();
    static ref PLACEHOLDER_WORD: Regex =
        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(OSUUSKUNTA_PLACEHOLDER))).unwrap();

    // "Group" as a whole word, then whatever follows its separators
    static ref GROUP_THEN_REST: Regex = Regex::new(r"(?i)\sgroup\b[.,\s-]*(.*)$").unwrap();
    static ref TRAILING_GROUP: Regex = Regex::new(r"(?i)^(.+?)\s+group\s*$").unwrap();
    static ref TRAILING_DASH: Regex = Regex::new(r"[-–—]$").unwrap();
    static ref ONLY_DASHES: Regex = Regex::new(r"^[-–—]+$").unwrap();

    static ref TECHNOLOGIES_NORDIC: Regex =
        Regex::new(r"(?i)\s+technologies\s+nordic\s*$").unwrap();
}

/// Outcome of the mutual-insurer rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceRewrite {
    pub name: String,
    /// Genitive owner ("Valion ..."): the name must be kept verbatim.
    pub protected: bool,
}

/// Strip "Keskinäinen ... Vakuutusyhtiö" wording from Finnish mutual insurers.
pub fn handle_finnish_insurance_companies(name: &str) -> InsuranceRewrite {
    let unchanged = InsuranceRewrite {
        name: name.to_string(),
        protected: false,
    };
    if !name.to_lowercase().contains("keskinäinen") {
        return unchanged;
    }

    if let Some(caps) = MUTUAL_INSURER_PREFIX.captures(name) {
        return InsuranceRewrite {
            name: caps[1].trim().to_string(),
            protected: false,
        };
    }

    if let Some(caps) = MUTUAL_INSURER_SUFFIX.captures(name) {
        let owner = caps[1].trim();
        let genitive = owner
            .split_whitespace()
            .next()
            .is_some_and(|first| first.ends_with('n'));
        if genitive {
            return InsuranceRewrite {
                name: name.to_string(),
                protected: true,
            };
        }
        return InsuranceRewrite {
            name: owner.to_string(),
            protected: false,
        };
    }

    unchanged
}

/// True when "osuuskunta" follows a genitive word ("Festivaaliorkesterin Osuuskunta").
pub fn osuuskunta_is_genitive(name: &str) -> bool {
    OSUUSKUNTA_AFTER_WORD
        .captures(name)
        .is_some_and(|caps| caps[1].ends_with('n'))
}

pub fn protect_osuuskunta(name: &str) -> String {
    OSUUSKUNTA_WORD
        .replace_all(name, OSUUSKUNTA_PLACEHOLDER)
        .into_owned()
}

/// Put "osuuskunta" back, spelled as it first appeared in `original`.
pub fn restore_osuuskunta(cleaned: &str, original: &str) -> String {
    let form = OSUUSKUNTA_WORD
        .find(original)
        .map_or("Osuuskunta", |m| m.as_str());
    PLACEHOLDER_WORD.replace_all(cleaned, form).into_owned()
}

/// True when "Group" is immediately followed by one of `terms` (raw spellings).
pub fn group_before_legal_form<I, S>(name: &str, terms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lower = name.to_lowercase();
    let Some(caps) = GROUP_THEN_REST.captures(&lower) else {
        return false;
    };
    let rest = caps.get(1).map_or("", |m| m.as_str());
    terms.into_iter().any(|term| {
        let term = term.as_ref().trim().to_lowercase();
        !term.is_empty()
            && rest.starts_with(&term)
            && !rest[term.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric)
    })
}

/// Drop a trailing "Group" unless the words before it are too short to
/// stand alone ("ME Group", "G - J Group").
pub fn remove_group_if_safe(name: &str) -> String {
    TRAILING_GROUP
        .replace(name, |caps: &Captures| {
            let before = caps[1].trim();
            let letters: usize = before
                .split_whitespace()
                .map(|word| TRAILING_DASH.replace(word, ""))
                .filter(|word| !word.is_empty() && !ONLY_DASHES.is_match(word))
                .map(|word| word.chars().count())
                .sum();
            if letters < MIN_GROUP_NAME_LENGTH {
                caps[0].to_string()
            } else {
                before.to_string()
            }
        })
        .into_owned()
}

/// "Infineon Technologies Nordic" -> "Infineon Technologies"
pub fn trim_technologies_nordic(name: &str) -> String {
    TECHNOLOGIES_NORDIC
        .replace(name, " Technologies")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_insurer_prefix() {
        let cases = [
            ("Keskinäinen työeläkevakuutusyhtiö Varma", "Varma"),
            ("Keskinäinen Eläkevakuutusyhtiö Ilmarinen", "Ilmarinen"),
            ("Keskinäinen Työeläkevakuutusyhtiö Elo", "Elo"),
            ("Keskinäinen Vakuutusyhtiö Fennia", "Fennia"),
        ];
        for (input, expected) in cases {
            let out = handle_finnish_insurance_companies(input);
            assert_eq!(out.name, expected);
            assert!(!out.protected);
        }
    }

    #[test]
    fn test_mutual_insurer_suffix() {
        let out = handle_finnish_insurance_companies("LähiTapiola Keskinäinen Vakuutusyhtiö");
        assert_eq!(out.name, "LähiTapiola");
        assert!(!out.protected);

        let out = handle_finnish_insurance_companies("Valion Keskinäinen Vakuutusyhtiö");
        assert_eq!(out.name, "Valion Keskinäinen Vakuutusyhtiö");
        assert!(out.protected);
    }

    #[test]
    fn test_other_keskinainen_names_untouched() {
        let name = "Keskinäinen Osakeyhtiö Soleil du Sud Ltd";
        let out = handle_finnish_insurance_companies(name);
        assert_eq!(out.name, name);
        assert!(!out.protected);
    }

    #[test]
    fn test_osuuskunta_genitive() {
        assert!(osuuskunta_is_genitive("Helsingin Festivaaliorkesterin Osuuskunta"));
        assert!(!osuuskunta_is_genitive("Metsäliitto Osuuskunta"));
        assert!(!osuuskunta_is_genitive("OP Osuuskunta"));
        assert!(!osuuskunta_is_genitive("Osuuskunta Maitosuomi"));
        assert!(!osuuskunta_is_genitive("Kuusamon energia- ja vesiosuuskunta"));
    }

    #[test]
    fn test_osuuskunta_placeholder_round_trip() {
        let original = "Helsingin Festivaaliorkesterin osuuskunta";
        let protected = protect_osuuskunta(original);
        assert_eq!(protected, "Helsingin Festivaaliorkesterin OSUUSKUNTA_PLACEHOLDER");
        assert_eq!(restore_osuuskunta(&protected, original), original);
        assert_eq!(
            restore_osuuskunta("X OSUUSKUNTA_PLACEHOLDER", "no match here"),
            "X Osuuskunta"
        );
    }

    #[test]
    fn test_group_before_legal_form() {
        let terms = ["oy", "oyj", "ab", "suomi"];
        assert!(group_before_legal_form("Anora Group Oyj", terms));
        assert!(group_before_legal_form("Enity Bank Group AB (publ), filial i Finland", terms));
        assert!(group_before_legal_form("Posti Group Suomi", terms));
        assert!(!group_before_legal_form("LP-Group Nummela Oy", terms));
        assert!(!group_before_legal_form("Acme Group Abrasives", terms));
        assert!(!group_before_legal_form("Acme Group", terms));
        assert!(!group_before_legal_form("Groupama Oy", terms));
    }

    #[test]
    fn test_remove_group_length_boundary() {
        assert_eq!(remove_group_if_safe("Anora Group"), "Anora");
        assert_eq!(remove_group_if_safe("Pihla Group"), "Pihla");
        assert_eq!(remove_group_if_safe("KSPT Group"), "KSPT Group");
        assert_eq!(remove_group_if_safe("ME Group"), "ME Group");
        assert_eq!(remove_group_if_safe("G - J Group"), "G - J Group");
        assert_eq!(remove_group_if_safe("Enity Bank Group"), "Enity Bank");
        assert_eq!(remove_group_if_safe("Anora Group Finance"), "Anora Group Finance");
    }

    #[test]
    fn test_trim_technologies_nordic() {
        assert_eq!(
            trim_technologies_nordic("Infineon Technologies Nordic"),
            "Infineon Technologies"
        );
        assert_eq!(
            trim_technologies_nordic("LG Electronics Nordic"),
            "LG Electronics Nordic"
        );
    }
}
