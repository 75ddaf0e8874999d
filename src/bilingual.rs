//! Finnish/Swedish dual names: "Suomen X Oy - Finska X Ab" keeps the Finnish half.

use lazy_static::lazy_static;
use regex::Regex;

/// Separators between the Finnish and Swedish halves, tried in order.
pub const BILINGUAL_SEPARATORS: &[&str] = &[",", ";", " - ", " – ", " — "];

/// Swedish words that mark the second half of a dash-joined association name.
pub const SWEDISH_INDICATORS: &[&str] = &["föreningen", "förening", "kosmetolog"];

// Cheap pre-filter: without one of these the name cannot be bilingual
const QUICK_INDICATORS: &[&str] = &[
    " ry", " rf", " r.y.", " r.f.", " sr", " s.r.", " oy", " ab", " oyj", "osuuskunta",
    "andelslag", " co-op", " coop", "finska", "ruotsiksi", "i finland",
];

/// A Finnish legal form and its Swedish counterpart, each matched within
/// one half of the name.
#[derive(Debug)]
struct FormPair {
    finnish: Regex,
    swedish: Regex,
}

impl FormPair {
    fn new(finnish: &str, swedish: &str) -> Self {
        Self {
            finnish: Regex::new(finnish).unwrap(),
            swedish: Regex::new(swedish).unwrap(),
        }
    }

    fn splits(&self, first: &str, second: &str) -> bool {
        self.finnish.is_match(first) && self.swedish.is_match(second)
    }
}

lazy_static! {
    static ref FORM_PAIRS: Vec<FormPair> = vec![
        // ry / rf: registered association
        FormPair::new(r"(?i)\sry\b", r"(?i)\srf\b"),
        FormPair::new(r"(?i)\sr\.y\.", r"(?i)\sr\.f\."),
        // sr: foundation, same abbreviation in both languages
        FormPair::new(r"(?i)\ssr\b", r"(?i)\ssr\b"),
        FormPair::new(r"(?i)\ss\.r\.", r"(?i)\ss\.r\."),
        // Oy(j) / Ab: limited company
        FormPair::new(r"(?i)\soyj?\b", r"(?i)\sab\b"),
        // "Andelslaget", "Andelslag X", "... co-op"
        FormPair::new(r"(?i)(?:^|\s)osuuskunta\b", r"(?i)andelslag|\sco-?op\b"),
    ];

    // Same-sentence forms bridged by "Finska" / "ruotsiksi"; group 1 ends at the Finnish form
    static ref BRIDGED_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)^(.+?\sry)\s+.*?finska.*?\s+rf\b").unwrap(),
        Regex::new(r"(?i)^(.+?\sr\.y\.)\s+.*?(?:finska|ruotsiksi).*?\s+r\.f\.(?:\s|$)").unwrap(),
    ];
}

/// Reduce a Finnish/Swedish dual name to its Finnish part.
///
/// Returns the input unchanged unless both halves of a legal-form pair are
/// present (or a Swedish association name trails a dash).
pub fn split_bilingual_name(name: &str) -> &str {
    let lower = name.to_lowercase();
    if !QUICK_INDICATORS.iter().any(|ind| lower.contains(ind)) {
        return name;
    }

    // Each half must carry its own form: a lone "sr" is not a pair
    for sep in BILINGUAL_SEPARATORS {
        let Some((first, second)) = name.split_once(sep) else {
            continue;
        };
        let (first, second) = (first.trim(), second.trim());
        if FORM_PAIRS.iter().any(|p| p.splits(first, second)) {
            return first;
        }
    }

    // "X - Kosmetologföreningen i Finland ry"
    for sep in &BILINGUAL_SEPARATORS[2..] {
        let Some((first, second)) = name.split_once(sep) else {
            continue;
        };
        let second_lower = second.trim().to_lowercase();
        if second_lower.contains("i finland")
            && second_lower.ends_with(" ry")
            && SWEDISH_INDICATORS.iter().any(|ind| second_lower.contains(ind))
        {
            return first.trim();
        }
    }

    for pattern in BRIDGED_PATTERNS.iter() {
        if let Some(finnish) = pattern.captures(name).and_then(|caps| caps.get(1)) {
            return finnish.as_str().trim();
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_pairs() {
        let cases = [
            (
                "Suomen Lämpömittari Oy - Finska Termometer Ab",
                "Suomen Lämpömittari Oy",
            ),
            (
                "Helsingin Seudun Reserviläispiiri ry, Helsingfors Reservistdistrikt rf",
                "Helsingin Seudun Reserviläispiiri ry",
            ),
            (
                "Suomen Viiriäiskoirakerho ry;Finska Wachtelhundklubben rf",
                "Suomen Viiriäiskoirakerho ry",
            ),
            (
                "Suomen Tiedeseura r.y.;Finska Vetenskaps-Societeten r.f.",
                "Suomen Tiedeseura r.y.",
            ),
            (
                "Osuuskunta Meri Silta - Ocean Bridge co-op",
                "Osuuskunta Meri Silta",
            ),
            (
                "Osuuskunta Hamnskärin pienvenesatama - Andelslag Hamnskär småbåtshamn",
                "Osuuskunta Hamnskärin pienvenesatama",
            ),
            (
                "Osuuskunta Meri Silta - Andelslaget Havsbron",
                "Osuuskunta Meri Silta",
            ),
            (
                "Säätiö Alfa sr – Stiftelsen Alfa sr",
                "Säätiö Alfa sr",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(split_bilingual_name(input), expected, "{input}");
        }
    }

    #[test]
    fn test_swedish_association_after_dash() {
        assert_eq!(
            split_bilingual_name(
                "Suomen Kosmetologien Yhdistys - Kosmetologföreningen i Finland ry"
            ),
            "Suomen Kosmetologien Yhdistys"
        );
    }

    #[test]
    fn test_bridged_forms() {
        assert_eq!(
            split_bilingual_name("Suomen Tricologian yhdistys ry Finska Tricologi förening rf"),
            "Suomen Tricologian yhdistys ry"
        );
        assert_eq!(
            split_bilingual_name(
                "Omakotiyhdistys Hiekkakäpy r.y. ruotsiksi Egnahemsföreningen Sandkotten r.f."
            ),
            "Omakotiyhdistys Hiekkakäpy r.y."
        );
    }

    #[test]
    fn test_single_form_unchanged() {
        for name in [
            "Yhteismaa ry",
            "Ferrero Scandinavia AB, filial i Finland",
            "ASI Oy Ltd (ARGUS Spectrum International)",
            "Hue people in Finland ry",
            "OP Osuuskunta",
            "Acme Widgets",
        ] {
            assert_eq!(split_bilingual_name(name), name);
        }
    }

    #[test]
    fn test_foundation_form_needs_both_halves() {
        // "srl" is not "sr", and one "sr" alone is not a pair
        for name in [
            "Acme Srl, Beta Srl",
            "Acme Sro; Beta Sro",
            "Säätiö Alfa sr - Beta Oy",
            "Alfa Oy - Säätiö Beta sr",
        ] {
            assert_eq!(split_bilingual_name(name), name);
        }
    }

    #[test]
    fn test_pair_in_wrong_order_unchanged() {
        // Swedish half first: nothing to split off
        let name = "Finska Termometer Ab - Suomen Lämpömittari Oy";
        assert_eq!(split_bilingual_name(name), name);
        // Both forms but no separator or bridge word
        let name = "Hello Oy World Ab";
        assert_eq!(split_bilingual_name(name), name);
    }
}
