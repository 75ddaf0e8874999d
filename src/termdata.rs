//! Built-in legal-form vocabulary.
//!
//! Raw strings as they appear in registers; normalization happens when a term
//! table is built. Countries are keyed by their canonical English name.

/// Terms grouped by legal-form type. Only consulted when no country is known.
pub static TERMS_BY_TYPE: &[(&str, &[&str])] = &[
    (
        "Association",
        &["ry", "r.y.", "rf", "r.f.", "e.v."],
    ),
    (
        "Cooperative",
        &[
            "cooperative",
            "co-operative",
            "coop",
            "co-op",
            "osuuskunta",
            "andelslag",
            "eg",
        ],
    ),
    (
        "Corporation",
        &[
            "corporation",
            "corp",
            "incorporated",
            "inc",
            "company",
            "co",
            "kabushiki kaisha",
            "kk",
        ],
    ),
    ("Foundation", &["sr", "s.r.", "stiftung", "stiftelse"]),
    ("General Partnership", &["gp", "ay", "hb", "ans", "ohg", "snc"]),
    (
        "Joint Stock Company",
        &[
            "plc", "ag", "sa", "s.a.", "nv", "asa", "oyj", "spa", "s.p.a.", "se", "ab", "as", "a/s",
        ],
    ),
    (
        "Limited",
        &[
            "limited",
            "ltd",
            "pty ltd",
            "pte ltd",
            "private limited",
            "pvt ltd",
            "co ltd",
            "company limited",
            "sdn bhd",
            "bhd",
        ],
    ),
    (
        "Limited Liability Company",
        &[
            "llc",
            "l.l.c.",
            "pllc",
            "gmbh",
            "mbh",
            "sp. z o.o.",
            "s.r.o.",
            "srl",
            "sarl",
            "oü",
            "sia",
            "uab",
            "kft",
            "ooo",
        ],
    ),
    ("Limited Partnership", &["lp", "l.p.", "kg", "ky", "kb", "ks"]),
    ("Sole Proprietorship", &["tmi", "toiminimi", "ek", "eurl"]),
];

/// Terms used regardless of the selected country.
pub static GLOBAL_TERMS: &[&str] = &[
    "ltd",
    "ltd.",
    "limited",
    "inc",
    "inc.",
    "incorporated",
    "llc",
    "llp",
    "plc",
    "corp",
    "corporation",
    "co",
    "co.",
    "co., ltd.",
    "company",
    "gmbh",
    "ag",
    "sa",
    "s.a.",
    "sarl",
    "s.à r.l.",
    "bv",
    "b.v.",
    "nv",
    "n.v.",
    "se",
    "ab",
    "oy",
    "as",
    "a/s",
    "aps",
    "spa",
    "srl",
    "pty",
    "pty ltd",
    "pty. ltd.",
    "pte ltd",
];

/// Country-specific terms.
pub static TERMS_BY_COUNTRY: &[(&str, &[&str])] = &[
    (
        "Czechia",
        &["s.r.o.", "spol. s r.o.", "a.s.", "v.o.s.", "k.s."],
    ),
    (
        "Denmark",
        &["a/s", "aps", "ivs", "i/s", "k/s", "p/s", "amba", "a.m.b.a.", "fmba", "smba"],
    ),
    ("Estonia", &["oü", "as", "tü", "uü", "mtü", "fie"]),
    (
        "Finland",
        &[
            "oy",
            "oyj",
            "oy ab",
            "osakeyhtiö",
            "julkinen osakeyhtiö",
            "ab",
            "abp",
            "aktiebolag",
            "ky",
            "kommandiittiyhtiö",
            "ay",
            "avoin yhtiö",
            "tmi",
            "toiminimi",
            "osuuskunta",
            "osk",
            "andelslag",
            "ry",
            "r.y.",
            "rf",
            "r.f.",
            "sr",
            "s.r.",
            "as oy",
            "as. oy",
            "as.oy",
            "asunto oy",
            "asunto-osakeyhtiö",
            "kiinteistö oy",
            "kiinteistöosakeyhtiö",
            "keskinäinen kiinteistöosakeyhtiö",
            "keskinäinen osakeyhtiö",
            "bostads ab",
            "fastighets ab",
            "försäkringsaktiebolaget",
            "oü",
            "suomi",
        ],
    ),
    ("France", &["sa", "sas", "sasu", "sarl", "eurl", "sci", "snc", "s.à r.l."]),
    (
        "Germany",
        &[
            "gmbh",
            "ag",
            "kg",
            "ohg",
            "gbr",
            "e.v.",
            "eg",
            "ug",
            "kgaa",
            "mbh",
            "gmbh & co. kg",
        ],
    ),
    ("Netherlands", &["bv", "b.v.", "nv", "n.v.", "vof", "cv", "bvba"]),
    ("Norway", &["as", "asa", "ans", "da", "ba", "sa", "nuf", "ks"]),
    (
        "Poland",
        &[
            "sp. z o.o.",
            "spółka z o.o.",
            "spółka z ograniczoną odpowiedzialnością",
            "s.a.",
            "sp.j.",
            "sp.k.",
            "spółka akcyjna",
        ],
    ),
    (
        "Russia",
        &["ООО", "ОАО", "ЗАО", "ПАО", "АО", "ooo", "oao", "zao", "pao"],
    ),
    (
        "Sweden",
        &[
            "ab",
            "aktiebolag",
            "publ",
            "hb",
            "handelsbolag",
            "kb",
            "kommanditbolag",
            "ek för",
            "ekonomisk förening",
            "försäkringsaktiebolaget",
            "bankaktiebolag",
        ],
    ),
    ("United Kingdom", &["ltd", "limited", "plc", "llp", "cic", "lp"]),
    (
        "United States",
        &["llc", "inc", "corp", "lp", "l.p.", "pc", "p.c.", "pllc", "dba", "na", "n.a."],
    ),
];

/// Ways a country's name appears inside business names.
pub static COUNTRY_NAME_BY_COUNTRY: &[(&str, &[&str])] = &[
    ("Czechia", &["Czechia", "Czech Republic"]),
    ("Denmark", &["Denmark", "Danmark"]),
    ("Estonia", &["Estonia", "Eesti"]),
    ("Finland", &["Finland", "Suomi"]),
    ("France", &["France"]),
    ("Germany", &["Germany", "Deutschland"]),
    ("Netherlands", &["Netherlands", "Nederland", "Holland"]),
    ("Norway", &["Norway", "Norge"]),
    ("Poland", &["Poland", "Polska"]),
    ("Russia", &["Russia", "Россия"]),
    ("Sweden", &["Sweden", "Sverige"]),
    ("United Kingdom", &["United Kingdom", "Great Britain"]),
    ("United States", &["United States", "USA"]),
];

/// ISO 3166-1 alpha-2 codes accepted as country selectors.
pub static COUNTRY_CODES: &[(&str, &str)] = &[
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("RU", "Russia"),
    ("SE", "Sweden"),
    ("UK", "United Kingdom"),
    ("US", "United States"),
];
