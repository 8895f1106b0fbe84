//! Abbreviations that make a period ambiguous.

use ahash::AHashMap;

/// How an abbreviation affects a following sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbbreviationKind {
    /// Precedes a name or phrase (`Dr.`, `e.g.`): never ends a sentence
    /// when a word follows
    Title,
    /// Precedes a number (`No.`, `p.`): no boundary before a digit
    Numeric,
    /// May end a sentence (`Co.`, `Inc.`): boundary only before a
    /// capitalised word
    General,
}

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "mx", "dr", "drs", "prof", "rev", "fr", "gen", "gov", "sen", "rep", "pres",
    "capt", "cpt", "col", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "hon", "messrs",
    "mme", "mlle", "supt", "insp", "mt", "e.g", "i.e", "vs", "viz", "cf",
];

const NUMERIC: &[&str] = &[
    "no", "nos", "nr", "p", "pp", "vol", "vols", "art", "fig", "figs", "ch", "chap", "sec",
    "para", "ed", "op", "tel", "approx", "ca", "ref", "pt",
];

const GENERAL: &[&str] = &[
    "co", "corp", "inc", "ltd", "llc", "plc", "bros", "jr", "sr", "esq", "phd", "dept", "univ",
    "assn", "ave", "blvd", "rd", "st", "hwy", "ft", "etc", "al", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu",
    "thur", "thurs", "fri", "sat", "sun", "min", "max", "hr", "hrs", "oz", "lb", "lbs", "a.m",
    "p.m",
];

/// Lowercased abbreviation (no final period) -> kind.
#[derive(Debug, Clone, Default)]
pub struct Abbreviations {
    entries: AHashMap<String, AbbreviationKind>,
}

impl Abbreviations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The English set.
    pub fn english() -> Self {
        let mut abbreviations = Self::new();
        for (list, kind) in [
            (TITLES, AbbreviationKind::Title),
            (NUMERIC, AbbreviationKind::Numeric),
            (GENERAL, AbbreviationKind::General),
        ] {
            for abbr in list {
                abbreviations.insert(abbr, kind);
            }
        }
        abbreviations
    }

    /// Add or reclassify an abbreviation. Case and a final period are ignored.
    pub fn insert(&mut self, abbreviation: &str, kind: AbbreviationKind) {
        self.entries.insert(Self::key(abbreviation), kind);
    }

    /// Classify the word in front of a period.
    pub fn classify(&self, word: &str) -> Option<AbbreviationKind> {
        self.entries.get(&Self::key(word)).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(word: &str) -> String {
        word.trim_end_matches('.').to_lowercase()
    }
}
