//! Abbreviation expansion.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// English abbreviations and their spoken expansions.
const ENGLISH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternatives: Vec<&str> = ENGLISH_ABBREVIATIONS.iter().map(|(a, _)| *a).collect();
        Regex::new(&format!(r"(?i)\b({})\.", alternatives.join("|")))
            .expect("Invalid regex pattern")
    })
}

/// Expand abbreviations such as `Dr.` into words. Matching ignores case.
pub fn expand_abbreviations(text: &str) -> String {
    pattern()
        .replace_all(text, |caps: &Captures| {
            let found = caps[1].to_lowercase();
            ENGLISH_ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == found)
                .map(|(_, expansion)| (*expansion).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
