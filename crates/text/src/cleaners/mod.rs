//! Text cleaning pipeline.
//!
//! Cleaners are named, pure `&str -> String` steps applied in order before
//! encoding. Names are resolved once, when the pipeline is built; an unknown
//! name is a configuration error.

pub mod abbreviations;
pub mod normalize;
pub mod numbers;

pub use abbreviations::expand_abbreviations;
pub use normalize::{
    collapse_whitespace, convert_to_ascii, lowercase, remove_aux_symbols, replace_symbols,
    turkish_lowercase,
};
pub use numbers::{expand_numbers, expand_time_english, number_to_words, ordinal_to_words};

use phonoseq_core::{Result, TextError};
use std::fmt;
use std::str::FromStr;

/// A single named cleaning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cleaner {
    /// Lowercase
    Lowercase,
    /// Collapse whitespace runs
    CollapseWhitespace,
    /// Transliterate to ASCII
    ConvertToAscii,
    /// Expand `Dr.`, `Mrs.`, ...
    ExpandAbbreviations,
    /// Spell out numbers, currency and ordinals
    ExpandNumbers,
    /// Spell out clock times
    ExpandTimeEnglish,
    /// Map `;`, `:`, `-`, `&` to pronounceable forms
    ReplaceSymbols,
    /// Drop brackets and double quotes
    RemoveAuxSymbols,
    /// lowercase + collapse_whitespace
    BasicCleaners,
    /// convert_to_ascii + lowercase + collapse_whitespace
    TransliterationCleaners,
    /// lowercase + collapse_whitespace, for German
    BasicGermanCleaners,
    /// Turkish lowercase + collapse_whitespace
    BasicTurkishCleaners,
    /// Full English pipeline for grapheme models
    EnglishCleaners,
    /// English pipeline for phoneme models (keeps case for the phonemizer)
    PhonemeCleaners,
}

impl Cleaner {
    /// All cleaners, in declaration order.
    pub const ALL: [Cleaner; 14] = [
        Cleaner::Lowercase,
        Cleaner::CollapseWhitespace,
        Cleaner::ConvertToAscii,
        Cleaner::ExpandAbbreviations,
        Cleaner::ExpandNumbers,
        Cleaner::ExpandTimeEnglish,
        Cleaner::ReplaceSymbols,
        Cleaner::RemoveAuxSymbols,
        Cleaner::BasicCleaners,
        Cleaner::TransliterationCleaners,
        Cleaner::BasicGermanCleaners,
        Cleaner::BasicTurkishCleaners,
        Cleaner::EnglishCleaners,
        Cleaner::PhonemeCleaners,
    ];

    /// Registry name of the cleaner.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::CollapseWhitespace => "collapse_whitespace",
            Self::ConvertToAscii => "convert_to_ascii",
            Self::ExpandAbbreviations => "expand_abbreviations",
            Self::ExpandNumbers => "expand_numbers",
            Self::ExpandTimeEnglish => "expand_time_english",
            Self::ReplaceSymbols => "replace_symbols",
            Self::RemoveAuxSymbols => "remove_aux_symbols",
            Self::BasicCleaners => "basic_cleaners",
            Self::TransliterationCleaners => "transliteration_cleaners",
            Self::BasicGermanCleaners => "basic_german_cleaners",
            Self::BasicTurkishCleaners => "basic_turkish_cleaners",
            Self::EnglishCleaners => "english_cleaners",
            Self::PhonemeCleaners => "phoneme_cleaners",
        }
    }

    /// Apply the step.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Lowercase => lowercase(text),
            Self::CollapseWhitespace => collapse_whitespace(text),
            Self::ConvertToAscii => convert_to_ascii(text),
            Self::ExpandAbbreviations => expand_abbreviations(text),
            Self::ExpandNumbers => expand_numbers(text),
            Self::ExpandTimeEnglish => expand_time_english(text),
            Self::ReplaceSymbols => replace_symbols(text),
            Self::RemoveAuxSymbols => remove_aux_symbols(text),
            Self::BasicCleaners | Self::BasicGermanCleaners => {
                collapse_whitespace(&lowercase(text))
            }
            Self::TransliterationCleaners => {
                collapse_whitespace(&lowercase(&convert_to_ascii(text)))
            }
            Self::BasicTurkishCleaners => collapse_whitespace(&turkish_lowercase(text)),
            Self::EnglishCleaners => {
                let text = lowercase(&convert_to_ascii(text));
                let text = expand_numbers(&expand_time_english(&text));
                let text = replace_symbols(&expand_abbreviations(&text));
                collapse_whitespace(&remove_aux_symbols(&text))
            }
            Self::PhonemeCleaners => {
                let text = expand_abbreviations(&expand_numbers(text));
                collapse_whitespace(&remove_aux_symbols(&replace_symbols(&text)))
            }
        }
    }
}

impl FromStr for Cleaner {
    type Err = TextError;

    fn from_str(name: &str) -> Result<Self> {
        Cleaner::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| TextError::config(format!("unknown cleaner: {name}")))
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, validated list of cleaners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanerPipeline {
    steps: Vec<Cleaner>,
}

impl CleanerPipeline {
    /// Create a pipeline from resolved steps.
    pub fn new(steps: Vec<Cleaner>) -> Self {
        Self { steps }
    }

    /// Resolve cleaner names, failing on the first unknown one.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let steps = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// The steps in order.
    pub fn steps(&self) -> &[Cleaner] {
        &self.steps
    }

    /// Check if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order.
    pub fn apply(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |text, step| step.apply(&text))
    }
}

/// Clean `text` with the named cleaners.
pub fn clean<S: AsRef<str>>(text: &str, cleaner_names: &[S]) -> Result<String> {
    Ok(CleanerPipeline::from_names(cleaner_names)?.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for cleaner in Cleaner::ALL {
            assert_eq!(cleaner.name().parse::<Cleaner>().unwrap(), cleaner);
        }
    }

    #[test]
    fn test_unknown_cleaner_is_config_error() {
        let err = CleanerPipeline::from_names(["basic_cleaners", "nope"]).unwrap_err();
        assert!(matches!(err, TextError::Config(ref m) if m.contains("nope")));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = CleanerPipeline::default();
        assert_eq!(pipeline.apply("Keep  Me"), "Keep  Me");
    }

    #[test]
    fn test_steps_run_in_order() {
        let text = "Dr. Who";
        let expand_first = CleanerPipeline::new(vec![Cleaner::ExpandAbbreviations, Cleaner::Lowercase]);
        let lower_first = CleanerPipeline::new(vec![Cleaner::Lowercase, Cleaner::ExpandAbbreviations]);
        assert_eq!(expand_first.apply(text), "doctor who");
        assert_eq!(lower_first.apply(text), "doctor who");

        let collapse_then_symbols =
            CleanerPipeline::new(vec![Cleaner::CollapseWhitespace, Cleaner::ReplaceSymbols]);
        assert_eq!(collapse_then_symbols.apply("a & b"), "a  and  b");
    }

    #[test]
    fn test_english_cleaners() {
        let cleaned = clean("Dr. Smith paid $5 at 3:30pm; it's “fine”.", &["english_cleaners"]).unwrap();
        assert_eq!(
            cleaned,
            "doctor smith paid five dollars at three thirty p m, it's fine."
        );
    }

    #[test]
    fn test_phoneme_cleaners_keep_case() {
        let cleaned = clean("Mr. Brown has 2 cats", &["phoneme_cleaners"]).unwrap();
        assert_eq!(cleaned, "mister Brown has two cats");
    }

    #[test]
    fn test_basic_cleaners() {
        assert_eq!(clean("  Hello\n\nWORLD ", &["basic_cleaners"]).unwrap(), " hello world ");
    }

    #[test]
    fn test_every_cleaner_total_on_odd_input() {
        let inputs = ["", " ", "\u{0}", "🎉🎉", "$", "£,", "12:", "{}"];
        for cleaner in Cleaner::ALL {
            for input in inputs {
                let _ = cleaner.apply(input);
            }
        }
    }
}
