//! English phonemizer backed by the CMU Pronouncing Dictionary.
//!
//! Dictionary pronunciations are ARPAbet; they are mapped to IPA so the
//! output lines up with the phoneme alphabet. Stress digits become `ˈ`/`ˌ`
//! units in front of the stressed vowel.

use super::{join_units, Phonemizer};
use cmudict_fast::{Cmudict, Rule};
use phonoseq_core::{Result, TextError};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Language code served by [`CmuPhonemizer`].
pub const LANGUAGE: &str = "en-us";

/// IPA for an ARPAbet base phone (stress digit removed).
///
/// `AH` and `ER` depend on stress: unstressed forms reduce to schwa. Every
/// output character is part of the default phoneme alphabet.
pub fn arpabet_to_ipa(phone: &str, stress: Option<char>) -> Option<&'static str> {
    let ipa = match phone {
        "AA" => "ɑ",
        "AE" => "æ",
        "AH" if stress == Some('0') => "ə",
        "AH" => "ʌ",
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AX" => "ə",
        "AXR" => "ɚ",
        "AY" => "aɪ",
        "EH" => "ɛ",
        "ER" if stress == Some('0') => "ɚ",
        "ER" => "ɜ˞",
        "EY" => "eɪ",
        "IH" => "ɪ",
        "IX" => "ɨ",
        "IY" => "i",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "UH" => "ʊ",
        "UW" => "u",
        "UX" => "ʉ",
        "B" => "b",
        "CH" => "tʃ",
        "D" => "d",
        "DH" => "ð",
        "DX" => "ɾ",
        "EL" => "əl",
        "EM" => "əm",
        "EN" => "ən",
        "F" => "f",
        "G" => "ɡ",
        "HH" => "h",
        "JH" => "dʒ",
        "K" => "k",
        "L" => "l",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "NX" => "ɾ",
        "P" => "p",
        "Q" => "ʔ",
        "R" => "ɹ",
        "S" => "s",
        "SH" => "ʃ",
        "T" => "t",
        "TH" => "θ",
        "V" => "v",
        "W" => "w",
        "WH" => "ʍ",
        "Y" => "j",
        "Z" => "z",
        "ZH" => "ʒ",
        _ => return None,
    };
    Some(ipa)
}

/// Split `AH0` into (`AH`, `Some('0')`).
fn split_stress(phone: &str) -> (&str, Option<char>) {
    match phone.chars().last() {
        Some(d @ '0'..='2') => (&phone[..phone.len() - 1], Some(d)),
        _ => (phone, None),
    }
}

/// Phoneme units for one ARPAbet pronunciation.
pub fn pronunciation_units<'a, I>(phones: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut units = Vec::new();
    for phone in phones {
        let (base, stress) = split_stress(phone);
        match stress {
            Some('1') => units.push("ˈ".to_string()),
            Some('2') => units.push("ˌ".to_string()),
            _ => {}
        }
        match arpabet_to_ipa(base, stress) {
            Some(ipa) => units.push(ipa.to_string()),
            None => units.push(base.to_lowercase()),
        }
    }
    units
}

/// CMU dictionary phonemizer for American English.
pub struct CmuPhonemizer {
    cmudict: Cmudict,
}

impl CmuPhonemizer {
    /// Load the dictionary (cmudict.dict format) from a file.
    pub fn new(dict_path: impl AsRef<Path>) -> Result<Self> {
        let path = dict_path.as_ref();
        let cmudict = Cmudict::new(path).map_err(|e| {
            TextError::Phonemizer(format!(
                "failed to load CMU dictionary {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self { cmudict })
    }

    fn rule(&self, word: &str) -> Option<&Rule> {
        self.cmudict.get(word).and_then(|rules| rules.first())
    }

    fn word_units(&self, word: &str, units: &mut Vec<String>) -> bool {
        let lower = word.to_lowercase();
        match self.rule(&lower) {
            Some(rule) => {
                let phones: Vec<String> = rule.pronunciation().iter().map(|p| p.to_string()).collect();
                units.extend(pronunciation_units(phones.iter().map(String::as_str)));
                true
            }
            None => {
                // Out of vocabulary: pass the letters through
                units.extend(lower.chars().map(String::from));
                false
            }
        }
    }
}

impl Phonemizer for CmuPhonemizer {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn phonemize(&self, text: &str) -> Result<String> {
        let mut units: Vec<String> = Vec::new();
        let mut oov = 0usize;

        for piece in text.split_word_bounds() {
            if piece.chars().all(char::is_whitespace) {
                if units.last().is_some_and(|u| u != " ") {
                    units.push(" ".to_string());
                }
            } else if piece.chars().any(char::is_alphabetic) {
                if !self.word_units(piece, &mut units) {
                    oov += 1;
                }
            } else {
                units.extend(piece.chars().map(String::from));
            }
        }

        if units.last().is_some_and(|u| u == " ") {
            units.pop();
        }
        if oov > 0 {
            log::warn!("{oov} word(s) not in the CMU dictionary, passed through as letters");
        }

        Ok(join_units(units))
    }
}
