//! Character-set configuration and the default alphabets.
//!
//! The field names match the `characters` section of a model config so a
//! config written by the training side can be deserialized directly.

use crate::error::{Result, TextError};
use crate::symbols::table::SymbolTable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default padding symbol
pub const DEFAULT_PAD: &str = "_";
/// Default end-of-sequence symbol
pub const DEFAULT_EOS: &str = "~";
/// Default begin-of-sequence symbol
pub const DEFAULT_BOS: &str = "^";
/// Default grapheme characters (letters plus punctuation)
pub const DEFAULT_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!'(),-.:;? ";
/// Default punctuation appended to the phoneme alphabet
pub const DEFAULT_PUNCTUATIONS: &str = "!'(),-.:;? ";

const VOWELS: &str = "iyɨʉɯuɪʏʊeøɘəɵɤoɛœɜɞʌɔæɐaɶɑɒᵻ";
const NON_PULMONIC_CONSONANTS: &str = "ʘɓǀɗǃʄǂɠǁʛ";
const PULMONIC_CONSONANTS: &str =
    "pbtdʈɖcɟkɡqɢʔɴŋɲɳnɱmʙrʀⱱɾɽɸβfvθðszʃʒʂʐçʝxɣχʁħʕhɦɬɮʋɹɻjɰlɭʎʟ";
const SUPRASEGMENTALS: &str = "ˈˌːˑ";
const OTHER_SYMBOLS: &str = "ʍwɥʜʢʡɕʑɺɧ";
const DIACRITICS: &str = "ɚ˞ɫ";

/// Prefix that tags ARPAbet override symbols in the grapheme table.
///
/// Plain grapheme symbols are single characters, so a tagged entry such as
/// `@AH0` can never collide with one of them.
pub const ARPABET_TAG: char = '@';

/// The CMU ARPAbet inventory, stress variants included.
pub const ARPABET: [&str; 84] = [
    "AA", "AA0", "AA1", "AA2", "AE", "AE0", "AE1", "AE2", "AH", "AH0", "AH1", "AH2", "AO", "AO0",
    "AO1", "AO2", "AW", "AW0", "AW1", "AW2", "AY", "AY0", "AY1", "AY2", "B", "CH", "D", "DH", "EH",
    "EH0", "EH1", "EH2", "ER", "ER0", "ER1", "ER2", "EY", "EY0", "EY1", "EY2", "F", "G", "HH",
    "IH", "IH0", "IH1", "IH2", "IY", "IY0", "IY1", "IY2", "JH", "K", "L", "M", "N", "NG", "OW",
    "OW0", "OW1", "OW2", "OY", "OY0", "OY1", "OY2", "P", "R", "S", "SH", "T", "TH", "UH", "UH0",
    "UH1", "UH2", "UW", "UW0", "UW1", "UW2", "V", "W", "Y", "Z", "ZH",
];

/// The default IPA phoneme inventory.
pub fn default_phonemes() -> String {
    [
        VOWELS,
        NON_PULMONIC_CONSONANTS,
        PULMONIC_CONSONANTS,
        SUPRASEGMENTALS,
        OTHER_SYMBOLS,
        DIACRITICS,
    ]
    .concat()
}

/// Configuration for a custom character set.
///
/// Empty `pad`/`eos`/`bos` strings leave the corresponding marker out of the
/// tables. `phonemes: None` disables the phoneme table entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharactersConfig {
    /// Padding symbol
    pub pad: String,
    /// End-of-sequence symbol
    pub eos: String,
    /// Begin-of-sequence symbol
    pub bos: String,
    /// Grapheme characters, one symbol per `char`
    pub characters: String,
    /// Punctuation appended to the phoneme table
    pub punctuations: String,
    /// Phoneme characters, one symbol per `char`
    pub phonemes: Option<String>,
    /// Deduplicate phoneme characters before sorting
    pub unique: bool,
    /// Append `@`-tagged ARPAbet symbols to the grapheme table
    pub arpabet: bool,
}

impl Default for CharactersConfig {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD.to_string(),
            eos: DEFAULT_EOS.to_string(),
            bos: DEFAULT_BOS.to_string(),
            characters: DEFAULT_CHARACTERS.to_string(),
            punctuations: DEFAULT_PUNCTUATIONS.to_string(),
            phonemes: Some(default_phonemes()),
            unique: true,
            arpabet: true,
        }
    }
}

impl CharactersConfig {
    /// Ordered grapheme symbols: markers, characters, then tagged ARPAbet.
    pub fn grapheme_symbols(&self) -> Vec<String> {
        let mut symbols = self.marker_symbols();
        symbols.extend(self.characters.chars().map(String::from));
        if self.arpabet {
            symbols.extend(ARPABET.iter().map(|s| format!("{ARPABET_TAG}{s}")));
        }
        symbols
    }

    /// Ordered phoneme symbols: markers, sorted phonemes, then punctuation.
    pub fn phoneme_symbols(&self) -> Option<Vec<String>> {
        let phonemes = self.phonemes.as_ref()?;

        let mut sorted: Vec<char> = phonemes.chars().collect();
        sorted.sort_unstable();
        if self.unique {
            sorted.dedup();
        }

        let mut symbols = self.marker_symbols();
        symbols.extend(sorted.into_iter().map(String::from));
        symbols.extend(self.punctuations.chars().map(String::from));
        Some(symbols)
    }

    fn marker_symbols(&self) -> Vec<String> {
        [&self.pad, &self.eos, &self.bos]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    }

    /// Build both tables described by this configuration.
    pub fn build(&self) -> Result<SymbolSet> {
        let graphemes = SymbolTable::from_symbols(self.grapheme_symbols())
            .and_then(|t| t.with_markers(&self.pad, &self.eos, &self.bos))
            .map_err(|e| TextError::config(format!("grapheme table: {e}")))?;

        let phonemes = match self.phoneme_symbols() {
            Some(symbols) => Some(Arc::new(
                SymbolTable::from_symbols(symbols)
                    .and_then(|t| t.with_markers(&self.pad, &self.eos, &self.bos))
                    .map_err(|e| TextError::config(format!("phoneme table: {e}")))?,
            )),
            None => None,
        };

        Ok(SymbolSet {
            config: self.clone(),
            graphemes: Arc::new(graphemes),
            phonemes,
        })
    }
}

/// Grapheme and phoneme tables built from one configuration.
#[derive(Debug, Clone)]
pub struct SymbolSet {
    config: CharactersConfig,
    graphemes: Arc<SymbolTable>,
    phonemes: Option<Arc<SymbolTable>>,
}

impl SymbolSet {
    /// The configuration these tables were built from.
    pub fn config(&self) -> &CharactersConfig {
        &self.config
    }

    /// The grapheme table.
    pub fn graphemes(&self) -> &Arc<SymbolTable> {
        &self.graphemes
    }

    /// The phoneme table, or a configuration error when none was configured.
    pub fn phonemes(&self) -> Result<&Arc<SymbolTable>> {
        self.phonemes
            .as_ref()
            .ok_or_else(|| TextError::config("no phoneme alphabet configured"))
    }
}
