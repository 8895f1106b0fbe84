//! Serialized form of a model's text settings.

use crate::codec::CodecConfig;
use phonoseq_core::CharactersConfig;
use serde::{Deserialize, Serialize};

/// Text settings stored in a model config.
///
/// Unknown keys are ignored, so a full model config (audio, training
/// sections and so on) can be read directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelTextConfig {
    /// Custom alphabets, `None` for the defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<CharactersConfig>,
    /// Train and synthesize on phonemes
    pub use_phonemes: bool,
    /// Phonemizer language
    pub phoneme_language: String,
    /// Cleaner name
    pub text_cleaner: String,
    /// Blank interleaving
    pub add_blank: bool,
    /// Bos/eos wrapping
    pub enable_eos_bos_chars: bool,
}

impl Default for ModelTextConfig {
    fn default() -> Self {
        Self {
            characters: None,
            use_phonemes: false,
            phoneme_language: "en-us".to_string(),
            text_cleaner: "english_cleaners".to_string(),
            add_blank: false,
            enable_eos_bos_chars: false,
        }
    }
}

impl ModelTextConfig {
    /// Codec settings equivalent to this model config.
    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig::from(self)
    }
}

impl From<&ModelTextConfig> for CodecConfig {
    fn from(model: &ModelTextConfig) -> Self {
        Self {
            cleaners: vec![model.text_cleaner.clone()],
            use_phonemes: model.use_phonemes,
            language: model.phoneme_language.clone(),
            add_blank: model.add_blank,
            enable_eos_bos: model.enable_eos_bos_chars,
            characters: model.characters.clone(),
            ..Default::default()
        }
    }
}
