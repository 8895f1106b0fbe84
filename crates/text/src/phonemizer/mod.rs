//! Pluggable per-language phonemizers.
//!
//! A backend turns cleaned text into phoneme units separated by
//! [`PHONEME_DELIMITER`]. Backends are registered per language code; asking
//! for a language nobody registered fails fast with
//! [`TextError::UnsupportedLanguage`].

pub mod cmu;

pub use cmu::CmuPhonemizer;

use ahash::AHashMap;
use phonoseq_core::{Result, TextError, PHONEME_DELIMITER};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Capability of converting text in one language to phoneme units.
pub trait Phonemizer: Send + Sync {
    /// Language code this backend serves, e.g. `en-us`.
    fn language(&self) -> &str;

    /// Convert text to `|`-delimited phoneme units.
    fn phonemize(&self, text: &str) -> Result<String>;
}

/// Language code normalization: lowercase, `_` becomes `-`.
pub fn normalize_language(language: &str) -> String {
    language.trim().to_ascii_lowercase().replace('_', "-")
}

/// Join units with the phoneme delimiter.
pub fn join_units<I, S>(units: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, unit) in units.into_iter().enumerate() {
        if i > 0 {
            result.push(PHONEME_DELIMITER);
        }
        result.push_str(unit.as_ref());
    }
    result
}

/// Language code -> backend.
#[derive(Clone, Default)]
pub struct PhonemizerRegistry {
    backends: AHashMap<String, Arc<dyn Phonemizer>>,
}

impl PhonemizerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the CMU English backend under `en-us` and `en`.
    pub fn with_english(dict_path: impl AsRef<Path>) -> Result<Self> {
        let backend: Arc<dyn Phonemizer> = Arc::new(CmuPhonemizer::new(dict_path)?);
        let mut registry = Self::new();
        registry.register_as("en", Arc::clone(&backend));
        registry.register(backend);
        Ok(registry)
    }

    /// Register a backend under its own language code.
    pub fn register(&mut self, backend: Arc<dyn Phonemizer>) {
        let language = backend.language().to_string();
        self.register_as(&language, backend);
    }

    /// Register a backend under an explicit language code.
    pub fn register_as(&mut self, language: &str, backend: Arc<dyn Phonemizer>) {
        self.backends.insert(normalize_language(language), backend);
    }

    /// Look up the backend for a language.
    pub fn get(&self, language: &str) -> Result<Arc<dyn Phonemizer>> {
        self.backends
            .get(&normalize_language(language))
            .cloned()
            .ok_or_else(|| TextError::UnsupportedLanguage(language.to_string()))
    }

    /// Phonemize with the backend registered for `language`.
    pub fn phonemize(&self, text: &str, language: &str) -> Result<String> {
        self.get(language)?.phonemize(text)
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

impl fmt::Debug for PhonemizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhonemizerRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}
