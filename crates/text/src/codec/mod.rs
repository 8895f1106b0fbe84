//! Text and phoneme codec.
//!
//! This module ties cleaning, phonemization and the symbol tables together:
//! raw text goes in, model-ready IDs come out, and IDs decode back to text.
//! The free functions use the process-wide [`SymbolRegistry::global`];
//! [`TextCodec`] owns its own registry and settings.

mod overrides;

pub use overrides::{split_overrides, Segment};

use crate::cleaners::CleanerPipeline;
use crate::phonemizer::PhonemizerRegistry;
use crate::segmenter::Segmenter;
use crate::utils::{CacheStats, PhonemeCache};
use phonoseq_core::{
    strip_blanks, CharactersConfig, EncodedSequence, GraphemeEncoder, PhonemeEncoder, Result,
    SymbolRegistry, SymbolSet, SymbolTable, TextError,
};
use std::sync::{Arc, Mutex};

/// Settings for a [`TextCodec`].
#[derive(Debug, Clone, PartialEq)]
pub struct CodecConfig {
    /// Cleaner names, applied in order
    pub cleaners: Vec<String>,
    /// Encode phonemes instead of graphemes
    pub use_phonemes: bool,
    /// Language for phonemization and sentence splitting
    pub language: String,
    /// Interleave the blank ID
    pub add_blank: bool,
    /// Wrap sequences in bos/eos
    pub enable_eos_bos: bool,
    /// Custom alphabets; the defaults when `None`
    pub characters: Option<CharactersConfig>,
    /// Phoneme cache capacity, 0 disables the cache
    pub cache_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            cleaners: vec!["english_cleaners".to_string()],
            use_phonemes: false,
            language: "en-us".to_string(),
            add_blank: false,
            enable_eos_bos: false,
            characters: None,
            cache_capacity: 1000,
        }
    }
}

/// Builder for creating a codec.
#[derive(Debug, Clone, Default)]
pub struct TextCodecBuilder {
    config: CodecConfig,
    registry: Option<Arc<SymbolRegistry>>,
    phonemizers: PhonemizerRegistry,
}

impl TextCodecBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the cleaner names.
    pub fn cleaners<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.cleaners = names.into_iter().map(Into::into).collect();
        self
    }

    /// Switch between phoneme and grapheme encoding.
    pub fn use_phonemes(mut self, enabled: bool) -> Self {
        self.config.use_phonemes = enabled;
        self
    }

    /// Set the language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Interleave blank IDs.
    pub fn add_blank(mut self, enabled: bool) -> Self {
        self.config.add_blank = enabled;
        self
    }

    /// Wrap sequences in bos/eos.
    pub fn enable_eos_bos(mut self, enabled: bool) -> Self {
        self.config.enable_eos_bos = enabled;
        self
    }

    /// Use custom alphabets.
    pub fn characters(mut self, characters: CharactersConfig) -> Self {
        self.config.characters = Some(characters);
        self
    }

    /// Set the phoneme cache capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Share an existing symbol registry.
    pub fn registry(mut self, registry: Arc<SymbolRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the phonemizer backends.
    pub fn phonemizers(mut self, phonemizers: PhonemizerRegistry) -> Self {
        self.phonemizers = phonemizers;
        self
    }

    /// Build the codec.
    pub fn build(self) -> Result<TextCodec> {
        TextCodec::with_parts(self.config, self.registry, self.phonemizers)
    }
}

/// High-level codec over one symbol registry.
///
/// Every call takes one snapshot of the registry and uses it throughout, so
/// a concurrent [`TextCodec::rebuild_symbols`] is never observed half-way.
#[derive(Debug)]
pub struct TextCodec {
    config: CodecConfig,
    pipeline: CleanerPipeline,
    registry: Arc<SymbolRegistry>,
    phonemizers: PhonemizerRegistry,
    segmenter: Option<Segmenter>,
    cache: Option<Mutex<PhonemeCache>>,
}

impl TextCodec {
    /// Create a codec without phonemizer backends.
    pub fn new(config: CodecConfig) -> Result<Self> {
        Self::with_parts(config, None, PhonemizerRegistry::new())
    }

    /// Create a codec builder.
    pub fn builder() -> TextCodecBuilder {
        TextCodecBuilder::new()
    }

    fn with_parts(
        config: CodecConfig,
        registry: Option<Arc<SymbolRegistry>>,
        phonemizers: PhonemizerRegistry,
    ) -> Result<Self> {
        let pipeline = CleanerPipeline::from_names(&config.cleaners)?;

        let registry = match (registry, &config.characters) {
            (Some(registry), Some(characters)) => {
                registry.rebuild(characters)?;
                registry
            }
            (Some(registry), None) => registry,
            (None, characters) => Arc::new(SymbolRegistry::new(
                characters.as_ref().unwrap_or(&CharactersConfig::default()),
            )?),
        };

        if config.use_phonemes {
            registry.snapshot().phonemes()?;
            phonemizers.get(&config.language)?;
        }

        let segmenter = Segmenter::new(&config.language).ok();
        let cache = (config.use_phonemes && config.cache_capacity > 0)
            .then(|| Mutex::new(PhonemeCache::with_capacity(config.cache_capacity)));

        Ok(Self {
            config,
            pipeline,
            registry,
            phonemizers,
            segmenter,
            cache,
        })
    }

    /// The codec settings.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The current symbol tables.
    pub fn symbols(&self) -> Arc<SymbolSet> {
        self.registry.snapshot()
    }

    /// The registry this codec reads.
    pub fn registry(&self) -> &Arc<SymbolRegistry> {
        &self.registry
    }

    /// Swap in tables built from `characters`.
    pub fn rebuild_symbols(&self, characters: &CharactersConfig) -> Result<()> {
        self.registry.rebuild(characters).map(|_| ())
    }

    /// Encode one text.
    pub fn encode(&self, text: &str) -> Result<EncodedSequence> {
        let set = self.registry.snapshot();
        let (seq, table) = if self.config.use_phonemes {
            let table = set.phonemes()?;
            let cleaned = self.pipeline.apply(text);
            let phonemes = self.phonemize(&cleaned)?;
            (PhonemeEncoder::new(Arc::clone(table)).encode(&phonemes), table)
        } else {
            let encoder = GraphemeEncoder::new(Arc::clone(set.graphemes()));
            (encode_graphemes(text, &self.pipeline, &encoder), set.graphemes())
        };

        finish(seq, table, self.config.add_blank, self.config.enable_eos_bos)
    }

    /// Decode IDs produced by [`TextCodec::encode`].
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let set = self.registry.snapshot();
        if self.config.use_phonemes {
            let table = set.phonemes()?;
            let ids = content_ids(ids, table, self.config.add_blank);
            Ok(PhonemeEncoder::new(Arc::clone(table)).decode(&ids))
        } else {
            let table = set.graphemes();
            let ids = content_ids(ids, table, self.config.add_blank);
            Ok(GraphemeEncoder::new(Arc::clone(table)).decode(&ids))
        }
    }

    /// Split text into sentences and encode each one.
    pub fn encode_sentences(&self, text: &str) -> Result<Vec<EncodedSequence>> {
        let segmenter = self
            .segmenter
            .as_ref()
            .ok_or_else(|| TextError::UnsupportedLanguage(self.config.language.clone()))?;
        segmenter
            .segment(text)
            .map(|sentence| self.encode(sentence))
            .collect()
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch(&self, texts: &[String]) -> Result<Vec<EncodedSequence>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.encode(text))
            .collect::<std::result::Result<Vec<_>, _>>()
    }

    /// Phoneme cache statistics, when caching is on.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache
            .as_ref()
            .map(|cache| cache.lock().unwrap_or_else(|e| e.into_inner()).stats())
    }

    fn phonemize(&self, cleaned: &str) -> Result<String> {
        let language = &self.config.language;
        match &self.cache {
            Some(cache) => cache
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .get_or_phonemize(language, cleaned, |text| {
                    self.phonemizers.phonemize(text, language)
                }),
            None => self.phonemizers.phonemize(cleaned, language),
        }
    }
}

/// Clean and encode text, honouring `{...}` ARPAbet overrides.
fn encode_graphemes(
    text: &str,
    pipeline: &CleanerPipeline,
    encoder: &GraphemeEncoder,
) -> EncodedSequence {
    let mut seq = EncodedSequence::new();
    for segment in split_overrides(text) {
        match segment {
            Segment::Text(plain) => seq.append(encoder.encode(&pipeline.apply(&plain))),
            Segment::Override(symbols) => seq.append(encoder.encode_arpabet(symbols)),
        }
    }
    seq
}

/// Blanks first, then the bos/eos wrap on the outside.
fn finish(
    seq: EncodedSequence,
    table: &SymbolTable,
    add_blank: bool,
    enable_eos_bos: bool,
) -> Result<EncodedSequence> {
    if seq.dropped > 0 {
        log::debug!("dropped {} symbols missing from the table", seq.dropped);
    }
    let seq = if add_blank { seq.with_blanks(table) } else { seq };
    if enable_eos_bos {
        seq.with_eos_bos(table)
    } else {
        Ok(seq)
    }
}

/// IDs that carry content: blanks and pad/eos/bos removed.
fn content_ids(ids: &[u32], table: &SymbolTable, add_blank: bool) -> Vec<u32> {
    let ids = if add_blank {
        strip_blanks(ids, table.blank_id())
    } else {
        ids.to_vec()
    };
    let markers = table.markers();
    ids.into_iter().filter(|&id| !markers.is_marker(id)).collect()
}

/// Convert text to grapheme IDs.
///
/// Text outside `{...}` groups is cleaned and encoded per character; group
/// content is looked up as tagged ARPAbet symbols. Unknown symbols are
/// skipped and counted in [`EncodedSequence::dropped`].
pub fn text_to_sequence<S: AsRef<str>>(
    text: &str,
    cleaner_names: &[S],
    table_override: Option<&CharactersConfig>,
    add_blank: bool,
) -> Result<EncodedSequence> {
    let pipeline = CleanerPipeline::from_names(cleaner_names)?;
    let set = SymbolRegistry::global().resolve(table_override)?;
    let encoder = GraphemeEncoder::new(Arc::clone(set.graphemes()));
    finish(
        encode_graphemes(text, &pipeline, &encoder),
        set.graphemes(),
        add_blank,
        false,
    )
}

/// Convert text to phoneme IDs through the phonemizer for `language`.
pub fn phoneme_to_sequence<S: AsRef<str>>(
    text: &str,
    cleaner_names: &[S],
    language: &str,
    phonemizers: &PhonemizerRegistry,
    enable_eos_bos: bool,
    table_override: Option<&CharactersConfig>,
    add_blank: bool,
) -> Result<EncodedSequence> {
    let pipeline = CleanerPipeline::from_names(cleaner_names)?;
    let set = SymbolRegistry::global().resolve(table_override)?;
    let table = set.phonemes()?;

    let phonemes = phonemizers.phonemize(&pipeline.apply(text), language)?;
    let seq = PhonemeEncoder::new(Arc::clone(table)).encode(&phonemes);
    finish(seq, table, add_blank, enable_eos_bos)
}

/// Convert grapheme IDs back to text.
///
/// Out-of-range IDs are skipped; ARPAbet symbols come back in braces.
pub fn sequence_to_text(
    ids: &[u32],
    table_override: Option<&CharactersConfig>,
    add_blank: bool,
) -> Result<String> {
    let set = SymbolRegistry::global().resolve(table_override)?;
    let table = set.graphemes();
    let ids = content_ids(ids, table, add_blank);
    Ok(GraphemeEncoder::new(Arc::clone(table)).decode(&ids))
}

/// Convert phoneme IDs back to a phoneme string.
pub fn sequence_to_phoneme(
    ids: &[u32],
    table_override: Option<&CharactersConfig>,
    add_blank: bool,
) -> Result<String> {
    let set = SymbolRegistry::global().resolve(table_override)?;
    let table = set.phonemes()?;
    let ids = content_ids(ids, table, add_blank);
    Ok(PhonemeEncoder::new(Arc::clone(table)).decode(&ids))
}
