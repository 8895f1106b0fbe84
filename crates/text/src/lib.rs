//! phonoseq-text - Text front end for speech synthesis
//!
//! This crate turns raw text into the symbol ID sequences a TTS model
//! consumes, and decodes them back, on top of the tables in
//! `phonoseq-core`.
//!
//! # Features
//!
//! - Named cleaner pipelines (lowercasing, transliteration, number and
//!   abbreviation expansion)
//! - Inline `{ARPAbet}` pronunciation overrides
//! - Pluggable phonemizers with a CMU dictionary backend
//! - Rule-based sentence segmentation for long-form input
//! - Blank interleaving and bos/eos wrapping
//! - Model config loading and saving
//!
//! # Example
//!
//! ```rust
//! use phonoseq_text::TextCodec;
//!
//! let codec = TextCodec::builder()
//!     .cleaners(["english_cleaners"])
//!     .add_blank(true)
//!     .build()?;
//!
//! let seq = codec.encode("Turn left on {HH AW1 S S T AH0 N} Street.")?;
//! assert_eq!(
//!     codec.decode(&seq.ids)?,
//!     "turn left on {HH AW1 S S T AH0 N} street."
//! );
//! # Ok::<(), phonoseq_text::TextError>(())
//! ```

// Re-export core types
pub use phonoseq_core::{CharactersConfig, EncodedSequence, Result, SymbolRegistry, TextError};

// Codec API
pub mod codec;
pub use codec::{
    phoneme_to_sequence, sequence_to_phoneme, sequence_to_text, text_to_sequence, CodecConfig,
    TextCodec, TextCodecBuilder,
};

// Cleaning
pub mod cleaners;
pub use cleaners::{clean, Cleaner, CleanerPipeline};

// Phonemization
pub mod phonemizer;
pub use phonemizer::{CmuPhonemizer, Phonemizer, PhonemizerRegistry};

// Sentence splitting
pub mod segmenter;
pub use segmenter::{split_into_sentences, AbbreviationKind, Segmenter, SegmenterConfig, Sentences};

// IO/Serialization
pub mod io;
pub use io::{load_config, save_config, ModelTextConfig};

// Utilities
pub mod utils;
pub use utils::PhonemeCache;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
