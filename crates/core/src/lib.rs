//! phonoseq-core - Symbol tables and symbol-level encoding
//!
//! This crate provides the data structures that map text symbols to the
//! integer IDs a neural TTS decoder consumes, independent of how the text
//! was cleaned or phonemized.
//!
//! # Features
//!
//! - Grapheme and phoneme tables built from a serde-friendly configuration
//! - A registry that swaps tables atomically on rebuild
//! - Tolerant encoders that skip and count unknown symbols
//! - Blank interleaving and bos/eos wrapping
//!
//! # Example
//!
//! ```rust
//! use phonoseq_core::{CharactersConfig, GraphemeEncoder};
//! use std::sync::Arc;
//!
//! let set = CharactersConfig::default().build()?;
//! let encoder = GraphemeEncoder::new(Arc::clone(set.graphemes()));
//! let seq = encoder.encode("hello");
//! assert_eq!(encoder.decode(&seq.ids), "hello");
//! # Ok::<(), phonoseq_core::TextError>(())
//! ```

pub mod error;
pub use error::{Result, TextError};

// Symbol tables
pub mod symbols;
pub use symbols::{CharactersConfig, Markers, SymbolRegistry, SymbolSet, SymbolTable};

// Encoders
pub mod encoding;
pub use encoding::{
    intersperse, pad_with_eos_bos, strip_blanks, EncodedSequence, GraphemeEncoder,
    PhonemeEncoder, PHONEME_DELIMITER,
};
