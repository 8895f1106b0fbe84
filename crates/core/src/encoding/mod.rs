//! Symbol-level encoders.
//!
//! - Grapheme: one symbol per character, plus tagged ARPAbet overrides
//! - Phoneme: delimited phonemizer output, one symbol per character

pub mod grapheme;
pub mod phoneme;
pub mod sequence;

pub use grapheme::GraphemeEncoder;
pub use phoneme::{PhonemeEncoder, PHONEME_DELIMITER};
pub use sequence::{intersperse, pad_with_eos_bos, strip_blanks, EncodedSequence};
