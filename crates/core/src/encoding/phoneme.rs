//! Phoneme-level encoding.
//!
//! Phonemizers return units separated by [`PHONEME_DELIMITER`]; every
//! character of a unit is looked up in the phoneme table.

use crate::encoding::sequence::EncodedSequence;
use crate::symbols::SymbolTable;
use std::sync::Arc;

/// Separator between phoneme units in phonemizer output.
pub const PHONEME_DELIMITER: char = '|';

/// Phoneme encoder bound to one table snapshot.
#[derive(Debug, Clone)]
pub struct PhonemeEncoder {
    table: Arc<SymbolTable>,
}

impl PhonemeEncoder {
    /// Create an encoder over `table`.
    pub fn new(table: Arc<SymbolTable>) -> Self {
        Self { table }
    }

    /// The table this encoder reads.
    pub fn table(&self) -> &Arc<SymbolTable> {
        &self.table
    }

    /// Encode a delimited phoneme string. Empty units are ignored.
    pub fn encode(&self, phonemes: &str) -> EncodedSequence {
        self.encode_units(phonemes.split(PHONEME_DELIMITER))
    }

    /// Encode already split phoneme units.
    pub fn encode_units<'a, I>(&self, units: I) -> EncodedSequence
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seq = EncodedSequence::new();
        let mut buf = [0u8; 4];

        for unit in units.into_iter().filter(|u| !u.is_empty()) {
            for c in unit.chars() {
                let symbol: &str = c.encode_utf8(&mut buf);
                match self
                    .table
                    .get_id(symbol)
                    .filter(|&id| !self.table.markers().is_marker(id))
                {
                    Some(id) => seq.ids.push(id),
                    None => {
                        log::trace!("skipping phoneme {symbol:?}");
                        seq.dropped += 1;
                    }
                }
            }
        }

        seq
    }

    /// Decode IDs back to a phoneme string, skipping IDs outside the table.
    pub fn decode(&self, ids: &[u32]) -> String {
        let result: String = ids
            .iter()
            .filter_map(|&id| self.table.get_symbol(id))
            .collect();
        result.replace("}{", " ")
    }
}
