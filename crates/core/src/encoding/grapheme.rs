//! Grapheme-level encoding.
//!
//! Each `char` of cleaned text is one symbol. ARPAbet override tokens are
//! looked up with the [`ARPABET_TAG`] prefix so they live in their own part
//! of the table.

use crate::encoding::sequence::EncodedSequence;
use crate::symbols::{SymbolTable, ARPABET_TAG};
use std::sync::Arc;

/// Grapheme encoder bound to one table snapshot.
#[derive(Debug, Clone)]
pub struct GraphemeEncoder {
    table: Arc<SymbolTable>,
}

impl GraphemeEncoder {
    /// Create an encoder over `table`.
    pub fn new(table: Arc<SymbolTable>) -> Self {
        Self { table }
    }

    /// The table this encoder reads.
    pub fn table(&self) -> &Arc<SymbolTable> {
        &self.table
    }

    /// Encode cleaned text one character at a time.
    ///
    /// Characters missing from the table, and the pad/eos/bos markers, are
    /// skipped and counted rather than reported: unknown punctuation must
    /// never abort an encode.
    pub fn encode(&self, text: &str) -> EncodedSequence {
        let mut seq = EncodedSequence::new();
        let mut buf = [0u8; 4];

        for c in text.chars() {
            let symbol: &str = c.encode_utf8(&mut buf);
            match self.keep(symbol) {
                Some(id) => seq.ids.push(id),
                None => {
                    log::trace!("skipping grapheme {symbol:?}");
                    seq.dropped += 1;
                }
            }
        }

        seq
    }

    /// Encode the whitespace-separated content of a `{...}` override.
    pub fn encode_arpabet(&self, text: &str) -> EncodedSequence {
        let mut seq = EncodedSequence::new();
        let mut tagged = String::new();

        for token in text.split_whitespace() {
            tagged.clear();
            tagged.push(ARPABET_TAG);
            tagged.push_str(token);
            match self.keep(&tagged) {
                Some(id) => seq.ids.push(id),
                None => {
                    log::trace!("skipping override symbol {token:?}");
                    seq.dropped += 1;
                }
            }
        }

        seq
    }

    fn keep(&self, symbol: &str) -> Option<u32> {
        self.table
            .get_id(symbol)
            .filter(|&id| !self.table.markers().is_marker(id))
    }

    /// Decode IDs back to text.
    ///
    /// IDs outside the table are skipped. Tagged ARPAbet symbols come back in
    /// braces, and adjacent override groups are joined with a space.
    pub fn decode(&self, ids: &[u32]) -> String {
        let mut result = String::with_capacity(ids.len());

        for &id in ids {
            let Some(symbol) = self.table.get_symbol(id) else {
                continue;
            };
            match symbol.strip_prefix(ARPABET_TAG) {
                Some(arpabet) if !arpabet.is_empty() => {
                    result.push('{');
                    result.push_str(arpabet);
                    result.push('}');
                }
                _ => result.push_str(symbol),
            }
        }

        result.replace("}{", " ")
    }
}
