//! Encoded ID sequences and the transforms applied to them.

use crate::error::{Result, TextError};
use crate::symbols::SymbolTable;

/// Result of encoding text into symbol IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSequence {
    /// Symbol IDs
    pub ids: Vec<u32>,
    /// Number of input symbols skipped because the table lacks them
    pub dropped: usize,
}

impl EncodedSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of IDs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Append another sequence, summing drop counts.
    pub fn append(&mut self, other: EncodedSequence) {
        self.ids.extend(other.ids);
        self.dropped += other.dropped;
    }

    /// Wrap in the table's bos and eos IDs.
    pub fn with_eos_bos(mut self, table: &SymbolTable) -> Result<Self> {
        self.ids = pad_with_eos_bos(&self.ids, table)?;
        Ok(self)
    }

    /// Interleave the table's blank ID.
    pub fn with_blanks(mut self, table: &SymbolTable) -> Self {
        self.ids = intersperse(&self.ids, table.blank_id());
        self
    }

    /// Take the IDs.
    pub fn into_ids(self) -> Vec<u32> {
        self.ids
    }
}

impl From<Vec<u32>> for EncodedSequence {
    fn from(ids: Vec<u32>) -> Self {
        Self { ids, dropped: 0 }
    }
}

/// Put `token` before, between and after the IDs: `t, a, t, b, t`.
///
/// The output always has `2 * len + 1` entries.
pub fn intersperse(sequence: &[u32], token: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(sequence.len() * 2 + 1);
    result.push(token);
    for &id in sequence {
        result.push(id);
        result.push(token);
    }
    result
}

/// Remove every occurrence of `blank`.
pub fn strip_blanks(sequence: &[u32], blank: u32) -> Vec<u32> {
    sequence.iter().copied().filter(|&id| id != blank).collect()
}

/// Prefix the bos ID and suffix the eos ID.
///
/// Fails when the table was built without one of the markers.
pub fn pad_with_eos_bos(sequence: &[u32], table: &SymbolTable) -> Result<Vec<u32>> {
    let markers = table.markers();
    let bos = markers
        .bos
        .ok_or_else(|| TextError::config("table has no bos symbol"))?;
    let eos = markers
        .eos
        .ok_or_else(|| TextError::config("table has no eos symbol"))?;

    let mut result = Vec::with_capacity(sequence.len() + 2);
    result.push(bos);
    result.extend_from_slice(sequence);
    result.push(eos);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::from_symbols(["_", "~", "^", "a", "b"])
            .unwrap()
            .with_markers("_", "~", "^")
            .unwrap()
    }

    #[test]
    fn test_intersperse() {
        assert_eq!(intersperse(&[3, 4], 5), vec![5, 3, 5, 4, 5]);
        assert_eq!(intersperse(&[], 5), vec![5]);
    }

    #[test]
    fn test_strip_blanks() {
        assert_eq!(strip_blanks(&[5, 3, 5, 4, 5], 5), vec![3, 4]);
    }

    #[test]
    fn test_pad_with_eos_bos() {
        let padded = pad_with_eos_bos(&[3, 4], &table()).unwrap();
        assert_eq!(padded, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_pad_without_markers_fails() {
        let table = SymbolTable::from_symbols(["a", "b"]).unwrap();
        assert!(matches!(
            pad_with_eos_bos(&[0], &table),
            Err(TextError::Config(_))
        ));
    }

    #[test]
    fn test_eos_bos_outside_blanks() {
        let table = table();
        let seq = EncodedSequence::from(vec![3, 4])
            .with_blanks(&table)
            .with_eos_bos(&table)
            .unwrap();
        assert_eq!(seq.ids, vec![2, 5, 3, 5, 4, 5, 1]);
    }

    #[test]
    fn test_append_sums_drops() {
        let mut seq = EncodedSequence {
            ids: vec![1],
            dropped: 2,
        };
        seq.append(EncodedSequence {
            ids: vec![2, 3],
            dropped: 1,
        });
        assert_eq!(seq.ids, vec![1, 2, 3]);
        assert_eq!(seq.dropped, 3);
    }
}
