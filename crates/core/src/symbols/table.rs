//! Symbol storage and lookup.
//!
//! A table maps each symbol to a dense ID in `[0, len)`; the ID is the
//! symbol's position in the list the table was built from.

use crate::error::{Result, TextError};
use ahash::AHashMap;
use compact_str::CompactString;

/// Immutable bijection between symbol strings and dense IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    /// Forward mapping: symbol -> ID
    symbol_to_id: AHashMap<CompactString, u32>,
    /// Reverse mapping, indexed by ID
    id_to_symbol: Vec<CompactString>,
    /// Marker IDs (cached for fast access)
    markers: Markers,
}

impl SymbolTable {
    /// Build a table assigning IDs by position.
    ///
    /// Fails when the list is empty or holds the same symbol twice.
    pub fn from_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols = symbols.into_iter();
        let (lower, _) = symbols.size_hint();
        let mut symbol_to_id = AHashMap::with_capacity(lower);
        let mut id_to_symbol = Vec::with_capacity(lower);

        for symbol in symbols {
            let symbol = CompactString::new(symbol.as_ref());
            if symbol.is_empty() {
                return Err(TextError::config("empty symbol"));
            }
            let id = id_to_symbol.len() as u32;
            if symbol_to_id.insert(symbol.clone(), id).is_some() {
                return Err(TextError::config(format!("duplicate symbol {symbol:?}")));
            }
            id_to_symbol.push(symbol);
        }

        if id_to_symbol.is_empty() {
            return Err(TextError::config("symbol table has no symbols"));
        }

        Ok(Self {
            symbol_to_id,
            id_to_symbol,
            markers: Markers::default(),
        })
    }

    /// Resolve the pad/eos/bos markers against the table.
    ///
    /// An empty string means "no such marker"; a non-empty marker absent
    /// from the table is a configuration error.
    pub fn with_markers(mut self, pad: &str, eos: &str, bos: &str) -> Result<Self> {
        let resolve = |marker: &str| -> Result<Option<u32>> {
            if marker.is_empty() {
                return Ok(None);
            }
            self.get_id(marker)
                .map(Some)
                .ok_or_else(|| TextError::config(format!("marker {marker:?} is not in the table")))
        };
        let markers = Markers {
            pad: resolve(pad)?,
            eos: resolve(eos)?,
            bos: resolve(bos)?,
        };
        self.markers = markers;
        Ok(self)
    }

    /// Get the ID for a symbol, failing if absent.
    pub fn symbol_to_id(&self, symbol: &str) -> Result<u32> {
        self.get_id(symbol)
            .ok_or_else(|| TextError::UnknownSymbol(symbol.to_string()))
    }

    /// Get the symbol for an ID, failing if absent.
    pub fn id_to_symbol(&self, id: u32) -> Result<&str> {
        self.get_symbol(id).ok_or(TextError::UnknownId(id))
    }

    /// Get the ID for a symbol.
    #[inline]
    pub fn get_id(&self, symbol: &str) -> Option<u32> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Get the symbol for an ID.
    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&str> {
        self.id_to_symbol.get(id as usize).map(|s| s.as_str())
    }

    /// Number of real symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.id_to_symbol.len()
    }

    /// Always false for a successfully built table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id_to_symbol.is_empty()
    }

    /// ID of the blank token: one past the last real symbol.
    #[inline]
    pub fn blank_id(&self) -> u32 {
        self.id_to_symbol.len() as u32
    }

    /// Marker IDs.
    #[inline]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Padding symbol ID, if the table has one.
    pub fn pad_id(&self) -> Option<u32> {
        self.markers.pad
    }

    /// Begin-of-sequence symbol ID, if the table has one.
    pub fn bos_id(&self) -> Option<u32> {
        self.markers.bos
    }

    /// End-of-sequence symbol ID, if the table has one.
    pub fn eos_id(&self) -> Option<u32> {
        self.markers.eos
    }

    /// True when `symbol` is the pad, eos or bos marker.
    #[inline]
    pub fn is_structural(&self, symbol: &str) -> bool {
        self.get_id(symbol)
            .is_some_and(|id| self.markers.is_marker(id))
    }

    /// Symbols in ID order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.id_to_symbol.iter().map(|s| s.as_str())
    }
}

/// Pad/eos/bos marker IDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Padding symbol ID
    pub pad: Option<u32>,
    /// End-of-sequence symbol ID
    pub eos: Option<u32>,
    /// Begin-of-sequence symbol ID
    pub bos: Option<u32>,
}

impl Markers {
    /// Check if an ID is one of the markers.
    #[inline]
    pub fn is_marker(&self, id: u32) -> bool {
        Some(id) == self.pad || Some(id) == self.eos || Some(id) == self.bos
    }
}
