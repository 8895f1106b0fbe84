//! Symbol tables and their configuration.

pub mod config;
pub mod registry;
pub mod table;

pub use config::{CharactersConfig, SymbolSet, ARPABET, ARPABET_TAG};
pub use registry::SymbolRegistry;
pub use table::{Markers, SymbolTable};
