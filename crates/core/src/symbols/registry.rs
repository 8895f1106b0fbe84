//! Process-wide owner of the active symbol tables.
//!
//! Readers take an `Arc` snapshot and keep using it for the whole call, so a
//! concurrent rebuild never hands them a half-updated mapping: they see the
//! old set or the new set, nothing in between.

use crate::error::Result;
use crate::symbols::config::{CharactersConfig, SymbolSet};
use std::sync::{Arc, OnceLock, RwLock};

/// Holds the current [`SymbolSet`] and swaps it atomically on rebuild.
#[derive(Debug)]
pub struct SymbolRegistry {
    current: RwLock<Arc<SymbolSet>>,
}

impl SymbolRegistry {
    /// Create a registry from a configuration.
    pub fn new(config: &CharactersConfig) -> Result<Self> {
        Ok(Self::from_set(config.build()?))
    }

    /// Create a registry around an already built set.
    pub fn from_set(set: SymbolSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// The shared registry seeded with the default alphabets.
    pub fn global() -> &'static SymbolRegistry {
        static GLOBAL: OnceLock<SymbolRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            SymbolRegistry::new(&CharactersConfig::default())
                .expect("default alphabets form valid symbol tables")
        })
    }

    /// The current tables.
    pub fn snapshot(&self) -> Arc<SymbolSet> {
        // Recover from a poisoned lock; the Arc inside is always whole
        Arc::clone(&self.current.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Replace the current tables with ones built from `config`.
    ///
    /// The new set is built before the lock is taken; the swap itself is a
    /// single pointer replacement. An unchanged configuration keeps the
    /// current set. On error the current set stays active.
    pub fn rebuild(&self, config: &CharactersConfig) -> Result<Arc<SymbolSet>> {
        let current = self.snapshot();
        if current.config() == config {
            return Ok(current);
        }

        let set = Arc::new(config.build()?);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&set);
        drop(guard);

        log::debug!(
            "rebuilt symbol tables: {} graphemes, {} phonemes",
            set.graphemes().len(),
            set.phonemes().map(|t| t.len()).unwrap_or(0)
        );
        Ok(set)
    }

    /// Tables for one call: rebuilt from `config` when given, current otherwise.
    pub fn resolve(&self, config: Option<&CharactersConfig>) -> Result<Arc<SymbolSet>> {
        match config {
            Some(config) => self.rebuild(config),
            None => Ok(self.snapshot()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> CharactersConfig {
        CharactersConfig {
            characters: "zyx".to_string(),
            arpabet: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_rebuild_swaps_tables() {
        let registry = SymbolRegistry::new(&CharactersConfig::default()).unwrap();
        let before = registry.snapshot();
        assert_eq!(before.graphemes().get_id("A"), Some(3));

        let after = registry.rebuild(&custom()).unwrap();
        assert_eq!(after.graphemes().get_id("z"), Some(3));
        assert_eq!(after.graphemes().get_id("A"), None);

        // The old snapshot is untouched
        assert_eq!(before.graphemes().get_id("A"), Some(3));
        assert!(Arc::ptr_eq(&registry.snapshot(), &after));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let registry = SymbolRegistry::new(&custom()).unwrap();
        let first = registry.snapshot();
        let second = registry.rebuild(&custom()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_failed_rebuild_keeps_current() {
        let registry = SymbolRegistry::new(&custom()).unwrap();
        let bad = CharactersConfig {
            characters: "aa".to_string(),
            ..custom()
        };
        assert!(registry.rebuild(&bad).is_err());
        assert_eq!(registry.snapshot().config(), &custom());
    }

    #[test]
    fn test_resolve_without_override() {
        let registry = SymbolRegistry::new(&custom()).unwrap();
        let set = registry.resolve(None).unwrap();
        assert!(Arc::ptr_eq(&set, &registry.snapshot()));
    }

    #[test]
    fn test_concurrent_readers_see_whole_tables() {
        let registry = Arc::new(SymbolRegistry::new(&CharactersConfig::default()).unwrap());
        let small = custom();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let set = registry.snapshot();
                        let table = set.graphemes();
                        // Either the default table or the three-letter one
                        assert!(table.len() == 6 || table.get_id("A").is_some());
                    }
                })
            })
            .collect();

        for i in 0..50 {
            if i % 2 == 0 {
                registry.rebuild(&small).unwrap();
            } else {
                registry.rebuild(&CharactersConfig::default()).unwrap();
            }
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
