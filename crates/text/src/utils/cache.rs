//! Phonemization cache for repeated sentences.
//!
//! Phonemizer backends are the slow part of phoneme encoding, and TTS input
//! repeats itself (prompts, dataset epochs), so results are memoized per
//! `(language, cleaned text)`.

use ahash::AHashMap;
use phonoseq_core::Result;
use std::collections::VecDeque;

/// LRU cache for phonemizer output.
///
/// Uses a HashMap plus a recency queue with a fixed capacity. When the cache
/// exceeds capacity, the least recently used entry is evicted.
#[derive(Debug)]
pub struct PhonemeCache {
    /// (language, text) -> phoneme string
    cache: AHashMap<(String, String), String>,
    /// Maximum number of entries in the cache
    capacity: usize,
    /// Recency order, least recent first
    order: VecDeque<(String, String)>,
    hits: u64,
    misses: u64,
}

impl PhonemeCache {
    /// Create a new cache with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: AHashMap::with_capacity(capacity),
            capacity,
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with default capacity (1000).
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Get cached phonemes or compute them with `phonemize`.
    ///
    /// Errors from `phonemize` are returned and nothing is cached.
    pub fn get_or_phonemize<F>(&mut self, language: &str, text: &str, phonemize: F) -> Result<String>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let key = (language.to_string(), text.to_string());

        if let Some(cached) = self.cache.get(&key).cloned() {
            self.hits += 1;
            self.touch(&key);
            return Ok(cached);
        }

        self.misses += 1;
        let phonemes = phonemize(text)?;
        self.insert(key, phonemes.clone());
        Ok(phonemes)
    }

    fn touch(&mut self, key: &(String, String)) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn insert(&mut self, key: (String, String), value: String) {
        if self.capacity == 0 {
            return;
        }

        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.cache.remove(&oldest);
                }
                None => break,
            }
        }

        self.cache.insert(key.clone(), value);
        self.order.push_back(key);
    }

    /// Clear all entries and counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the cache capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            entries: self.cache.len(),
            capacity: self.capacity,
            hit_rate: (lookups > 0).then(|| self.hits as f64 / lookups as f64),
        }
    }
}

impl Default for PhonemeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum capacity
    pub capacity: usize,
    /// Cache hit rate (None before the first lookup)
    pub hit_rate: Option<f64>,
}
