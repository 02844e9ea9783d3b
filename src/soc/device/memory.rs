//! Growable word-addressed memory. Every address reads as zero until written.
//! Writes just past the current end extend the dense backing store with
//! zeroes; writes further out land in a sparse overflow map.

use ahash::AHashMap;

use crate::soc::device::{DeviceError, DeviceResult};

/// Distance past the dense end that a write may reach and still grow the
/// dense store.
const GROWTH_WINDOW: usize = 1 << 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramMemory {
    words: Vec<i64>,
    sparse: AHashMap<usize, i64>,
    limit: Option<usize>,
}

impl ProgramMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `words` starting at address 0.
    pub fn from_words(words: &[i64]) -> Self {
        Self {
            words: words.to_vec(),
            ..Self::default()
        }
    }

    /// Caps the number of addressable words. Writes at or beyond `limit` fail
    /// with [`DeviceError::CapacityExceeded`]; reads are unaffected.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// One past the highest address of the dense store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sparse.is_empty()
    }

    /// The dense store, starting at address 0.
    pub fn as_slice(&self) -> &[i64] {
        &self.words
    }

    /// Number of written words held outside the dense store.
    pub fn sparse_len(&self) -> usize {
        self.sparse.len()
    }

    /// Reads the word at a storage index that is already known to be valid,
    /// used for instruction and parameter fetches.
    pub fn fetch(&self, index: usize) -> i64 {
        match self.words.get(index) {
            Some(word) => *word,
            None => self.sparse.get(&index).copied().unwrap_or(0),
        }
    }

    pub fn read(&self, address: i64) -> DeviceResult<i64> {
        Ok(self.fetch(to_index(address)?))
    }

    pub fn write(&mut self, address: i64, value: i64) -> DeviceResult<()> {
        let index = to_index(address)?;
        if let Some(limit) = self.limit {
            if index >= limit {
                return Err(DeviceError::CapacityExceeded {
                    address: index,
                    limit,
                });
            }
        }
        if index >= self.words.len().saturating_add(GROWTH_WINDOW) {
            self.sparse.insert(index, value);
            return Ok(());
        }
        if index >= self.words.len() {
            self.grow(index + 1);
        }
        self.words[index] = value;
        Ok(())
    }

    fn grow(&mut self, len: usize) {
        self.words.resize(len, 0);
        if self.sparse.is_empty() {
            return;
        }
        let words = &mut self.words;
        self.sparse.retain(|&index, value| match words.get_mut(index) {
            Some(slot) => {
                *slot = *value;
                false
            }
            None => true,
        });
    }
}

/// Converts a machine-level address into a storage index.
pub fn to_index(address: i64) -> DeviceResult<usize> {
    usize::try_from(address).map_err(|_| DeviceError::NegativeAddress { address })
}
