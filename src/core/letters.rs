//! Letter pool for availability checks
//!
//! A `LetterPool` is the multiset of characters in a root word. Candidates are
//! checked against it: each letter of the root may be consumed at most once.

use rustc_hash::FxHashMap;

/// Multiset of the letters available in a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool from a word's characters
    ///
    /// Characters are counted as given; callers normalize case first.
    ///
    /// # Examples
    /// ```
    /// use scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("television");
    /// assert_eq!(pool.count_of('e'), 2);
    /// assert_eq!(pool.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Check whether `candidate` can be spelled from the pool
    ///
    /// Consumes each pool letter at most once, so `"sleet"` is spellable from
    /// `"television"` (two e's available) but `"esses"` is not (one s). Fails
    /// on the first character with no remaining occurrence.
    ///
    /// The empty string is trivially spellable; submission filters it out
    /// before this check runs.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut used: FxHashMap<char, u32> = FxHashMap::default();
        for ch in candidate.chars() {
            let used_so_far = used.entry(ch).or_insert(0);
            *used_so_far += 1;
            if *used_so_far > self.count_of(ch) {
                return false;
            }
        }
        true
    }

    /// Number of times `letter` appears in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters in the pool
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.counts.len()
    }

    /// Letters and their multiplicities, sorted by letter
    ///
    /// Display order for banners and inventories.
    #[must_use]
    pub fn letter_counts(&self) -> Vec<(char, u32)> {
        let mut counts: Vec<(char, u32)> = self.counts.iter().map(|(&ch, &n)| (ch, n)).collect();
        counts.sort_unstable();
        counts
    }
}
