// File: src/learning.rs
use crate::core::catalog::{VariantCatalog, VOWELS};
use crate::core::types::BaseVowel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-vowel counts of explicitly selected variants.
///
/// Each vowel's row is seeded with weight 1 for every catalog variant so
/// ranking is well-defined before any selection happens. Rows keep catalog
/// canonical order; variants selected from outside the catalog are appended
/// behind the canonical entries and tracked from then on. Counts only ever
/// increase, so a corrupt (negative or shrinking) count is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceTracker {
    rows: HashMap<BaseVowel, Vec<(char, u64)>>,
}

impl PreferenceTracker {
    /// Seeds the uniform prior from the catalog.
    pub fn new(catalog: &VariantCatalog) -> Self {
        let mut rows = HashMap::new();
        for &vowel in VOWELS {
            let row: Vec<(char, u64)> = catalog
                .variants_of(vowel)
                .iter()
                .map(|entry| (entry.ch, 1))
                .collect();
            rows.insert(vowel, row);
        }
        Self { rows }
    }

    /// Records one explicit selection of `variant` for `vowel`.
    ///
    /// An untracked variant is inserted at count 0 and then incremented, so
    /// its first selection lands at exactly 1, not 2. A vowel the catalog
    /// does not know gets a fresh row; the selection is still tracked.
    pub fn record(&mut self, vowel: BaseVowel, variant: char) {
        let row = self.rows.entry(vowel).or_default();
        match row.iter_mut().find(|(ch, _)| *ch == variant) {
            Some((_, count)) => *count += 1,
            None => row.push((variant, 1)),
        }
    }

    /// Top `limit` variants for `vowel` by descending selection count.
    /// The sort is stable, so equal counts keep their row position and the
    /// catalog's canonical order decides ties.
    pub fn ranked_variants(&self, vowel: BaseVowel, limit: usize) -> Vec<char> {
        let Some(row) = self.rows.get(&vowel) else {
            return vec![];
        };
        let mut ranked = row.clone();
        ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        ranked.into_iter().take(limit).map(|(ch, _)| ch).collect()
    }

    /// Current count for a (vowel, variant) pair. Zero when untracked.
    pub fn count(&self, vowel: BaseVowel, variant: char) -> u64 {
        self.rows
            .get(&vowel)
            .and_then(|row| row.iter().find(|(ch, _)| *ch == variant))
            .map_or(0, |&(_, count)| count)
    }
}
