// File: src/core/predictor.rs
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Weight given to each bootstrap word so the seed vocabulary is not
/// immediately swamped by the first few learned lines.
const BOOTSTRAP_WORD_WEIGHT: u64 = 10;

/// Common polytonic Greek words used to bootstrap the word and bigram
/// tables before any user text has been observed.
const BOOTSTRAP_WORDS: &[&str] = &[
    "καί", "δέ", "τε", "μέν", "γάρ", "οὐ", "τόν", "τῶν", "τό", "ἐν",
    "τῆς", "τούς", "τά", "ἐς", "πρός", "ὁ", "οἱ", "τοῦ", "τῇ", "αὐτόν",
    "ἀλλά", "τις", "οὕτως", "εἰς", "ταῦτα", "ἐπί", "αὐτῶν", "ἦν", "ὥστε", "αὐτοῦ",
    "ἄν", "περί", "αὐτῷ", "τοῖς", "οὐδέ", "πάντα", "αὐτήν", "Θεοῦ", "ἐάν", "ἵνα",
];

/// Prior usage weights for the common variants of each vowel. Rows are
/// listed in catalog canonical order; the tracked set is fixed here at
/// seed time, and learning increments these entries but never inserts
/// new ones. Rho carries no row, so its queries fall through to the
/// preference layer.
const DIACRITIC_PRIOR: &[(char, &[(char, u64)])] = &[
    ('α', &[('ά', 100), ('ὰ', 80), ('ἀ', 150), ('ἁ', 120), ('ἄ', 90), ('ἅ', 70)]),
    ('ε', &[('έ', 100), ('ὲ', 80), ('ἐ', 150), ('ἑ', 120), ('ἔ', 90), ('ἕ', 70)]),
    ('η', &[('ή', 100), ('ὴ', 80), ('ἠ', 150), ('ἡ', 120), ('ἤ', 90), ('ἥ', 70)]),
    ('ι', &[('ί', 100), ('ὶ', 80), ('ἰ', 150), ('ἱ', 120), ('ἴ', 90), ('ἵ', 70)]),
    ('ο', &[('ό', 100), ('ὸ', 80), ('ὀ', 150), ('ὁ', 120), ('ὄ', 90), ('ὅ', 70)]),
    ('υ', &[('ύ', 100), ('ὺ', 80), ('ὐ', 150), ('ὑ', 120), ('ὔ', 90), ('ὕ', 70)]),
    ('ω', &[('ώ', 100), ('ὼ', 80), ('ὠ', 150), ('ὡ', 120), ('ὤ', 90), ('ὥ', 70)]),
];

/// Frequency model over everything the user has typed: a word-frequency
/// table for prefix completion, a bigram-successor table for
/// next-character prediction, and a per-vowel diacritic-frequency table
/// for variant ranking. All three are updated by `learn` and only ever
/// grow; counts never decrease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveTextModel {
    words: HashMap<String, u64>,
    bigrams: HashMap<String, HashMap<char, u64>>,
    diacritics: HashMap<char, Vec<(char, u64)>>,
}

impl PredictiveTextModel {
    pub fn new() -> Self {
        let mut model = Self {
            words: HashMap::new(),
            bigrams: HashMap::new(),
            diacritics: HashMap::new(),
        };
        for &word in BOOTSTRAP_WORDS {
            model.words.insert(word.to_string(), BOOTSTRAP_WORD_WEIGHT);
            model.learn_bigrams(word);
        }
        for &(vowel, row) in DIACRITIC_PRIOR {
            model.diacritics.insert(vowel, row.to_vec());
        }
        model
    }

    /// Updates all three tables from a committed piece of text.
    ///
    /// The text is split on whitespace into words (empty tokens dropped)
    /// and each word's count goes up by one. Words of three or more
    /// characters also extend the bigram table: each 2-character window
    /// predicts the character immediately after it. Independently, every
    /// character of `text` that is a tracked diacritic variant bumps its
    /// vowel's frequency row. Empty or whitespace-only text is a no-op.
    pub fn learn(&mut self, text: &str) {
        for word in text.split_whitespace() {
            *self.words.entry(word.to_string()).or_insert(0) += 1;
            self.learn_bigrams(word);
        }
        for ch in text.chars() {
            self.learn_diacritic(ch);
        }
    }

    fn learn_bigrams(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        for window in chars.windows(3) {
            let key: String = window[..2].iter().collect();
            *self.bigrams.entry(key).or_default().entry(window[2]).or_insert(0) += 1;
        }
    }

    fn learn_diacritic(&mut self, ch: char) {
        // A variant belongs to exactly one vowel, so the first hit wins.
        for row in self.diacritics.values_mut() {
            if let Some(entry) = row.iter_mut().find(|(variant, _)| *variant == ch) {
                entry.1 += 1;
                return;
            }
        }
    }

    /// Top `limit` known words starting with `prefix`, by descending
    /// frequency, ties broken lexicographically. The match is an exact
    /// character prefix, never normalized, and an empty prefix returns
    /// nothing rather than the whole vocabulary.
    pub fn suggest_words(&self, prefix: &str, limit: usize) -> Vec<String> {
        if prefix.is_empty() {
            return vec![];
        }
        let mut matches: Vec<(&String, u64)> = self
            .words
            .iter()
            .filter(|(word, _)| word.starts_with(prefix))
            .map(|(word, &count)| (word, count))
            .collect();
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().take(limit).map(|(word, _)| word.clone()).collect()
    }

    /// Predicts likely next characters from the last two characters of
    /// `text`. Fewer than two characters, or an unseen bigram, yields an
    /// empty result.
    pub fn predict_next_chars(&self, text: &str, limit: usize) -> Vec<char> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 2 {
            return vec![];
        }
        let key: String = chars[chars.len() - 2..].iter().collect();
        let Some(successors) = self.bigrams.get(&key) else {
            return vec![];
        };
        let mut ranked: Vec<(char, u64)> =
            successors.iter().map(|(&ch, &count)| (ch, count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.into_iter().take(limit).map(|(ch, _)| ch).collect()
    }

    /// Variants of `vowel` by descending learned frequency. The sort is
    /// stable, so equal counts keep the row's canonical order. Untracked
    /// vowels (including rho) yield an empty result.
    pub fn suggest_diacritic_variants(&self, vowel: char, limit: usize) -> Vec<char> {
        let Some(row) = self.diacritics.get(&vowel) else {
            return vec![];
        };
        let mut ranked = row.clone();
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked.into_iter().take(limit).map(|(ch, _)| ch).collect()
    }
}

impl Default for PredictiveTextModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_vocabulary_answers_prefix_queries() {
        let model = PredictiveTextModel::new();
        assert_eq!(model.suggest_words("κα", 3), vec!["καί".to_string()]);
    }

    #[test]
    fn empty_prefix_returns_nothing() {
        let model = PredictiveTextModel::new();
        assert!(model.suggest_words("", 10).is_empty());
    }

    #[test]
    fn prefix_match_is_exact_not_normalized() {
        let model = PredictiveTextModel::new();
        // Smooth-breathing alpha and bare alpha are different prefixes.
        assert_eq!(model.suggest_words("ἀ", 5), vec!["ἀλλά".to_string()]);
        assert!(model.suggest_words("α", 10).iter().all(|w| w.starts_with("αὐ")));
    }

    #[test]
    fn learned_frequency_outranks_bootstrap() {
        let mut model = PredictiveTextModel::new();
        model.learn("τις τις τις");
        assert_eq!(model.suggest_words("τ", 1), vec!["τις".to_string()]);
    }

    #[test]
    fn bootstrap_bigrams_use_the_successor_rule() {
        let model = PredictiveTextModel::new();
        // "καί" seeds the window "κα" predicting 'ί'.
        assert_eq!(model.predict_next_chars("κα", 1), vec!['ί']);
    }

    #[test]
    fn learned_bigrams_predict_the_following_character() {
        let mut model = PredictiveTextModel::new();
        assert!(model.predict_next_chars("αν", 3).is_empty());
        for _ in 0..5 {
            model.learn("ανθρωπος");
        }
        assert_eq!(model.predict_next_chars("αν", 1), vec!['θ']);
    }

    #[test]
    fn short_input_yields_no_predictions() {
        let model = PredictiveTextModel::new();
        assert!(model.predict_next_chars("", 3).is_empty());
        assert!(model.predict_next_chars("α", 3).is_empty());
    }

    #[test]
    fn prior_weights_order_the_variant_row() {
        let model = PredictiveTextModel::new();
        assert_eq!(model.suggest_diacritic_variants('α', 3), vec!['ἀ', 'ἁ', 'ά']);
    }

    #[test]
    fn observed_characters_shift_the_ranking() {
        let mut model = PredictiveTextModel::new();
        // The acute starts at 100 against the smooth breathing's 150.
        model.learn(&"ά".repeat(51));
        assert_eq!(model.suggest_diacritic_variants('α', 1), vec!['ά']);
    }

    #[test]
    fn learning_never_inserts_new_diacritic_entries() {
        let mut model = PredictiveTextModel::new();
        let before = model.suggest_diacritic_variants('α', 10).len();
        // The circumflex is outside the tracked prior set.
        model.learn("ᾶ ᾶ ᾶ");
        assert_eq!(model.suggest_diacritic_variants('α', 10).len(), before);
    }

    #[test]
    fn untracked_vowels_have_no_row() {
        let model = PredictiveTextModel::new();
        assert!(model.suggest_diacritic_variants('ρ', 5).is_empty());
        assert!(model.suggest_diacritic_variants('β', 5).is_empty());
    }

    #[test]
    fn whitespace_only_learning_is_a_no_op() {
        let mut model = PredictiveTextModel::new();
        model.learn("");
        model.learn("   \t\n");
        assert_eq!(model.suggest_words("κα", 3), vec!["καί".to_string()]);
    }
}
