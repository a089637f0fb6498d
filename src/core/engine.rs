use crate::core::catalog::VariantCatalog;
use crate::core::predictor::PredictiveTextModel;
use crate::core::types::BaseVowel;
use crate::learning::PreferenceTracker;

/// Hard cap on the variant popup, whichever layer answered.
pub const MAX_VARIANT_RESULTS: usize = 8;
/// Candidate count for word and next-character queries when the host
/// does not pass its own limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

// The engine composes the static catalog with the two learned models.
// The learned halves are public so a host can snapshot and restore them;
// the engine itself never persists anything.
pub struct ImeEngine {
    pub catalog: VariantCatalog,
    pub preferences: PreferenceTracker,
    pub predictor: PredictiveTextModel,
}

impl ImeEngine {
    /// A fresh engine with bootstrap seeding. Hosts construct one per
    /// typing stream and pass it into every call; there is no shared or
    /// static instance.
    pub fn new() -> Self {
        let catalog = VariantCatalog::new();
        let preferences = PreferenceTracker::new(&catalog);
        Self {
            catalog,
            preferences,
            predictor: PredictiveTextModel::new(),
        }
    }

    /// Ordered variants to offer for a long-pressed base character.
    ///
    /// Three layers answer in fixed precedence, first non-empty wins:
    /// corpus-learned diacritic frequencies, then explicit selection
    /// history, then the catalog's canonical order. Every layer is
    /// capped at `MAX_VARIANT_RESULTS`. Unknown bases yield an empty
    /// vec, never an error.
    pub fn get_variants(&self, vowel: BaseVowel) -> Vec<char> {
        let learned = self.predictor.suggest_diacritic_variants(vowel, MAX_VARIANT_RESULTS);
        if !learned.is_empty() {
            return learned;
        }
        let preferred = self.preferences.ranked_variants(vowel, MAX_VARIANT_RESULTS);
        if !preferred.is_empty() {
            return preferred;
        }
        self.catalog
            .variants_of(vowel)
            .iter()
            .take(MAX_VARIANT_RESULTS)
            .map(|entry| entry.ch)
            .collect()
    }

    /// Records that the user picked `selected` from the popup for `vowel`.
    pub fn record_selection(&mut self, selected: char, vowel: BaseVowel) {
        self.preferences.record(vowel, selected);
    }

    /// Feeds a committed word or line into the predictive model.
    pub fn learn_from_text(&mut self, text: &str) {
        self.predictor.learn(text);
    }

    pub fn word_suggestions(&self, prefix: &str) -> Vec<String> {
        self.get_word_suggestions(prefix, DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn get_word_suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.predictor.suggest_words(prefix, limit)
    }

    pub fn next_character_predictions(&self, text: &str) -> Vec<char> {
        self.get_next_character_predictions(text, DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn get_next_character_predictions(&self, text: &str, limit: usize) -> Vec<char> {
        self.predictor.predict_next_chars(text, limit)
    }
}

impl Default for ImeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learned_layer_answers_first_for_vowels() {
        let mut engine = ImeEngine::new();
        // Selection history favors the grave, but the learned-diacritic
        // layer is non-empty for alpha and takes precedence.
        engine.record_selection('ὰ', 'α');
        engine.record_selection('ὰ', 'α');
        assert_eq!(engine.get_variants('α')[0], 'ἀ');
    }

    #[test]
    fn rho_falls_through_to_preferences() {
        let mut engine = ImeEngine::new();
        assert_eq!(engine.get_variants('ρ'), vec!['ῥ', 'Ῥ']);
        engine.record_selection('Ῥ', 'ρ');
        engine.record_selection('Ῥ', 'ρ');
        assert_eq!(engine.get_variants('ρ'), vec!['Ῥ', 'ῥ']);
    }

    #[test]
    fn unknown_base_becomes_known_once_recorded() {
        let mut engine = ImeEngine::new();
        assert!(engine.get_variants('β').is_empty());
        engine.record_selection('ϐ', 'β');
        assert_eq!(engine.get_variants('β'), vec!['ϐ']);
    }

    #[test]
    fn every_layer_caps_at_eight() {
        let mut engine = ImeEngine::new();
        for ch in "abcdefghij".chars() {
            engine.record_selection(ch, 'β');
        }
        assert_eq!(engine.get_variants('β').len(), MAX_VARIANT_RESULTS);
        assert!(engine.get_variants('α').len() <= MAX_VARIANT_RESULTS);
    }

    #[test]
    fn default_limits_forward_to_the_model() {
        let engine = ImeEngine::new();
        assert!(engine.word_suggestions("τ").len() <= DEFAULT_SUGGESTION_LIMIT);
        assert!(engine.next_character_predictions("κα").len() <= DEFAULT_SUGGESTION_LIMIT);
    }
}
