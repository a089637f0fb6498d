use ime_core::{ImeEngine, MAX_VARIANT_RESULTS};

const BASES: &[char] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω', 'ρ'];

#[test]
fn variant_results_are_capped_and_come_from_the_catalog() {
    let engine = ImeEngine::new();
    for &vowel in BASES {
        let variants = engine.get_variants(vowel);
        assert!(!variants.is_empty(), "no variants for {}", vowel);
        assert!(variants.len() <= MAX_VARIANT_RESULTS);
        for variant in &variants {
            assert!(
                engine.catalog.variants_of(vowel).iter().any(|e| e.ch == *variant),
                "{} offered for {} but not in the catalog",
                variant,
                vowel
            );
        }
    }
}

#[test]
fn recorded_selections_may_extend_the_offered_set() {
    let mut engine = ImeEngine::new();
    // The vowels' learned layer answers first, so exercise the
    // preference extension through rho, whose learned row is empty.
    // ῤ (smooth breathing) is outside rho's catalog pair.
    engine.record_selection('ῤ', 'ρ');
    engine.record_selection('ῤ', 'ρ');
    let variants = engine.get_variants('ρ');
    assert_eq!(variants[0], 'ῤ');
    for variant in variants {
        let in_catalog = engine.catalog.variants_of('ρ').iter().any(|e| e.ch == variant);
        assert!(in_catalog || variant == 'ῤ');
    }
}

#[test]
fn get_variants_is_deterministic_between_mutations() {
    let engine = ImeEngine::new();
    for &vowel in BASES {
        assert_eq!(engine.get_variants(vowel), engine.get_variants(vowel));
    }
}

#[test]
fn majority_selection_ranks_first() {
    let mut engine = ImeEngine::new();
    // Rho has no learned-diacritic row, so preference counts decide.
    engine.record_selection('Ῥ', 'ρ');
    engine.record_selection('Ῥ', 'ρ');
    assert_eq!(engine.get_variants('ρ')[0], 'Ῥ');
}

#[test]
fn word_frequency_round_trip() {
    let mut engine = ImeEngine::new();
    engine.learn_from_text("καί καί καί");
    assert_eq!(engine.get_word_suggestions("κα", 3), vec!["καί".to_string()]);
}

#[test]
fn bigram_prediction_after_repeated_learning() {
    let mut engine = ImeEngine::new();
    for _ in 0..5 {
        engine.learn_from_text("ανθρωπος");
    }
    assert_eq!(engine.get_next_character_predictions("αν", 1), vec!['θ']);
}

#[test]
fn empty_inputs_are_safe() {
    let mut engine = ImeEngine::new();
    assert!(engine.get_word_suggestions("", 3).is_empty());
    assert!(engine.get_next_character_predictions("α", 3).is_empty());
    assert!(engine.get_variants('x').is_empty());
    // Learning nothing is a no-op, never an error.
    engine.learn_from_text("");
    engine.learn_from_text("   \n\t");
}

#[test]
fn rho_catalog_is_fixed_regardless_of_learning() {
    let mut engine = ImeEngine::new();
    let rho = |engine: &ImeEngine| -> Vec<char> {
        engine.catalog.variants_of('ρ').iter().map(|e| e.ch).collect()
    };
    assert_eq!(rho(&engine), vec!['ῥ', 'Ῥ']);
    engine.learn_from_text("ῥήτωρ ῥήτωρ Ῥόδος");
    engine.record_selection('ῥ', 'ρ');
    assert_eq!(rho(&engine), vec!['ῥ', 'Ῥ']);
}

#[test]
fn typed_text_reorders_the_variant_popup() {
    let mut engine = ImeEngine::new();
    assert_eq!(engine.get_variants('α')[0], 'ἀ');
    engine.learn_from_text(&"ά".repeat(60));
    assert_eq!(engine.get_variants('α')[0], 'ά');
}
