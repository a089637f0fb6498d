use crate::core::types::{BaseVowel, DiacriticTag, VariantEntry};

use DiacriticTag::{Acute, Circumflex, Grave, IotaSubscript, RoughBreathing, SmoothBreathing};

const fn v(ch: char, tag: DiacriticTag) -> VariantEntry {
    VariantEntry { ch, tag }
}

// Canonical variant tables, one per base character, in canonical display
// order. Combined breathing+accent forms tag by their breathing mark.
static ALPHA: &[VariantEntry] = &[
    v('ά', Acute),
    v('ὰ', Grave),
    v('ᾶ', Circumflex),
    v('ἀ', SmoothBreathing),
    v('ἁ', RoughBreathing),
    v('ἄ', SmoothBreathing),
    v('ἅ', RoughBreathing),
    v('ᾳ', IotaSubscript),
];

// Epsilon is short: no circumflex, no subscript.
static EPSILON: &[VariantEntry] = &[
    v('έ', Acute),
    v('ὲ', Grave),
    v('ἐ', SmoothBreathing),
    v('ἑ', RoughBreathing),
    v('ἔ', SmoothBreathing),
    v('ἕ', RoughBreathing),
];

static ETA: &[VariantEntry] = &[
    v('ή', Acute),
    v('ὴ', Grave),
    v('ῆ', Circumflex),
    v('ἠ', SmoothBreathing),
    v('ἡ', RoughBreathing),
    v('ἤ', SmoothBreathing),
    v('ἥ', RoughBreathing),
    v('ῃ', IotaSubscript),
];

static IOTA: &[VariantEntry] = &[
    v('ί', Acute),
    v('ὶ', Grave),
    v('ῖ', Circumflex),
    v('ἰ', SmoothBreathing),
    v('ἱ', RoughBreathing),
    v('ἴ', SmoothBreathing),
    v('ἵ', RoughBreathing),
];

// Omicron is short like epsilon.
static OMICRON: &[VariantEntry] = &[
    v('ό', Acute),
    v('ὸ', Grave),
    v('ὀ', SmoothBreathing),
    v('ὁ', RoughBreathing),
    v('ὄ', SmoothBreathing),
    v('ὅ', RoughBreathing),
];

static UPSILON: &[VariantEntry] = &[
    v('ύ', Acute),
    v('ὺ', Grave),
    v('ῦ', Circumflex),
    v('ὐ', SmoothBreathing),
    v('ὑ', RoughBreathing),
    v('ὔ', SmoothBreathing),
    v('ὕ', RoughBreathing),
];

static OMEGA: &[VariantEntry] = &[
    v('ώ', Acute),
    v('ὼ', Grave),
    v('ῶ', Circumflex),
    v('ὠ', SmoothBreathing),
    v('ὡ', RoughBreathing),
    v('ὤ', SmoothBreathing),
    v('ὥ', RoughBreathing),
    v('ῳ', IotaSubscript),
];

// Rho only participates in the breathing pair.
static RHO: &[VariantEntry] = &[v('ῥ', RoughBreathing), v('Ῥ', RoughBreathing)];

/// Base characters in canonical iteration order. Every component that
/// seeds per-vowel state walks this slice so row order is reproducible.
pub static VOWELS: &[BaseVowel] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω', 'ρ'];

/// Static reference data mapping each base vowel to its ordered polytonic
/// variants. Fixed for the process lifetime.
pub struct VariantCatalog;

impl VariantCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Ordered variants for a base character. Unknown input yields an
    /// empty slice, never an error.
    pub fn variants_of(&self, vowel: BaseVowel) -> &'static [VariantEntry] {
        match vowel {
            'α' => ALPHA,
            'ε' => EPSILON,
            'η' => ETA,
            'ι' => IOTA,
            'ο' => OMICRON,
            'υ' => UPSILON,
            'ω' => OMEGA,
            'ρ' => RHO,
            _ => &[],
        }
    }

    /// The diacritic mark carried by a catalog variant, if it is one.
    pub fn tag_of(&self, variant: char) -> Option<DiacriticTag> {
        for &vowel in VOWELS {
            if let Some(entry) = self.variants_of(vowel).iter().find(|e| e.ch == variant) {
                return Some(entry.tag);
            }
        }
        None
    }

    /// The base vowel a variant belongs to, if any.
    pub fn base_of(&self, variant: char) -> Option<BaseVowel> {
        VOWELS
            .iter()
            .copied()
            .find(|&vowel| self.variants_of(vowel).iter().any(|e| e.ch == variant))
    }
}

impl Default for VariantCatalog {
    fn default() -> Self {
        Self::new()
    }
}
