// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A base character on the keyboard that owns a set of polytonic variants:
/// one of the seven Greek vowels, or rho for the breathing-mark pair.
pub type BaseVowel = char;

/// The closed set of diacritic marks a catalog variant can carry.
/// Assigned once in the catalog tables, never re-derived from the
/// rendered character at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiacriticTag {
    Acute,
    Grave,
    Circumflex,
    SmoothBreathing,
    RoughBreathing,
    IotaSubscript,
    Plain,
}

impl DiacriticTag {
    /// Human-readable description for a host UI hint bar.
    pub fn description(&self) -> &'static str {
        match self {
            DiacriticTag::Acute => "Acute accent (oxia) - rising tone",
            DiacriticTag::Grave => "Grave accent (varia) - falling tone",
            DiacriticTag::Circumflex => "Circumflex (perispomeni) - rising-falling tone",
            DiacriticTag::SmoothBreathing => "Smooth breathing (psili) - h sound is absent",
            DiacriticTag::RoughBreathing => "Rough breathing (dasia) - h sound is present",
            DiacriticTag::IotaSubscript => "Iota subscript (ypogegrammeni) - historical diphthong",
            DiacriticTag::Plain => "Polytonic Greek character",
        }
    }
}

/// One diacritic-marked form of a base vowel, as fixed reference data.
/// Every variant belongs to exactly one base vowel and the membership
/// never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantEntry {
    pub ch: char,
    pub tag: DiacriticTag,
}
