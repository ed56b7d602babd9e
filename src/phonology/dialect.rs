use crate::config::{DialectOptions, MappingMode, RVariant, SchwaVariant, ThetaMode};
use crate::phonology::strip_marks;

/// Postalveolar merger applied in strict mode. The affricate key comes first
/// so it is rewritten whole rather than via its fricative substring.
const POSTALVEOLAR_RULES: &[(&str, &str)] = &[("d͡ʒ", "ʝ"), ("ʃ", "t͡ʃ"), ("ʒ", "ʝ")];

/// Vowel-quality cascade. Two-character keys come before every
/// single-character key that is one of their substrings, so diphthongs are
/// never partially consumed by single-vowel rules.
const VOWEL_RULES: &[(&str, &str)] = &[
    ("iː", "i"),
    ("uː", "u"),
    ("eɪ", "ei"),
    ("oʊ", "ou"),
    ("əʊ", "ou"),
    ("aɪ", "ai"),
    ("aʊ", "au"),
    ("ɔɪ", "oi"),
    ("ɑː", "a"),
    ("ɔː", "o"),
    ("i", "i"),
    ("ɪ", "i"),
    ("u", "u"),
    ("ʊ", "u"),
    ("ɒ", "o"),
    ("æ", "a"),
    ("ʌ", "a"),
];

/// Rewrites a baseline English transcription into the Latin-American variant
/// selected by `opts`. The rule stages run in a fixed order; reordering them
/// changes the output.
pub fn map_to_dialect(baseline_ipa: &str, opts: &DialectOptions) -> String {
    let mut s = strip_marks(baseline_ipa);

    s = s.replace('ð', "d");
    s = s.replace(
        'θ',
        match opts.theta_mode {
            ThetaMode::S => "s",
            ThetaMode::T => "t",
        },
    );

    s = s.replace('ɚ', "er");
    s = s.replace('ɝ', "er");

    if opts.mode == MappingMode::Strict {
        for (pattern, replacement) in POSTALVEOLAR_RULES {
            s = s.replace(pattern, replacement);
        }
    }

    s = s.replace(
        'ɹ',
        match opts.r_variant {
            RVariant::Tap => "ɾ",
            RVariant::Trill => "r",
        },
    );

    // Velar nasal only denasalises word-finally; "think" keeps its ŋ.
    if let Some(stem) = s.strip_suffix('ŋ') {
        s = format!("{stem}n");
    }

    for (pattern, replacement) in VOWEL_RULES {
        s = s.replace(pattern, replacement);
    }

    s = s.replace(
        'ə',
        match opts.schwa {
            SchwaVariant::A => "a",
            SchwaVariant::E => "e",
        },
    );

    s.split_whitespace().collect()
}
