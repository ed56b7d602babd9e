pub mod dialect;
pub mod g2p;
pub mod respell;
pub mod segment;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known phoneme symbols. Multi-character symbols (affricates, diphthongs,
/// long vowels) come before every single-character symbol they contain, so
/// greedy matching never splits them.
pub static PHONEME_INVENTORY: &[&str] = &[
    "t͡ʃ", "d͡ʒ", "aʊ", "aɪ", "eɪ", "oʊ", "əʊ", "ɔɪ", "iː", "uː", "ɔː", "ɑː", "æ", "ʌ", "ɪ", "ʊ",
    "ŋ", "ʃ", "ʒ", "ɹ", "ð", "θ", "ə", "ɑ", "ɛ", "i", "u", "o", "a", "ɔ", "e", "p", "b", "t", "d",
    "k", "ɡ", "f", "v", "s", "z", "h", "m", "n", "l", "w", "j", "r", "ɾ", "ʝ",
];

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("word regex"));

/// Splits free text into scoreable word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Removes stress and length marks; they carry no segmental information.
pub fn strip_marks(ipa: &str) -> String {
    ipa.chars()
        .filter(|ch| !matches!(ch, 'ˈ' | 'ˌ' | 'ː'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_non_letters() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn tokenize_keeps_apostrophes() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("¡¿!?").is_empty());
    }

    #[test]
    fn strip_marks_removes_stress_and_length() {
        assert_eq!(strip_marks("hɛˈloʊ"), "hɛloʊ");
        assert_eq!(strip_marks("ˌoʊvɚˈɔːl"), "oʊvɚɔl");
    }
}
