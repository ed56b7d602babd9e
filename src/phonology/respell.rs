/// Plain-text approximations for readers who do not know IPA. Multi-character
/// patterns come before any single-character pattern they contain.
const RESPELL_RULES: &[(&str, &str)] = &[
    ("t͡ʃ", "ch"),
    ("ʝ", "y"),
    ("ɾ", "r"),
    ("ʃ", "sh"),
    ("ʒ", "y"),
    ("ŋ", "ng"),
    ("j", "y"),
];

/// Renders a dialect transcription as an approximate respelling.
pub fn respell(dialect_ipa: &str) -> String {
    let mut s = dialect_ipa.to_string();
    for (pattern, replacement) in RESPELL_RULES {
        s = s.replace(pattern, replacement);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affricate_respells_before_fricative() {
        assert_eq!(respell("t͡ʃiko"), "chiko");
        assert_eq!(respell("ʃou"), "shou");
    }

    #[test]
    fn palatal_and_tap_become_plain_letters() {
        assert_eq!(respell("ʝaʝ"), "yay");
        assert_eq!(respell("ɾoka"), "roka");
        assert_eq!(respell("jes"), "yes");
    }

    #[test]
    fn velar_nasal_becomes_ng() {
        assert_eq!(respell("tiŋk"), "tingk");
    }

    #[test]
    fn unmapped_symbols_pass_through() {
        assert_eq!(respell("kat"), "kat");
    }

    #[test]
    fn respelling_a_mapped_word_is_pure() {
        use crate::config::DialectOptions;
        use crate::phonology::dialect::map_to_dialect;

        let mapped = map_to_dialect("ʃɪp", &DialectOptions::default());
        assert_eq!(respell(&mapped), "chip");
        assert_eq!(respell(&mapped), respell(&mapped));
    }
}
