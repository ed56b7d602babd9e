use std::{collections::HashMap, fs, path::Path};

use crate::errors::Result;

/// English word → baseline IPA lookup, backed by the dictionary compiled into
/// the binary. Built once at startup and never mutated afterwards.
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            entries: parse_dict(include_str!("../../resources/en_ipa.dict")),
        }
    }

    /// Merges a user-supplied dictionary file over the built-in entries and
    /// returns how many entries it contributed.
    pub fn load_extra(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let data = fs::read_to_string(path)?;
        Ok(self.merge(&data))
    }

    /// Merges `word<TAB>ipa` lines over the current entries; later entries
    /// win. Malformed lines are skipped.
    pub fn merge(&mut self, data: &str) -> usize {
        let extra = parse_dict(data);
        let count = extra.len();
        self.entries.extend(extra);
        count
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Best-effort transcription. An out-of-vocabulary word comes back as its
    /// own lowercased spelling so downstream segmentation and scoring can
    /// still run.
    pub fn transcribe(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match self.lookup(&lower) {
            Some(ipa) => ipa.to_string(),
            None => lower,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_dict(data: &str) -> HashMap<String, String> {
    data.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, ipa) = line.split_once('\t')?;
            let word = word.trim();
            let ipa = ipa.trim();
            if word.is_empty() || ipa.is_empty() {
                return None;
            }
            Some((word.to_lowercase(), ipa.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_common_words() {
        let lexicon = Lexicon::builtin();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.lookup("cat"), Some("kæt"));
        assert_eq!(lexicon.lookup("think"), Some("θɪŋk"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.lookup("Hello"), lexicon.lookup("hello"));
    }

    #[test]
    fn out_of_vocabulary_falls_back_to_spelling() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.lookup("zyzzyva"), None);
        assert_eq!(lexicon.transcribe("Zyzzyva"), "zyzzyva");
    }

    #[test]
    fn merge_overrides_builtin_entries() {
        let mut lexicon = Lexicon::builtin();
        let added = lexicon.merge("cat\tkat\nllama\tˈjɑmə\n");
        assert_eq!(added, 2);
        assert_eq!(lexicon.lookup("cat"), Some("kat"));
        assert_eq!(lexicon.lookup("llama"), Some("ˈjɑmə"));
    }

    #[test]
    fn parse_skips_comments_and_malformed_lines() {
        let parsed = parse_dict("# comment\n\nno-tab-here\nword\twɝd\n\t\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("word").map(String::as_str), Some("wɝd"));
    }
}
