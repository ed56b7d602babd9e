use serde::Serialize;

use crate::{
    align::{EditOp, align},
    config::DialectOptions,
    phonology::{dialect::map_to_dialect, g2p::Lexicon, segment::segment, tokenize},
};

/// Per-word phonemic derivation: the word as written, its baseline English
/// transcription, the dialect rendition, and the segmented symbols.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneticForm {
    pub word: String,
    pub baseline_ipa: String,
    pub dialect_ipa: String,
    pub phonemes: Vec<String>,
}

pub fn phonetic_form(word: &str, lexicon: &Lexicon, opts: &DialectOptions) -> PhoneticForm {
    let baseline_ipa = lexicon.transcribe(word);
    let dialect_ipa = map_to_dialect(&baseline_ipa, opts);
    let phonemes = segment(&dialect_ipa);
    PhoneticForm {
        word: word.to_string(),
        baseline_ipa,
        dialect_ipa,
        phonemes,
    }
}

/// Phonemic breakdown of every word in `text`, in input order.
pub fn pronounce(text: &str, lexicon: &Lexicon, opts: &DialectOptions) -> Vec<PhoneticForm> {
    tokenize(text)
        .iter()
        .map(|word| phonetic_form(word, lexicon, opts))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct WordScore {
    pub index: usize,
    pub expected_ipa: String,
    pub heard_ipa: String,
    pub ops: Vec<EditOp>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PronunciationReport {
    pub overall_score_0_100: i32,
    pub overall_phoneme_accuracy: f64,
    pub words: Vec<WordScore>,
}

/// Scores `heard_text` against `expected_text` word by word.
///
/// Pairing is strictly positional: the i-th heard word is compared with the
/// i-th expected word, so an extra or missing spoken word shifts every later
/// comparison. An index with no partner is skipped with accuracy 0 and still
/// counts toward the overall mean. A word whose heard phoneme count exceeds
/// the expected count by more than the expected length scores below zero;
/// the value is reported as computed, not clipped.
pub fn score_pronunciation(
    expected_text: &str,
    heard_text: &str,
    lexicon: &Lexicon,
    opts: &DialectOptions,
) -> PronunciationReport {
    let expected = pronounce(expected_text, lexicon, opts);
    let heard = pronounce(heard_text, lexicon, opts);
    let total = expected.len().max(heard.len());

    let mut words = Vec::with_capacity(total);
    let mut accuracy_sum = 0.0;
    for index in 0..total {
        let reference = expected.get(index).filter(|f| !f.dialect_ipa.is_empty());
        let hypothesis = heard.get(index).filter(|f| !f.dialect_ipa.is_empty());

        let (accuracy, ops) = match (reference, hypothesis) {
            (Some(r), Some(h)) => {
                let (distance, ops) = align(&r.phonemes, &h.phonemes);
                let accuracy = 1.0 - distance as f64 / r.phonemes.len().max(1) as f64;
                (accuracy, ops)
            }
            _ => (0.0, vec![EditOp::Skip]),
        };

        accuracy_sum += accuracy;
        words.push(WordScore {
            index,
            expected_ipa: expected
                .get(index)
                .map(|f| f.dialect_ipa.clone())
                .unwrap_or_default(),
            heard_ipa: heard
                .get(index)
                .map(|f| f.dialect_ipa.clone())
                .unwrap_or_default(),
            ops,
            score: round3(accuracy),
        });
    }

    let overall = if total == 0 {
        0.0
    } else {
        accuracy_sum / total as f64
    };

    PronunciationReport {
        overall_score_0_100: (overall * 100.0).round() as i32,
        overall_phoneme_accuracy: round3(overall),
        words,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
