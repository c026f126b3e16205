//! Word alignment between a masculine and a feminine rendering.
//!
//! Words are split on the ASCII space only, so tabs and newlines stay inside
//! a word. Each split point becomes exactly one space again on output.

use similar::{Algorithm, ChangeTag, TextDiff};

use elle_types::PronounSpec;

use crate::errors::WordCountMismatch;
use crate::morpheme::fold_word;

/// How the two word sequences are paired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pair words by position; differing word counts are an error.
    #[default]
    Strict,
    /// Pair words through a Myers diff. Between two equal words, removed and
    /// added words are paired one to one when their counts match; otherwise
    /// the masculine words are kept.
    Diff,
}

impl Alignment {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "diff" => Some(Self::Diff),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Diff => "diff",
        }
    }
}

/// Split on the ASCII space, keeping empty words between repeated spaces.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Fold a masculine/feminine string pair into its neutral form.
pub fn fold_words(
    masculine: &str,
    feminine: &str,
    pronoun: &PronounSpec,
    alignment: Alignment,
) -> Result<String, WordCountMismatch> {
    let masculine_words = split_words(masculine);
    let feminine_words = split_words(feminine);

    let folded = match alignment {
        Alignment::Strict => {
            if masculine_words.len() != feminine_words.len() {
                return Err(WordCountMismatch {
                    masculine: masculine_words.len(),
                    feminine: feminine_words.len(),
                });
            }
            masculine_words
                .iter()
                .zip(&feminine_words)
                .map(|(m, f)| fold_pair(m, f, pronoun))
                .collect::<Vec<_>>()
        }
        Alignment::Diff => fold_diffed(&masculine_words, &feminine_words, pronoun),
    };

    Ok(folded.join(" "))
}

fn fold_pair(masculine: &str, feminine: &str, pronoun: &PronounSpec) -> String {
    if masculine == feminine {
        return masculine.to_string();
    }
    fold_word(masculine, feminine, pronoun).unwrap_or_else(|| {
        tracing::debug!(masculine, feminine, "no fold rule matched; keeping masculine");
        masculine.to_string()
    })
}

fn fold_diffed(masculine: &[&str], feminine: &[&str], pronoun: &PronounSpec) -> Vec<String> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(masculine, feminine);

    let mut out = Vec::with_capacity(masculine.len());
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {
                fold_region(&mut out, &mut removed, &mut added, pronoun);
                out.push(change.value().to_string());
            }
            ChangeTag::Delete => removed.push(change.value()),
            ChangeTag::Insert => added.push(change.value()),
        }
    }
    fold_region(&mut out, &mut removed, &mut added, pronoun);

    out
}

/// Flush the words changed between two equal words.
fn fold_region(
    out: &mut Vec<String>,
    removed: &mut Vec<&str>,
    added: &mut Vec<&str>,
    pronoun: &PronounSpec,
) {
    if removed.len() == added.len() {
        out.extend(
            removed
                .iter()
                .zip(added.iter())
                .map(|(m, f)| fold_pair(m, f, pronoun)),
        );
    } else {
        if !removed.is_empty() && !added.is_empty() {
            tracing::debug!(
                removed = removed.len(),
                added = added.len(),
                "unpaired region; keeping masculine words"
            );
        }
        out.extend(removed.iter().map(ToString::to_string));
    }
    removed.clear();
    added.clear();
}
