//! Neutral pronoun policy.
//!
//! A [`PronounSpec`] pairs a neutral third-person pronoun with the vowel that
//! replaces the masculine/feminine `o`/`a` ending of gendered words. The suffix
//! is validated once at construction and the value is immutable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vowels accepted as a neutral ending. Anything else would be glued onto a
/// word stem and read back as an unpronounceable cluster.
const PRONOUNCEABLE_SUFFIXES: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PronounError {
    #[error("suffix {suffix:?} is not pronounceable; expected one of a, e, i, o, u")]
    NotPronounceable { suffix: char },
    #[error("third-person pronoun must not be empty")]
    EmptyPronoun,
}

#[derive(Serialize, Deserialize)]
struct RawPronounSpec {
    third_person: String,
    suffix: char,
}

/// Validated neutral pronoun and word-ending suffix.
///
/// Invariant: `suffix` is one of `a, e, i, o, u` in lower case and
/// `third_person` is a non-empty lower-case string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPronounSpec", into = "RawPronounSpec")]
pub struct PronounSpec {
    third_person: String,
    suffix: char,
}

impl PronounSpec {
    pub fn new(third_person: impl AsRef<str>, suffix: char) -> Result<Self, PronounError> {
        let suffix = suffix.to_ascii_lowercase();
        if !PRONOUNCEABLE_SUFFIXES.contains(&suffix) {
            return Err(PronounError::NotPronounceable { suffix });
        }

        let third_person = third_person.as_ref();
        if third_person.is_empty() {
            return Err(PronounError::EmptyPronoun);
        }

        Ok(Self {
            third_person: third_person.to_lowercase(),
            suffix,
        })
    }

    /// The `elle` / `e` policy applied when the caller names none.
    #[must_use]
    pub fn elle() -> Self {
        Self {
            third_person: "elle".to_string(),
            suffix: 'e',
        }
    }

    #[must_use]
    pub fn third_person(&self) -> &str {
        &self.third_person
    }

    #[must_use]
    pub fn suffix(&self) -> char {
        self.suffix
    }

    /// Whether a preceding `c` must become `qu` to keep its hard sound.
    #[must_use]
    pub fn needs_front_vowel_correction(&self) -> bool {
        matches!(self.suffix, 'e' | 'i')
    }

    #[must_use]
    pub fn upper_third_person(&self) -> String {
        self.third_person.to_uppercase()
    }

    /// The pronoun with only its first character capitalized.
    #[must_use]
    pub fn title_third_person(&self) -> String {
        let mut chars = self.third_person.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for PronounSpec {
    fn default() -> Self {
        Self::elle()
    }
}

impl TryFrom<RawPronounSpec> for PronounSpec {
    type Error = PronounError;

    fn try_from(raw: RawPronounSpec) -> Result<Self, Self::Error> {
        Self::new(raw.third_person, raw.suffix)
    }
}

impl From<PronounSpec> for RawPronounSpec {
    fn from(spec: PronounSpec) -> Self {
        Self {
            third_person: spec.third_person,
            suffix: spec.suffix,
        }
    }
}
