//! Core domain types for elle.
//!
//! Pure value types with no IO and no inflection logic: the neutral pronoun
//! policy, grammatical gender, language tags and formatted text.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod gender;
mod language;
mod pronoun;
mod text;

pub use gender::GrammaticalGender;
pub use language::{LanguageTag, LanguageTagError};
pub use pronoun::{PronounError, PronounSpec};
pub use text::{Attributes, FormattedText, Segment};
