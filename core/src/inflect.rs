//! Boundary to the linguistic inflection engine.

use elle_types::{FormattedText, GrammaticalGender};

/// Produces a grammatically agreeing rendering of a text.
///
/// Implementations must keep the segment structure of `text` and the word
/// count of every segment. The fold relies on both to pair words up.
pub trait Inflector: Send + Sync {
    /// Inflect `text` for `gender`. `None` applies the engine's default
    /// agreement without forcing a gender.
    fn inflect(&self, text: &FormattedText, gender: Option<GrammaticalGender>) -> FormattedText;
}

impl<T: Inflector + ?Sized> Inflector for &T {
    fn inflect(&self, text: &FormattedText, gender: Option<GrammaticalGender>) -> FormattedText {
        (**self).inflect(text, gender)
    }
}

/// An engine that never changes the text. Useful where no agreement data is
/// available: forcing either gender yields the input, so folding is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInflector;

impl Inflector for IdentityInflector {
    fn inflect(&self, text: &FormattedText, _gender: Option<GrammaticalGender>) -> FormattedText {
        text.clone()
    }
}
