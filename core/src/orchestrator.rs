//! Top-level inflection policy.
//!
//! Each call is classified from its inputs alone:
//!
//! | language    | gender             | pronoun | route                   |
//! |-------------|--------------------|---------|-------------------------|
//! | not Spanish | any                | any     | [`Route::PassThrough`]  |
//! | Spanish     | neuter             | any     | [`Route::Fold`]         |
//! | Spanish     | any                | some    | [`Route::Fold`]         |
//! | Spanish     | none               | none    | [`Route::Alternatives`] |
//! | Spanish     | masculine/feminine | none    | [`Route::Default`]      |

use elle_types::{FormattedText, GrammaticalGender, LanguageTag, PronounSpec, Segment};

use crate::align::Alignment;
use crate::compose::compose;
use crate::errors::FoldError;
use crate::inflect::Inflector;
use crate::markdown::parse_markdown;

/// Explicit inputs to one inflection call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InflectionContext {
    preferred_languages: Vec<LanguageTag>,
    gender: Option<GrammaticalGender>,
    pronoun: Option<PronounSpec>,
    alignment: Alignment,
}

impl InflectionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered preferred languages of the running application.
    #[must_use]
    pub fn with_preferred_languages(mut self, languages: Vec<LanguageTag>) -> Self {
        self.preferred_languages = languages;
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Option<GrammaticalGender>) -> Self {
        self.gender = gender;
        self
    }

    /// A custom pronoun forces the fold regardless of the requested gender.
    #[must_use]
    pub fn with_pronoun(mut self, pronoun: Option<PronounSpec>) -> Self {
        self.pronoun = pronoun;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn preferred_languages(&self) -> &[LanguageTag] {
        &self.preferred_languages
    }

    #[must_use]
    pub fn gender(&self) -> Option<GrammaticalGender> {
        self.gender
    }

    #[must_use]
    pub fn pronoun(&self) -> Option<&PronounSpec> {
        self.pronoun.as_ref()
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    fn prefers_spanish(&self) -> bool {
        self.preferred_languages
            .first()
            .is_some_and(LanguageTag::is_spanish)
    }
}

/// What [`inflected`] does with a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Not Spanish: default inflection only.
    PassThrough,
    /// Spanish with a masculine or feminine request: default inflection only.
    Default,
    /// Spanish with no gender requested: swap in ungendered alternatives,
    /// then default inflection.
    Alternatives,
    /// Fold masculine and feminine renderings into the neutral form.
    Fold,
}

impl Route {
    #[must_use]
    pub fn classify(text: &FormattedText, context: &InflectionContext) -> Self {
        let spanish =
            context.prefers_spanish() || text.language().is_some_and(LanguageTag::is_spanish);
        if !spanish {
            return Self::PassThrough;
        }
        if context.gender == Some(GrammaticalGender::Neuter) || context.pronoun.is_some() {
            return Self::Fold;
        }
        match context.gender {
            None => Self::Alternatives,
            Some(_) => Self::Default,
        }
    }
}

/// Inflect `text` under `context`, folding into the neutral form when asked to.
///
/// This is the public fold entry point. It never mutates its inputs and keeps
/// no state between calls.
pub fn inflected(
    text: &FormattedText,
    context: &InflectionContext,
    inflector: &dyn Inflector,
) -> Result<FormattedText, FoldError> {
    let route = Route::classify(text, context);
    tracing::debug!(?route, gender = ?context.gender, "inflecting text");

    let resolved = resolve_language(text, context);
    match route {
        Route::PassThrough | Route::Default => Ok(inflector.inflect(&resolved, context.gender)),
        Route::Alternatives => {
            let substituted = substitute_alternatives(&resolved);
            Ok(inflector.inflect(&substituted, None))
        }
        Route::Fold => {
            let pronoun = context.pronoun.clone().unwrap_or_default();
            let masculine = inflector.inflect(&resolved, Some(GrammaticalGender::Masculine));
            let feminine = inflector.inflect(&resolved, Some(GrammaticalGender::Feminine));
            compose(&masculine, &feminine, &pronoun, context.alignment)
        }
    }
}

/// Replace the `.lproj` placeholder with the first preferred language.
fn resolve_language(text: &FormattedText, context: &InflectionContext) -> FormattedText {
    let mut resolved = text.clone();
    if text.language().is_some_and(LanguageTag::is_app_placeholder) {
        resolved.set_language(context.preferred_languages.first().cloned());
    }
    resolved
}

/// Swap each segment that carries an ungendered alternative for the parsed
/// alternative. The segment's own formatting is laid over the alternative's.
#[must_use]
pub fn substitute_alternatives(text: &FormattedText) -> FormattedText {
    let mut out = FormattedText::new();
    for segment in text.segments() {
        let Some(alternative) = &segment.attributes().ungendered_alternative else {
            out.push(segment.clone());
            continue;
        };

        let mut base = segment.attributes().clone();
        base.ungendered_alternative = None;
        for parsed in parse_markdown(alternative).segments() {
            out.push(Segment::new(
                parsed.text(),
                base.overlay(parsed.attributes()),
            ));
        }
    }
    out.set_language(text.language().cloned());
    out
}
