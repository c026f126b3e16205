//! End-to-end folding through the public entry point.

use elle_core::{
    Alignment, FoldError, FormattedText, GrammaticalGender, IdentityInflector, InflectionContext,
    Inflector, LanguageTag, LexiconInflector, PronounError, PronounSpec, Segment, fold_word,
    inflected,
};

fn spanish(text: &str) -> FormattedText {
    FormattedText::plain(text).with_language(LanguageTag::spanish())
}

fn fold(text: &str, context: &InflectionContext) -> String {
    inflected(&spanish(text), context, &LexiconInflector::spanish())
        .expect("fold succeeds")
        .plain_text()
}

fn neuter() -> InflectionContext {
    InflectionContext::new().with_gender(Some(GrammaticalGender::Neuter))
}

#[test]
fn pronoun_pairs_fold_to_elle_in_matching_case() {
    let elle = PronounSpec::default();
    assert_eq!(fold_word("él", "ella", &elle).as_deref(), Some("elle"));
    assert_eq!(fold_word("ÉL", "ELLA", &elle).as_deref(), Some("ELLE"));
    assert_eq!(fold_word("Él", "Ella", &elle).as_deref(), Some("Elle"));
}

#[test]
fn neuter_suffix() {
    assert_eq!(fold("Eres bienvenido!", &neuter()), "Eres bienvenide!");
    assert_eq!(fold("Eres BIENVENIDO!", &neuter()), "Eres BIENVENIDE!");
}

#[test]
fn elle_pronoun() {
    assert_eq!(fold("Él es bienvenido!", &neuter()), "Elle es bienvenide!");
    assert_eq!(fold("él es bienvenido", &neuter()), "elle es bienvenide");
    assert_eq!(fold("ÉL es BIENVENIDO", &neuter()), "ELLE es BIENVENIDE");
}

#[test]
fn chiques() {
    assert_eq!(fold("Hola chicos!", &neuter()), "Hola chiques!");
    assert_eq!(fold("HOLA CHICOS", &neuter()), "HOLA CHIQUES");
}

#[test]
fn ello_pronoun_with_each_suffix() {
    let ello = |suffix| {
        InflectionContext::new().with_pronoun(Some(
            PronounSpec::new("ello", suffix).expect("vowel suffix"),
        ))
    };
    assert_eq!(fold("Él es bienvenido!", &ello('o')), "Ello es bienvenido!");
    assert_eq!(fold("él es bienvenido", &ello('e')), "ello es bienvenide");
    assert_eq!(fold("ÉL es BIENVENIDO", &ello('a')), "ELLO es BIENVENIDA");
}

#[test]
fn explicit_gender_is_default_inflection() {
    let masculine = InflectionContext::new().with_gender(Some(GrammaticalGender::Masculine));
    assert_eq!(fold("Eres bienvenido!", &masculine), "Eres bienvenido!");
    assert_eq!(fold("Él es bienvenido!", &masculine), "Él es bienvenido!");

    let feminine = InflectionContext::new().with_gender(Some(GrammaticalGender::Feminine));
    assert_eq!(fold("Eres bienvenido!", &feminine), "Eres bienvenida!");
    assert_eq!(fold("Él es bienvenido!", &feminine), "Ella es bienvenida!");
}

#[test]
fn gender_invariant_words_are_untouched() {
    assert_eq!(fold("Eres muy amable", &neuter()), "Eres muy amable");
}

#[test]
fn non_spanish_text_is_not_folded() {
    let text =
        FormattedText::plain("Él es bienvenido!").with_language(LanguageTag::new("en").unwrap());
    let out = inflected(&text, &neuter(), &LexiconInflector::spanish()).unwrap();
    assert_eq!(out, text);
}

#[test]
fn unpronounceable_suffix_stops_before_folding() {
    let err = PronounSpec::new("elle", 'x').unwrap_err();
    assert_eq!(err, PronounError::NotPronounceable { suffix: 'x' });
}

const GREETING: &str = "Hola a todos, él es bienvenido";

/// Engine that adds a greeting phrase to the feminine rendering only.
struct WordyInflector;

impl Inflector for WordyInflector {
    fn inflect(&self, text: &FormattedText, gender: Option<GrammaticalGender>) -> FormattedText {
        let feminine = LexiconInflector::spanish().inflect(text, gender);
        match gender {
            Some(GrammaticalGender::Feminine) => {
                feminine.map_text(|segment| segment.replacen("Hola ", "Hola de nuevo ", 1))
            }
            _ => feminine,
        }
    }
}

#[test]
fn word_count_drift_is_an_error_under_strict_alignment() {
    let err = inflected(&spanish(GREETING), &neuter(), &WordyInflector).unwrap_err();
    assert_eq!(
        err,
        FoldError::AlignmentMismatch {
            segment: 0,
            masculine_words: 6,
            feminine_words: 8,
        }
    );
}

#[test]
fn word_count_drift_is_tolerated_under_diff_alignment() {
    let context = neuter().with_alignment(Alignment::Diff);
    let out = inflected(&spanish(GREETING), &context, &WordyInflector).unwrap();
    assert_eq!(out.plain_text(), "Hola a todes, elle es bienvenide");
}

/// Engine that splits every segment in two for the feminine rendering.
struct SplittingInflector;

impl Inflector for SplittingInflector {
    fn inflect(&self, text: &FormattedText, gender: Option<GrammaticalGender>) -> FormattedText {
        if gender != Some(GrammaticalGender::Feminine) {
            return text.clone();
        }
        let segments = text
            .segments()
            .iter()
            .flat_map(|s| [s.clone(), Segment::plain("")])
            .collect();
        FormattedText::from_segments(segments)
    }
}

#[test]
fn segment_drift_is_an_error() {
    let err = inflected(&spanish("hola"), &neuter(), &SplittingInflector).unwrap_err();
    assert_eq!(
        err,
        FoldError::SegmentMismatch {
            masculine: 1,
            feminine: 2
        }
    );
}

#[test]
fn identity_engine_folds_to_input() {
    let text = spanish("Él es bienvenido!");
    assert_eq!(
        inflected(&text, &neuter(), &IdentityInflector).unwrap(),
        text
    );
}
