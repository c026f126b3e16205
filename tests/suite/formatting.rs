//! Formatting survives folding and alternative substitution.

use elle_core::{
    Attributes, FormattedText, GrammaticalGender, InflectionContext, LanguageTag,
    LexiconInflector, inflected, parse_markdown, render_markdown,
};
use insta::assert_snapshot;

fn fold_markdown(source: &str, context: &InflectionContext) -> FormattedText {
    let text = parse_markdown(source).with_language(LanguageTag::spanish());
    inflected(&text, context, &LexiconInflector::spanish()).expect("fold succeeds")
}

fn neuter() -> InflectionContext {
    InflectionContext::new().with_gender(Some(GrammaticalGender::Neuter))
}

#[test]
fn strong_runs_keep_their_formatting() {
    let folded = fold_markdown("**Él** es **bienvenido**!", &neuter());

    let expected =
        parse_markdown("**Elle** es **bienvenide**!").with_language(LanguageTag::spanish());
    assert_eq!(folded, expected);
    assert_snapshot!(render_markdown(&folded), @"**Elle** es **bienvenide**!");
}

#[test]
fn words_next_to_line_breaks_fold() {
    let folded = fold_markdown("Hola chicos\nÉl es bienvenido", &neuter());
    assert_snapshot!(render_markdown(&folded), @r"
    Hola chiques
    Elle es bienvenide
    ");
}

#[test]
fn words_next_to_paragraph_breaks_fold() {
    let folded = fold_markdown("Hola **chicos**\n\nÉl es bienvenido", &neuter());
    assert_eq!(
        render_markdown(&folded),
        "Hola **chiques**\n\nElle es bienvenide"
    );
}

#[test]
fn every_attribute_kind_survives() {
    let folded = fold_markdown(
        "*chicos* y ~~chicos~~ y [chicos](https://example.com)",
        &neuter(),
    );
    assert_snapshot!(
        render_markdown(&folded),
        @"*chiques* y ~~chiques~~ y [chiques](<https://example.com>)"
    );
}

#[test]
fn ungendered_alternative_replaces_segment() {
    let folded = fold_markdown(
        r#"[Bienvenido](ungendered: "Te damos la bienvenida")!"#,
        &InflectionContext::new(),
    );
    assert_eq!(folded.plain_text(), "Te damos la bienvenida!");
    assert!(
        folded
            .segments()
            .iter()
            .all(|s| s.attributes().ungendered_alternative.is_none())
    );
}

#[test]
fn alternative_inherits_segment_formatting() {
    let folded = fold_markdown(
        r#"**[Bienvenido](ungendered: "Te damos *la* bienvenida")**!"#,
        &InflectionContext::new(),
    );
    assert_snapshot!(
        render_markdown(&folded),
        @"**Te damos** ***la*** **bienvenida**!"
    );
}

#[test]
fn neuter_request_ignores_alternatives() {
    let folded = fold_markdown(
        r#"Hola [chicos](ungendered: "a todo el mundo")!"#,
        &neuter(),
    );
    assert_eq!(folded.plain_text(), "Hola chiques!");
    assert_eq!(
        folded.segments()[1].attributes(),
        &Attributes::default().with_ungendered_alternative("a todo el mundo")
    );
}

#[test]
fn formatted_text_serializes_with_attributes() {
    let folded = fold_markdown("**Él** llegó", &neuter());
    let json = serde_json::to_value(&folded).unwrap();
    assert_eq!(json["segments"][0]["text"], "Elle");
    assert_eq!(json["segments"][0]["attributes"]["strong"], true);
    assert_eq!(json["language"], "es");

    let back: FormattedText = serde_json::from_value(json).unwrap();
    assert_eq!(back, folded);
}
