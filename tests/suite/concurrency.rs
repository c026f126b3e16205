//! `inflected` is pure: one engine can serve many threads at once.

use std::thread;

use elle_core::{
    FormattedText, GrammaticalGender, InflectionContext, LanguageTag, LexiconInflector,
    PronounSpec, inflected,
};

const SENTENCES: &[(&str, &str)] = &[
    ("Hola chicos!", "Hola chiques!"),
    ("Él es bienvenido!", "Elle es bienvenide!"),
    ("Eres BIENVENIDO!", "Eres BIENVENIDE!"),
    ("Eres muy amable", "Eres muy amable"),
];

#[test]
fn parallel_folds_share_one_engine() {
    let engine = LexiconInflector::spanish();
    let context = InflectionContext::new().with_gender(Some(GrammaticalGender::Neuter));

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let engine = &engine;
                let context = &context;
                scope.spawn(move || {
                    for round in 0..50 {
                        let (input, expected) = SENTENCES[(worker + round) % SENTENCES.len()];
                        let text =
                            FormattedText::plain(input).with_language(LanguageTag::spanish());
                        let out = inflected(&text, context, engine).unwrap();
                        assert_eq!(out.plain_text(), expected);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn per_thread_pronouns_do_not_interfere() {
    let engine = LexiconInflector::spanish();
    let text = FormattedText::plain("él es bienvenido").with_language(LanguageTag::spanish());

    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = ['a', 'e', 'o']
            .into_iter()
            .map(|suffix| {
                let engine = &engine;
                let text = &text;
                scope.spawn(move || {
                    let context = InflectionContext::new()
                        .with_pronoun(Some(PronounSpec::new("ello", suffix).unwrap()));
                    inflected(text, &context, engine).unwrap().plain_text()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(
        results,
        [
            "ello es bienvenida",
            "ello es bienvenide",
            "ello es bienvenido"
        ]
    );
}
