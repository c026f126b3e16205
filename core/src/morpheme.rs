//! Folding of a single masculine/feminine word pair.
//!
//! Rules, first match wins:
//!
//! 1. `él` / `ella` in lower, UPPER or Title case becomes the neutral pronoun
//!    in the same case.
//! 2. Words of equal length are walked character by character; every offset
//!    where the masculine side has `o` and the feminine side has `a` (same
//!    case) receives the neutral suffix. With an `e`/`i` suffix a preceding
//!    `c` is rewritten to `qu` (`chico` + `chica` -> `chique`).
//!
//! Anything else is not handled here and reported as `None`.

use elle_types::PronounSpec;

/// Fold one differing word pair. `None` when no rule applies.
#[must_use]
pub fn fold_word(masculine: &str, feminine: &str, pronoun: &PronounSpec) -> Option<String> {
    match (masculine, feminine) {
        ("él", "ella") => Some(pronoun.third_person().to_string()),
        ("ÉL", "ELLA") => Some(pronoun.upper_third_person()),
        ("Él", "Ella") => Some(pronoun.title_third_person()),
        _ => fold_suffixes(masculine, feminine, pronoun),
    }
}

fn fold_suffixes(masculine: &str, feminine: &str, pronoun: &PronounSpec) -> Option<String> {
    if masculine.chars().count() != feminine.chars().count() {
        return None;
    }

    let suffix = pronoun.suffix();
    let mut folded = String::with_capacity(masculine.len() + 1);

    for (m, f) in masculine.chars().zip(feminine.chars()) {
        let upper = match (m, f) {
            ('o', 'a') => false,
            ('O', 'A') => true,
            _ => {
                folded.push(m);
                continue;
            }
        };

        if pronoun.needs_front_vowel_correction() {
            harden_preceding_c(&mut folded);
        }
        folded.push(if upper {
            suffix.to_ascii_uppercase()
        } else {
            suffix
        });
    }

    Some(folded)
}

/// `c` before a front vowel softens; spell it `qu` instead.
fn harden_preceding_c(folded: &mut String) {
    let replacement = match folded.chars().next_back() {
        Some('c') => "qu",
        Some('C') => "QU",
        _ => return,
    };
    folded.pop();
    folded.push_str(replacement);
}
