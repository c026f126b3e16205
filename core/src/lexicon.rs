//! Dictionary-backed inflection engine.
//!
//! `LexiconInflector` knows a fixed set of masculine/feminine word pairs and
//! swaps them wholesale. It does no morphology of its own; it exists so the
//! fold can run end to end without an external engine.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use elle_types::{FormattedText, GrammaticalGender};

use crate::inflect::Inflector;

/// Pronouns, determiners and a handful of common o/a words.
const SPANISH_PAIRS: &[(&str, &str)] = &[
    ("él", "ella"),
    ("ellos", "ellas"),
    ("nosotros", "nosotras"),
    ("vosotros", "vosotras"),
    ("los", "las"),
    ("unos", "unas"),
    ("uno", "una"),
    ("todo", "toda"),
    ("todos", "todas"),
    ("amigo", "amiga"),
    ("amigos", "amigas"),
    ("bienvenido", "bienvenida"),
    ("bienvenidos", "bienvenidas"),
    ("cansado", "cansada"),
    ("chico", "chica"),
    ("chicos", "chicas"),
    ("compañero", "compañera"),
    ("compañeros", "compañeras"),
    ("invitado", "invitada"),
    ("invitados", "invitadas"),
    ("listo", "lista"),
    ("listos", "listas"),
    ("niño", "niña"),
    ("niños", "niñas"),
    ("nuevo", "nueva"),
    ("nuevos", "nuevas"),
    ("querido", "querida"),
    ("queridos", "queridas"),
];

#[derive(Debug, Clone, Default)]
pub struct LexiconInflector {
    to_feminine: HashMap<String, String>,
    to_masculine: HashMap<String, String>,
}

impl LexiconInflector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Spanish lexicon.
    #[must_use]
    pub fn spanish() -> Self {
        let mut lexicon = Self::new();
        for (masculine, feminine) in SPANISH_PAIRS {
            lexicon.insert(masculine, feminine);
        }
        lexicon
    }

    /// Register a pair. Both forms are stored lower-cased; a later pair for
    /// the same word replaces the earlier one.
    pub fn insert(&mut self, masculine: &str, feminine: &str) {
        let masculine = masculine.trim().to_lowercase();
        let feminine = feminine.trim().to_lowercase();
        if masculine.is_empty() || feminine.is_empty() {
            return;
        }
        self.to_feminine.insert(masculine.clone(), feminine.clone());
        self.to_masculine.insert(feminine, masculine);
    }

    #[must_use]
    pub fn with_pair(mut self, masculine: &str, feminine: &str) -> Self {
        self.insert(masculine, feminine);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.to_feminine.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_feminine.is_empty()
    }
}

impl Inflector for LexiconInflector {
    fn inflect(&self, text: &FormattedText, gender: Option<GrammaticalGender>) -> FormattedText {
        let table = match gender {
            Some(GrammaticalGender::Masculine) => &self.to_masculine,
            Some(GrammaticalGender::Feminine) => &self.to_feminine,
            Some(GrammaticalGender::Neuter) | None => return text.clone(),
        };
        text.map_text(|segment| swap_words(segment, table))
    }
}

fn swap_words(text: &str, table: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    for piece in text.split_word_bounds() {
        match table.get(&piece.to_lowercase()) {
            Some(target) => out.push_str(&CaseShape::of(piece).apply(target)),
            None => out.push_str(piece),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseShape {
    Lower,
    Upper,
    Title,
}

impl CaseShape {
    fn of(word: &str) -> Self {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => {
                let rest = chars.as_str();
                if !rest.is_empty() && !rest.chars().any(char::is_lowercase) {
                    Self::Upper
                } else {
                    Self::Title
                }
            }
            _ => Self::Lower,
        }
    }

    fn apply(self, lower: &str) -> String {
        match self {
            Self::Lower => lower.to_string(),
            Self::Upper => lower.to_uppercase(),
            Self::Title => {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}
