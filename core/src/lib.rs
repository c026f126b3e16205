//! Gender-folding engine for elle.
//!
//! Two renderings of the same Spanish text, one forced masculine and one
//! forced feminine, are compared word by word and merged into a neutral form
//! that uses a configurable pronoun and word ending:
//!
//! ```text
//! inflected() -> Inflector (masculine, feminine) -> compose() -> fold_words() -> fold_word()
//! ```
//!
//! - **`orchestrator`**: decides between pass-through, ungendered alternatives and folding
//! - **`compose`**: folds segment by segment, keeping the masculine formatting
//! - **`align`**: pairs words up, strictly or through a diff
//! - **`morpheme`**: folds one masculine/feminine word pair
//! - **`inflect`** / **`lexicon`**: the inflection engine boundary and a dictionary engine
//! - **`markdown`**: inline markdown in and out of [`FormattedText`]

pub mod align;
pub mod compose;
pub mod errors;
pub mod inflect;
pub mod lexicon;
pub mod markdown;
pub mod morpheme;
pub mod orchestrator;

pub use align::{Alignment, fold_words, split_words};
pub use compose::compose;
pub use errors::{FoldError, WordCountMismatch};
pub use inflect::{IdentityInflector, Inflector};
pub use lexicon::LexiconInflector;
pub use markdown::{UNGENDERED_DESTINATION, parse_markdown, render_markdown};
pub use morpheme::fold_word;
pub use orchestrator::{InflectionContext, Route, inflected, substitute_alternatives};

pub use elle_types::{
    Attributes, FormattedText, GrammaticalGender, LanguageTag, PronounError, PronounSpec, Segment,
};
