//! Segment-preserving fold over two formatted renderings.

use elle_types::{FormattedText, PronounSpec, Segment};

use crate::align::{Alignment, fold_words};
use crate::errors::FoldError;

/// Fold the masculine and feminine renderings segment by segment.
///
/// Segments are paired by position. Each output segment carries the
/// masculine segment's attributes; feminine attributes are never consulted.
pub fn compose(
    masculine: &FormattedText,
    feminine: &FormattedText,
    pronoun: &PronounSpec,
    alignment: Alignment,
) -> Result<FormattedText, FoldError> {
    if masculine.len() != feminine.len() {
        tracing::warn!(
            masculine = masculine.len(),
            feminine = feminine.len(),
            "renderings disagree on segment count"
        );
        return Err(FoldError::SegmentMismatch {
            masculine: masculine.len(),
            feminine: feminine.len(),
        });
    }

    let mut out = FormattedText::new();
    for (index, (m, f)) in masculine
        .segments()
        .iter()
        .zip(feminine.segments())
        .enumerate()
    {
        let folded = fold_words(m.text(), f.text(), pronoun, alignment).map_err(|err| {
            tracing::warn!(segment = index, %err, "renderings disagree on word count");
            err.in_segment(index)
        })?;
        out.push(Segment::new(folded, m.attributes().clone()));
    }

    if let Some(language) = masculine.language() {
        out = out.with_language(language.clone());
    }
    Ok(out)
}
