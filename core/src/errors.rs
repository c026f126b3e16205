//! Fold errors.
//!
//! Both variants describe renderings from the inflection engine that do not
//! line up. The engine is expected to preserve segment structure and word
//! count; when it does not, the fold stops instead of guessing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error(
        "masculine and feminine renderings have different segment counts \
         ({masculine} vs {feminine})"
    )]
    SegmentMismatch { masculine: usize, feminine: usize },
    #[error(
        "segment {segment}: masculine rendering has {masculine_words} words \
         but feminine rendering has {feminine_words}"
    )]
    AlignmentMismatch {
        segment: usize,
        masculine_words: usize,
        feminine_words: usize,
    },
}

/// Word-count mismatch inside a single string, before a segment index is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("word counts differ ({masculine} vs {feminine})")]
pub struct WordCountMismatch {
    pub masculine: usize,
    pub feminine: usize,
}

impl WordCountMismatch {
    #[must_use]
    pub fn in_segment(self, segment: usize) -> FoldError {
        FoldError::AlignmentMismatch {
            segment,
            masculine_words: self.masculine,
            feminine_words: self.feminine,
        }
    }
}
