//! Formatted text: an ordered run of segments, each carrying its own attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LanguageTag;

/// Formatting attached to a [`Segment`].
///
/// The key set is closed: every attribute the engine understands has a typed
/// field here. Attributes are compared as a whole; two segments with equal
/// attributes are indistinguishable apart from their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: Option<String>,
    /// Markdown phrasing to use when no grammatical gender is requested.
    pub ungendered_alternative: Option<String>,
}

impl Attributes {
    #[must_use]
    pub fn strong() -> Self {
        Self {
            strong: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ungendered_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.ungendered_alternative = Some(alternative.into());
        self
    }

    /// Union of two attribute sets. Flags are OR-ed; `self` wins for values.
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        Self {
            strong: self.strong || other.strong,
            emphasis: self.emphasis || other.emphasis,
            strikethrough: self.strikethrough || other.strikethrough,
            code: self.code || other.code,
            link: self.link.clone().or_else(|| other.link.clone()),
            ungendered_alternative: self
                .ungendered_alternative
                .clone()
                .or_else(|| other.ungendered_alternative.clone()),
        }
    }
}

/// A contiguous span of text with uniform attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    text: String,
    #[serde(default)]
    attributes: Attributes,
}

impl Segment {
    #[must_use]
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Attributes::default())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text, self.attributes.clone())
    }

    /// Text made only of `\n`: a line or paragraph break.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c == '\n')
    }
}

/// Text made of ordered [`Segment`]s plus the language it is written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedText {
    segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<LanguageTag>,
}

impl FormattedText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let mut out = Self::new();
        out.push(Segment::plain(text));
        out
    }

    /// Build from segments exactly as given: no merging, no dropping.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = Some(language);
        self
    }

    pub fn set_language(&mut self, language: Option<LanguageTag>) {
        self.language = language;
    }

    #[must_use]
    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment, merging it into the last one when the attributes match.
    /// Empty segments are dropped. Line breaks always stay segments of their
    /// own so that words never straddle a line.
    pub fn push(&mut self, segment: Segment) {
        if segment.text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut()
            && last.attributes == segment.attributes
            && !last.is_line_break()
            && !segment.is_line_break()
        {
            last.text.push_str(&segment.text);
            return;
        }
        self.segments.push(segment);
    }

    /// Rewrite each segment's text, keeping the segment structure intact.
    #[must_use]
    pub fn map_text(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|segment| segment.with_text(f(segment.text())))
                .collect(),
            language: self.language.clone(),
        }
    }

    /// Concatenated text of all segments, formatting dropped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}
