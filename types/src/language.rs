//! Language tags and the Spanish target check.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageTagError {
    #[error("language tag must not be empty")]
    Empty,
}

/// A BCP-47-ish language tag such as `es`, `es-MX` or `en`.
///
/// Only the primary subtag matters here, so the tag is stored as given and
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Placeholder tag meaning "the language the application runs in".
    pub const APP_PLACEHOLDER: &'static str = ".lproj";

    pub fn new(value: impl Into<String>) -> Result<Self, LanguageTagError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LanguageTagError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn spanish() -> Self {
        Self("es".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `es`, or any regional variant written `es-XX` / `es_XX`.
    #[must_use]
    pub fn is_spanish(&self) -> bool {
        let lower = self.0.to_ascii_lowercase();
        lower == "es" || lower.starts_with("es-") || lower.starts_with("es_")
    }

    #[must_use]
    pub fn is_app_placeholder(&self) -> bool {
        self.0 == Self::APP_PLACEHOLDER
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = LanguageTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageTag> for String {
    fn from(value: LanguageTag) -> Self {
        value.0
    }
}
