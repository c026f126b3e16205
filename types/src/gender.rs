use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical gender category requested for agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalGender {
    Masculine,
    Feminine,
    Neuter,
}

impl GrammaticalGender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
        }
    }

    /// Parse a gender name. Short forms `m`, `f` and `n` are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "masculine" | "m" => Some(Self::Masculine),
            "feminine" | "f" => Some(Self::Feminine),
            "neuter" | "neutral" | "n" => Some(Self::Neuter),
            _ => None,
        }
    }
}

impl fmt::Display for GrammaticalGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
