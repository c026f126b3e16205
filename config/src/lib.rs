//! Configuration loading for elle.
//!
//! The TOML file lives at `~/.elle/config.toml` (or `$ELLE_CONFIG`). Raw
//! sections are all optional; [`ElleConfig::resolve`] validates them, applies
//! environment overrides and produces [`Settings`].

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use elle_core::{Alignment, InflectionContext, LexiconInflector};
use elle_types::{GrammaticalGender, LanguageTag, LanguageTagError, PronounError, PronounSpec};

pub const ENV_CONFIG: &str = "ELLE_CONFIG";
pub const ENV_GENDER: &str = "ELLE_GENDER";
pub const ENV_ALIGNMENT: &str = "ELLE_ALIGNMENT";
pub const ENV_PRONOUN: &str = "ELLE_PRONOUN";
pub const ENV_SUFFIX: &str = "ELLE_SUFFIX";
pub const ENV_LANG: &str = "ELLE_LANG";

const DEFAULT_GENDER: &str = "neuter";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid pronoun: {0}")]
    Pronoun(#[from] PronounError),
    #[error("invalid language tag: {0}")]
    Language(#[from] LanguageTagError),
    #[error("pronoun suffix must be a single character (got {0:?})")]
    SuffixLength(String),
    #[error("unknown grammatical gender {0:?}; expected masculine, feminine, neuter or none")]
    UnknownGender(String),
    #[error("unknown alignment {0:?}; expected strict or diff")]
    UnknownAlignment(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct ElleConfig {
    pub locale: Option<LocaleConfig>,
    pub fold: Option<FoldConfig>,
    pub pronoun: Option<PronounConfig>,
    /// Extra masculine = "feminine" pairs for the lexicon inflector.
    #[serde(default)]
    pub lexicon: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleConfig {
    pub preferred: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FoldConfig {
    pub gender: Option<String>,
    pub alignment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PronounConfig {
    pub third_person: Option<String>,
    pub suffix: Option<String>,
}

/// Fully resolved settings: the inflection context and the engine to use.
#[derive(Debug, Clone)]
pub struct Settings {
    context: InflectionContext,
    inflector: LexiconInflector,
}

impl Settings {
    #[must_use]
    pub fn context(&self) -> &InflectionContext {
        &self.context
    }

    #[must_use]
    pub fn inflector(&self) -> &LexiconInflector {
        &self.inflector
    }
}

impl ElleConfig {
    /// Load the config file, falling back to defaults when it is missing or
    /// unusable.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        self.resolve_with(|key| env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup. Environment values win
    /// over the file.
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, ConfigError> {
        let fold = self.fold.as_ref();

        let preferred_languages = match lookup(ENV_LANG) {
            Some(lang) => vec![LanguageTag::new(lang)?],
            None => match self.locale.as_ref().and_then(|l| l.preferred.as_ref()) {
                Some(preferred) => preferred
                    .iter()
                    .map(|tag| LanguageTag::new(tag.as_str()))
                    .collect::<Result<Vec<_>, _>>()?,
                None => vec![LanguageTag::spanish()],
            },
        };

        let gender = lookup(ENV_GENDER)
            .or_else(|| fold.and_then(|f| f.gender.clone()))
            .unwrap_or_else(|| DEFAULT_GENDER.to_string());
        let gender = parse_gender(&gender)?;

        let alignment = lookup(ENV_ALIGNMENT).or_else(|| fold.and_then(|f| f.alignment.clone()));
        let alignment = match alignment {
            Some(raw) => Alignment::parse(&raw).ok_or(ConfigError::UnknownAlignment(raw))?,
            None => Alignment::default(),
        };

        let pronoun = self.resolve_pronoun(&lookup)?;

        let mut inflector = LexiconInflector::spanish();
        for (masculine, feminine) in &self.lexicon {
            inflector.insert(masculine, feminine);
        }

        let context = InflectionContext::new()
            .with_preferred_languages(preferred_languages)
            .with_gender(gender)
            .with_pronoun(pronoun)
            .with_alignment(alignment);

        tracing::debug!(?context, lexicon = inflector.len(), "resolved settings");
        Ok(Settings { context, inflector })
    }

    /// `None` unless the pronoun or suffix is set somewhere; a custom pronoun
    /// forces folding, so defaults must not invent one.
    fn resolve_pronoun(
        &self,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Option<PronounSpec>, ConfigError> {
        let section = self.pronoun.as_ref();
        let third_person =
            lookup(ENV_PRONOUN).or_else(|| section.and_then(|p| p.third_person.clone()));
        let suffix = lookup(ENV_SUFFIX).or_else(|| section.and_then(|p| p.suffix.clone()));
        if third_person.is_none() && suffix.is_none() {
            return Ok(None);
        }

        let default = PronounSpec::default();
        let suffix = match suffix {
            Some(raw) => single_char(&raw)?,
            None => default.suffix(),
        };
        let third_person = third_person.unwrap_or_else(|| default.third_person().to_string());
        Ok(Some(PronounSpec::new(third_person, suffix)?))
    }
}

fn single_char(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::SuffixLength(raw.to_string())),
    }
}

fn parse_gender(raw: &str) -> Result<Option<GrammaticalGender>, ConfigError> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    GrammaticalGender::parse(raw)
        .map(Some)
        .ok_or_else(|| ConfigError::UnknownGender(raw.to_string()))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".elle").join("config.toml"))
}
