//! Common Types
//!
//! The word record shared by the store, the HTTP API and the client views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ==================== Language ====================

/// One of the three translation columns of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Finnish,
    Swedish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Finnish, Language::Swedish];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::Swedish => "swedish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (expected english, finnish or swedish)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "finnish" | "fi" => Ok(Language::Finnish),
            "swedish" | "sv" => Ok(Language::Swedish),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

// ==================== Tags ====================

/// Comma-separated tag labels of a word.
///
/// The raw text is kept verbatim so that it round-trips through the store
/// unchanged; callers that care about individual labels go through
/// [`Tags::iter`], which yields trimmed, non-empty tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tags(String);

impl Tags {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw comma-joined text as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.iter().any(|token| token == tag)
    }

    /// True when the word carries no labels at all.
    pub fn is_untagged(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Tags {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Tags {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<Option<String>> for Tags {
    fn from(raw: Option<String>) -> Self {
        raw.map(Self).unwrap_or_default()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let joined = iter
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }
}

// `null` is accepted and means untagged.
impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.into())
    }
}

// ==================== Word ====================

/// A persisted vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub finnish: String,
    pub swedish: String,
    #[serde(default)]
    pub tags: Tags,
}

impl Word {
    pub fn translation(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Finnish => &self.finnish,
            Language::Swedish => &self.swedish,
        }
    }

    pub fn to_draft(&self) -> WordDraft {
        WordDraft {
            english: self.english.clone(),
            finnish: self.finnish.clone(),
            swedish: self.swedish.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// The four editable fields of a word, without its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDraft {
    pub english: String,
    pub finnish: String,
    pub swedish: String,
    #[serde(default)]
    pub tags: Tags,
}

impl WordDraft {
    pub fn new(
        english: impl Into<String>,
        finnish: impl Into<String>,
        swedish: impl Into<String>,
        tags: impl Into<Tags>,
    ) -> Self {
        Self {
            english: english.into(),
            finnish: finnish.into(),
            swedish: swedish.into(),
            tags: tags.into(),
        }
    }

    pub fn with_id(self, id: i64) -> Word {
        Word {
            id,
            english: self.english,
            finnish: self.finnish,
            swedish: self.swedish,
            tags: self.tags,
        }
    }
}
