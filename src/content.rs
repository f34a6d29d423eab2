//! Résumé content shown by the site shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content lives in `content/profile.json` and is compiled into the bundle.
//! Each profile is one language-tagged résumé block; the active language picks
//! which block is visible.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LANGUAGE;

const EMBEDDED_CONTENT: &str = include_str!("../content/profile.json");

/// Failure to load site content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level site content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub languages: Vec<LanguageOption>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// One entry of the language switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

/// A single-language résumé block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub lang: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: vec![
                LanguageOption { code: "en".to_owned(), label: "EN".to_owned() },
                LanguageOption { code: "ru".to_owned(), label: "RU".to_owned() },
            ],
            profiles: Vec::new(),
        }
    }
}

impl SiteContent {
    /// Parse content from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Malformed`] if the document does not match the
    /// content schema.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the content bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Malformed`] if the bundled file is broken.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Load the bundled content, logging and falling back to an empty site
    /// when it cannot be parsed.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(content) => content,
            Err(e) => {
                log::error!("{e}; rendering without profiles");
                Self::default()
            }
        }
    }

    /// Profile to show for `lang`.
    ///
    /// Falls back to the default language's profile, then to the first one.
    pub fn profile_for(&self, lang: Option<&str>) -> Option<&Profile> {
        lang.and_then(|code| self.find_profile(code))
            .or_else(|| self.find_profile(&self.default_language))
            .or_else(|| self.profiles.first())
    }

    fn find_profile(&self, code: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.lang == code)
    }
}
