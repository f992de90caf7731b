//! Language catalog shared by every Krishi page
//!
//! Keys are the short codes used in URLs and persisted preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages a user can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Pa,
    Kn,
    Ta,
}

impl Language {
    /// All selectable languages in menu order
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hi,
        Language::Mr,
        Language::Pa,
        Language::Kn,
        Language::Ta,
    ];

    /// Short code ("en", "hi", ...)
    pub fn key(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Pa => "pa",
            Language::Kn => "kn",
            Language::Ta => "ta",
        }
    }

    /// Name of the language written in that language
    pub fn native_label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
            Language::Pa => "ਪੰਜਾਬੀ",
            Language::Kn => "ಕನ್ನಡ",
            Language::Ta => "தமிழ்",
        }
    }

    /// Parse a language key, case-insensitively
    pub fn from_key(key: &str) -> Option<Language> {
        let key = key.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key().eq_ignore_ascii_case(key))
    }

    /// Parse a language key, degrading to English for anything unknown
    pub fn from_key_or_default(key: &str) -> Language {
        Language::from_key(key).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
