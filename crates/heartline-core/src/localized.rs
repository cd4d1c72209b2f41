//! Localizable display strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Text that is either a single string or a set of translations keyed by
/// language tag (`"en-US"`, `"de"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Translations(IndexMap<String, String>),
}

impl LocalizedText {
    /// Resolves the text for `language`.
    ///
    /// Lookup order: exact tag, then any tag sharing the base language
    /// (`de` matches `de-CH`), then English, then the first translation in
    /// document order. An empty translation map resolves to `""`.
    pub fn localize(&self, language: &str) -> &str {
        let translations = match self {
            Self::Plain(text) => return text,
            Self::Translations(translations) => translations,
        };

        if let Some(text) = translations.get(language) {
            return text;
        }

        let base = base_language(language);
        let by_base = |wanted: &str| {
            translations
                .iter()
                .find(|(tag, _)| base_language(tag).eq_ignore_ascii_case(wanted))
                .map(|(_, text)| text.as_str())
        };

        by_base(base)
            .or_else(|| by_base("en"))
            .or_else(|| translations.values().next().map(String::as_str))
            .unwrap_or_default()
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

fn base_language(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
