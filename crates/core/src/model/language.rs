use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::PracticeKeyError;

/// A study language, identified by its display name (e.g. `French`).
///
/// Comparison and hashing ignore case and surrounding whitespace so that
/// `french` and `French` address the same practice material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Returns `None` when the name is blank.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_english(&self) -> bool {
        self.0.eq_ignore_ascii_case("english") || self.0.eq_ignore_ascii_case("en")
    }

    /// Platform speech tag for this language (`French` → `fr-FR`).
    #[must_use]
    pub fn speech_tag(&self) -> String {
        speech_tag(&self.0)
    }

    fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl TryFrom<String> for Language {
    type Error = PracticeKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PracticeKeyError::EmptyLanguage)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("chinese", "zh"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("russian", "ru"),
    ("arabic", "ar"),
    ("hindi", "hi"),
    ("turkish", "tr"),
    ("vietnamese", "vi"),
    ("thai", "th"),
    ("dutch", "nl"),
    ("greek", "el"),
    ("polish", "pl"),
    ("swedish", "sv"),
    ("danish", "da"),
    ("norwegian", "no"),
    ("finnish", "fi"),
    ("czech", "cs"),
    ("romanian", "ro"),
    ("hungarian", "hu"),
    ("ukrainian", "uk"),
    ("hebrew", "he"),
    ("indonesian", "id"),
];

const SPEECH_TAGS: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("es", "es-ES"),
    ("fr", "fr-FR"),
    ("de", "de-DE"),
    ("it", "it-IT"),
    ("pt", "pt-PT"),
    ("zh", "zh-CN"),
    ("zh-tw", "zh-TW"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("ru", "ru-RU"),
    ("ar", "ar-SA"),
    ("hi", "hi-IN"),
    ("bn", "bn-IN"),
    ("tr", "tr-TR"),
    ("vi", "vi-VN"),
    ("th", "th-TH"),
    ("nl", "nl-NL"),
    ("el", "el-GR"),
    ("pl", "pl-PL"),
    ("ta", "ta-IN"),
    ("te", "te-IN"),
    ("gu", "gu-IN"),
    ("kn", "kn-IN"),
    ("ml", "ml-IN"),
    ("mr", "mr-IN"),
    ("pa", "pa-IN"),
    ("ur", "ur-PK"),
    ("id", "id-ID"),
    ("ms", "ms-MY"),
    ("fil", "fil-PH"),
    ("sv", "sv-SE"),
    ("da", "da-DK"),
    ("no", "nb-NO"),
    ("fi", "fi-FI"),
    ("cs", "cs-CZ"),
    ("ro", "ro-RO"),
    ("hu", "hu-HU"),
    ("uk", "uk-UA"),
    ("he", "he-IL"),
];

/// Resolve a language name or code to a speech synthesis tag.
///
/// Display names are mapped to codes first. Anything unknown is returned
/// unchanged so callers can pass a full tag such as `pt-BR` straight through.
#[must_use]
pub fn speech_tag(language: &str) -> String {
    let folded = language.trim().to_lowercase();
    let code = LANGUAGE_NAMES
        .iter()
        .find(|(name, _)| *name == folded)
        .map_or(folded.as_str(), |(_, code)| *code);

    SPEECH_TAGS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or_else(|| language.trim().to_owned(), |(_, tag)| (*tag).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_language_is_rejected() {
        assert!(Language::new("   ").is_none());
    }

    #[test]
    fn languages_compare_case_insensitively() {
        assert_eq!(Language::new("French"), Language::new(" french "));
        assert_ne!(Language::new("French"), Language::new("Spanish"));
    }

    #[test]
    fn deserializing_trims_and_rejects_blank_names() {
        let language: Language = serde_json::from_str(r#"" French ""#).unwrap();
        assert_eq!(language.name(), "French");

        let err = serde_json::from_str::<Language>(r#""  ""#).unwrap_err();
        assert!(err.to_string().contains("language cannot be empty"));
    }

    #[test]
    fn speech_tag_resolves_names_and_codes() {
        assert_eq!(speech_tag("fr"), "fr-FR");
        assert_eq!(speech_tag("French"), "fr-FR");
        assert_eq!(speech_tag("no"), "nb-NO");
        assert_eq!(speech_tag("pt-BR"), "pt-BR");
        assert_eq!(Language::new("Spanish").unwrap().speech_tag(), "es-ES");
    }
}
