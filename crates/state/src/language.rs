//! Language catalog and state slice.

use serde::{Deserialize, Serialize};

/// A selectable UI language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub is_rtl: bool,
}

impl Language {
    fn new(code: &str, name: &str, native_name: &str, is_rtl: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            is_rtl,
        }
    }
}

/// The built-in language catalog. The first entry is the default.
pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en", "English", "English", false),
        Language::new("es", "Spanish", "Español", false),
        Language::new("fr", "French", "Français", false),
        Language::new("de", "German", "Deutsch", false),
        Language::new("ar", "Arabic", "العربية", true),
    ]
}

/// Language slice of the global state.
///
/// Invariant: `current` is always a member of `available`; exactly one
/// language is current at a time. `is_loading` is true only between a
/// language-change request and its commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageState {
    pub current: Language,
    pub available: Vec<Language>,
    pub is_loading: bool,
}

impl Default for LanguageState {
    fn default() -> Self {
        let available = default_languages();
        Self {
            current: available[0].clone(),
            available,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_english_not_loading() {
        let state = LanguageState::default();
        assert_eq!(state.current.code, "en");
        assert!(!state.is_loading);
        assert!(state.available.contains(&state.current));
    }

    #[test]
    fn catalog_marks_arabic_rtl_only() {
        let rtl: Vec<String> = default_languages()
            .into_iter()
            .filter(|l| l.is_rtl)
            .map(|l| l.code)
            .collect();
        assert_eq!(rtl, vec!["ar".to_string()]);
    }
}
