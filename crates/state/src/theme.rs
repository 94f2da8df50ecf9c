//! Theme catalog, system-preference mode and state slice.

use serde::{Deserialize, Serialize};

/// A selectable visual theme.
///
/// Color values are opaque strings handed to the presentation layer as CSS
/// custom properties; this core only routes them, it never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub is_dark: bool,
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub border: String,
    pub css_class: String,
}

/// The built-in light theme, also the fallback when toggling out of dark
/// mode finds no light theme in the catalog.
pub fn fallback_light() -> Theme {
    Theme {
        id: "light".to_string(),
        name: "light".to_string(),
        display_name: "Light".to_string(),
        is_dark: false,
        primary: "#0f62fe".to_string(),
        accent: "#8a3ffc".to_string(),
        background: "#f7f7f9".to_string(),
        surface: "#ffffff".to_string(),
        text_primary: "#101828".to_string(),
        text_secondary: "#667085".to_string(),
        border: "#e4e7ec".to_string(),
        css_class: "light-theme".to_string(),
    }
}

/// The built-in dark theme, fallback counterpart of [`fallback_light`].
pub fn fallback_dark() -> Theme {
    Theme {
        id: "dark".to_string(),
        name: "dark".to_string(),
        display_name: "Dark".to_string(),
        is_dark: true,
        primary: "#8ab4ff".to_string(),
        accent: "#c3a6ff".to_string(),
        background: "#0b0f17".to_string(),
        surface: "#121826".to_string(),
        text_primary: "#f2f4f7".to_string(),
        text_secondary: "#98a2b3".to_string(),
        border: "#243041".to_string(),
        css_class: "dark-theme".to_string(),
    }
}

/// The built-in theme catalog. The first entry is the default.
pub fn default_themes() -> Vec<Theme> {
    vec![
        fallback_light(),
        fallback_dark(),
        Theme {
            id: "blue".to_string(),
            name: "blue".to_string(),
            display_name: "Blue".to_string(),
            is_dark: false,
            primary: "#0f62fe".to_string(),
            accent: "#ff6a3d".to_string(),
            background: "#f3f8ff".to_string(),
            surface: "#ffffff".to_string(),
            text_primary: "#102a43".to_string(),
            text_secondary: "#486581".to_string(),
            border: "#dce6f2".to_string(),
            css_class: "blue-theme".to_string(),
        },
        Theme {
            id: "purple".to_string(),
            name: "purple".to_string(),
            display_name: "Purple".to_string(),
            is_dark: false,
            primary: "#8a3ffc".to_string(),
            accent: "#12b76a".to_string(),
            background: "#f8f5ff".to_string(),
            surface: "#ffffff".to_string(),
            text_primary: "#3d2c8d".to_string(),
            text_secondary: "#6e59a5".to_string(),
            border: "#e8e4f8".to_string(),
            css_class: "purple-theme".to_string(),
        },
    ]
}

/// System color-scheme preference mode.
///
/// `Auto` makes the *effective* theme a read-time function of the OS
/// signal; the stored `current` theme is untouched by it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemPreference {
    Light,
    Dark,
    Auto,
}

impl SystemPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemPreference::Light => "light",
            SystemPreference::Dark => "dark",
            SystemPreference::Auto => "auto",
        }
    }

    /// Parse a persisted mode. Unknown values yield `None`; rehydration
    /// falls back to `Auto`.
    pub fn parse(value: &str) -> Option<SystemPreference> {
        match value {
            "light" => Some(SystemPreference::Light),
            "dark" => Some(SystemPreference::Dark),
            "auto" => Some(SystemPreference::Auto),
            _ => None,
        }
    }
}

impl core::fmt::Display for SystemPreference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme slice of the global state.
///
/// Invariant: `is_dark` always mirrors `current.is_dark`; both change only
/// through the preference store's mutation methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub current: Theme,
    pub available: Vec<Theme>,
    pub is_dark: bool,
    pub system_preference: SystemPreference,
}

impl Default for ThemeState {
    fn default() -> Self {
        let available = default_themes();
        let current = available[0].clone();
        let is_dark = current.is_dark;
        Self {
            current,
            available,
            is_dark,
            system_preference: SystemPreference::Auto,
        }
    }
}
