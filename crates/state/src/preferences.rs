//! Preference store — language and theme state, persistence, rehydration.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use bankshell_core::{ColorSchemeProbe, KeyValueStorage};

use crate::language::LanguageState;
use crate::listeners::{Listeners, SubscriptionHandle};
use crate::theme::{SystemPreference, Theme, ThemeState, fallback_dark, fallback_light};

/// Storage keys for persisted preference values.
pub mod keys {
    pub const LANGUAGE: &str = "app_language";
    pub const THEME: &str = "app_theme";
    pub const THEME_PREFERENCE: &str = "app_theme_preference";

    pub const ALL: [&str; 3] = [LANGUAGE, THEME, THEME_PREFERENCE];
}

/// Combined view published to preference subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    pub language: LanguageState,
    pub theme: ThemeState,
}

/// In-flight language change.
///
/// Language loading is asynchronous from the UI's point of view: the store
/// flips `is_loading` immediately and the host's event loop calls
/// [`PreferenceStore::commit_language`] once the (bounded) load delay has
/// elapsed. Tickets are numbered monotonically; only the newest request
/// commits, so a slow earlier load can never overwrite a later selection.
#[derive(Debug)]
pub struct LanguageTicket {
    serial: u64,
    code: String,
}

impl LanguageTicket {
    pub fn code(&self) -> &str {
        &self.code
    }
}

struct Inner {
    language: LanguageState,
    theme: ThemeState,
    /// Serial of the newest language request; stale commits are discarded.
    language_serial: u64,
}

/// Owns [`LanguageState`] and [`ThemeState`].
///
/// Persists selections to client storage best-effort: a failed write is
/// logged and ignored, the in-memory state still commits (storage is not
/// authoritative for the running session — only for the next rehydration).
/// Construction rehydrates from storage and silently discards persisted
/// values that no longer match the catalogs.
pub struct PreferenceStore {
    inner: Mutex<Inner>,
    storage: Arc<dyn KeyValueStorage>,
    scheme: Arc<dyn ColorSchemeProbe>,
    listeners: Listeners<PreferenceSnapshot>,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, scheme: Arc<dyn ColorSchemeProbe>) -> Self {
        let mut language = LanguageState::default();
        let mut theme = ThemeState::default();

        if let Some(code) = read_key(storage.as_ref(), keys::LANGUAGE) {
            match language.available.iter().find(|l| l.code == code) {
                Some(saved) => language.current = saved.clone(),
                None => warn!(code, "discarding persisted language not in catalog"),
            }
        }

        if let Some(id) = read_key(storage.as_ref(), keys::THEME) {
            match theme.available.iter().find(|t| t.id == id) {
                Some(saved) => {
                    theme.current = saved.clone();
                    theme.is_dark = saved.is_dark;
                }
                None => warn!(id, "discarding persisted theme not in catalog"),
            }
        }

        if let Some(mode) = read_key(storage.as_ref(), keys::THEME_PREFERENCE) {
            match SystemPreference::parse(&mode) {
                Some(saved) => theme.system_preference = saved,
                None => warn!(mode, "discarding persisted theme preference"),
            }
        }

        Self {
            inner: Mutex::new(Inner {
                language,
                theme,
                language_serial: 0,
            }),
            storage,
            scheme,
            listeners: Listeners::new(),
        }
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        let inner = self.lock();
        PreferenceSnapshot {
            language: inner.language.clone(),
            theme: inner.theme.clone(),
        }
    }

    /// Observe every committed preference change.
    pub fn subscribe(
        &self,
        callback: impl Fn(&PreferenceSnapshot) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        self.listeners.subscribe(callback)
    }

    // ─── Language ────────────────────────────────────────────────────────

    /// Begin a language change. Flips `is_loading` and returns the commit
    /// ticket; unknown codes are ignored and return `None`.
    pub fn request_language(&self, code: &str) -> Option<LanguageTicket> {
        let (ticket, snapshot) = {
            let mut inner = self.lock();
            if !inner.language.available.iter().any(|l| l.code == code) {
                warn!(code, "ignoring unknown language code");
                return None;
            }
            inner.language_serial += 1;
            inner.language.is_loading = true;
            (
                LanguageTicket {
                    serial: inner.language_serial,
                    code: code.to_string(),
                },
                snapshot_of(&inner),
            )
        };
        self.listeners.notify(&snapshot);
        Some(ticket)
    }

    /// Complete a language change once the host's load delay has elapsed.
    ///
    /// Commits only when `ticket` is still the newest request; an earlier
    /// in-flight change that lost the race is discarded without touching
    /// state (`is_loading` stays up until the winning commit lands).
    pub fn commit_language(&self, ticket: LanguageTicket) {
        let snapshot = {
            let mut inner = self.lock();
            if ticket.serial != inner.language_serial {
                debug!(code = %ticket.code, "superseded language load discarded");
                return;
            }
            let Some(language) = inner
                .language
                .available
                .iter()
                .find(|l| l.code == ticket.code)
                .cloned()
            else {
                warn!(code = %ticket.code, "language vanished from catalog before commit");
                inner.language.is_loading = false;
                return;
            };
            inner.language.current = language;
            inner.language.is_loading = false;
            snapshot_of(&inner)
        };
        self.persist(keys::LANGUAGE, &ticket.code);
        debug!(code = %ticket.code, "language changed");
        self.listeners.notify(&snapshot);
    }

    /// Request-and-commit in one step, for hosts that do not simulate a
    /// load delay.
    pub fn set_language(&self, code: &str) {
        if let Some(ticket) = self.request_language(code) {
            self.commit_language(ticket);
        }
    }

    // ─── Theme ───────────────────────────────────────────────────────────

    /// Select a theme from the catalog. Unknown ids are ignored.
    pub fn set_theme(&self, theme_id: &str) {
        let found = {
            let inner = self.lock();
            inner
                .theme
                .available
                .iter()
                .find(|t| t.id == theme_id)
                .cloned()
        };
        match found {
            Some(theme) => self.apply_theme(theme),
            None => warn!(theme_id, "ignoring unknown theme id"),
        }
    }

    /// Switch to the first available counterpart theme (light↔dark). Falls
    /// back to the built-in defaults when the catalog has no counterpart —
    /// the toggle always lands on some valid theme.
    pub fn toggle_dark_mode(&self) {
        let target = {
            let inner = self.lock();
            if inner.theme.current.is_dark {
                inner
                    .theme
                    .available
                    .iter()
                    .find(|t| !t.is_dark)
                    .cloned()
                    .unwrap_or_else(fallback_light)
            } else {
                inner
                    .theme
                    .available
                    .iter()
                    .find(|t| t.is_dark)
                    .cloned()
                    .unwrap_or_else(fallback_dark)
            }
        };
        self.apply_theme(target);
    }

    pub fn set_system_preference(&self, mode: SystemPreference) {
        let snapshot = {
            let mut inner = self.lock();
            inner.theme.system_preference = mode;
            snapshot_of(&inner)
        };
        self.persist(keys::THEME_PREFERENCE, mode.as_str());
        self.listeners.notify(&snapshot);
    }

    /// The theme actually rendered.
    ///
    /// In `Auto` mode this is a pure function of the OS signal at read
    /// time: the probe is re-queried on every call, nothing is stored.
    pub fn effective_theme(&self) -> Theme {
        let inner = self.lock();
        match inner.theme.system_preference {
            SystemPreference::Auto => {
                if self.scheme.prefers_dark() {
                    inner
                        .theme
                        .available
                        .iter()
                        .find(|t| t.is_dark)
                        .cloned()
                        .unwrap_or_else(fallback_dark)
                } else {
                    inner
                        .theme
                        .available
                        .iter()
                        .find(|t| !t.is_dark)
                        .cloned()
                        .unwrap_or_else(fallback_light)
                }
            }
            _ => inner.theme.current.clone(),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Drop persisted keys and return to catalog defaults. Invalidates any
    /// in-flight language ticket.
    pub fn reset(&self) {
        for key in keys::ALL {
            if let Err(err) = self.storage.remove(key) {
                warn!(key, %err, "storage remove failed");
            }
        }
        let snapshot = {
            let mut inner = self.lock();
            inner.language = LanguageState::default();
            inner.theme = ThemeState::default();
            inner.language_serial += 1;
            snapshot_of(&inner)
        };
        self.listeners.notify(&snapshot);
    }

    /// Replace both slices wholesale. This is the import path for state
    /// hand-off between shells; sessions are deliberately not restorable
    /// this way.
    pub fn restore(&self, language: LanguageState, theme: ThemeState) {
        let snapshot = {
            let mut inner = self.lock();
            inner.language = language;
            inner.theme = theme;
            inner.language_serial += 1;
            snapshot_of(&inner)
        };
        self.listeners.notify(&snapshot);
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn apply_theme(&self, theme: Theme) {
        let snapshot = {
            let mut inner = self.lock();
            inner.theme.is_dark = theme.is_dark;
            inner.theme.current = theme.clone();
            snapshot_of(&inner)
        };
        self.persist(keys::THEME, &theme.id);
        debug!(theme = %theme.id, dark = theme.is_dark, "theme changed");
        self.listeners.notify(&snapshot);
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            warn!(key, %err, "storage write failed; keeping in-memory state");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn snapshot_of(inner: &Inner) -> PreferenceSnapshot {
    PreferenceSnapshot {
        language: inner.language.clone(),
        theme: inner.theme.clone(),
    }
}

fn read_key(storage: &dyn KeyValueStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "storage read failed; using defaults");
            None
        }
    }
}
