//! Global state facade — one observable aggregate over both stores.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bankshell_auth::{AuthBoundary, Permission, Session, UserInfo};

use crate::language::{Language, LanguageState};
use crate::preferences::PreferenceStore;
use crate::session_store::SessionStore;
use crate::theme::{SystemPreference, Theme, ThemeState};

/// Read-only composite of the three state slices.
///
/// Recomputed on read from the owning stores; never mutated directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalState {
    pub user_session: Session,
    pub language: LanguageState,
    pub theme: ThemeState,
}

/// Serialized hand-off of language + theme between independently loaded
/// shells. Session is deliberately absent: a session may only ever
/// originate from the auth boundary, never from an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateExport {
    pub language: LanguageState,
    pub theme: ThemeState,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Composes [`SessionStore`] and [`PreferenceStore`] into the single
/// surface UI code talks to: derived projections on the read side, the
/// `StateActions` mutation API on the write side.
///
/// The facade owns no primary data. Each projection reads the owning
/// store's current snapshot; each action delegates to the owning store's
/// mutation method.
pub struct GlobalStateFacade {
    session: Arc<SessionStore>,
    preferences: Arc<PreferenceStore>,
}

impl GlobalStateFacade {
    pub fn new(session: Arc<SessionStore>, preferences: Arc<PreferenceStore>) -> Self {
        Self {
            session,
            preferences,
        }
    }

    /// Handle to the session store, for subscribing to session changes.
    pub fn session_store(&self) -> Arc<SessionStore> {
        self.session.clone()
    }

    /// Handle to the preference store, for subscribing to preference
    /// changes.
    pub fn preference_store(&self) -> Arc<PreferenceStore> {
        self.preferences.clone()
    }

    // ─── Derived projections ─────────────────────────────────────────────

    pub fn global_state(&self) -> GlobalState {
        let preferences = self.preferences.snapshot();
        GlobalState {
            user_session: self.session.snapshot(),
            language: preferences.language,
            theme: preferences.theme,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.snapshot().is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.snapshot().user().cloned()
    }

    /// `"{first} {last}"` trimmed; empty when anonymous.
    pub fn user_display_name(&self) -> String {
        self.current_user()
            .map(|user| user.display_name())
            .unwrap_or_default()
    }

    pub fn user_permissions(&self) -> HashSet<Permission> {
        self.session.snapshot().permissions().clone()
    }

    pub fn current_language(&self) -> Language {
        self.preferences.snapshot().language.current
    }

    pub fn available_languages(&self) -> Vec<Language> {
        self.preferences.snapshot().language.available
    }

    pub fn is_language_loading(&self) -> bool {
        self.preferences.snapshot().language.is_loading
    }

    pub fn is_rtl_language(&self) -> bool {
        self.current_language().is_rtl
    }

    pub fn current_theme(&self) -> Theme {
        self.preferences.snapshot().theme.current
    }

    pub fn available_themes(&self) -> Vec<Theme> {
        self.preferences.snapshot().theme.available
    }

    pub fn is_dark_mode(&self) -> bool {
        self.preferences.snapshot().theme.is_dark
    }

    pub fn system_theme_preference(&self) -> SystemPreference {
        self.preferences.snapshot().theme.system_preference
    }

    pub fn effective_theme(&self) -> Theme {
        self.preferences.effective_theme()
    }

    // ─── Permission conveniences ─────────────────────────────────────────

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.session.snapshot().has_permission(permission)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.session.snapshot().has_any(permissions)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.session.snapshot().has_all(permissions)
    }

    // ─── State actions ───────────────────────────────────────────────────

    pub fn on_auth_event(&self, user: Option<UserInfo>) {
        self.session.on_auth_event(user);
    }

    /// Pull the boundary's current answer once, e.g. at startup before the
    /// change stream is wired up.
    pub fn sync_from(&self, boundary: &dyn AuthBoundary) {
        self.session.on_auth_event(boundary.current_user());
    }

    pub fn update_last_activity(&self) {
        self.session.update_last_activity();
    }

    pub fn set_language(&self, code: &str) {
        self.preferences.set_language(code);
    }

    pub fn set_theme(&self, theme_id: &str) {
        self.preferences.set_theme(theme_id);
    }

    pub fn toggle_dark_mode(&self) {
        self.preferences.toggle_dark_mode();
    }

    pub fn set_system_preference(&self, mode: SystemPreference) {
        self.preferences.set_system_preference(mode);
    }

    /// Clear persisted preference keys and reinitialize the preference
    /// slices. The session is untouched — its lifecycle belongs to the
    /// auth boundary.
    pub fn reset_to_defaults(&self) {
        self.preferences.reset();
    }

    // ─── Export / import ─────────────────────────────────────────────────

    pub fn export_state(&self) -> StateExport {
        let snapshot = self.preferences.snapshot();
        StateExport {
            language: snapshot.language,
            theme: snapshot.theme,
        }
    }

    pub fn import_state(&self, state: StateExport) {
        self.preferences.restore(state.language, state.theme);
    }

    pub fn export_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(&self.export_state())?)
    }

    pub fn import_json(&self, json: &str) -> Result<(), StateError> {
        let state: StateExport = serde_json::from_str(json)?;
        self.import_state(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankshell_auth::Role;
    use bankshell_core::{FixedColorScheme, MemoryStorage, UserId};

    fn facade() -> GlobalStateFacade {
        let preferences = PreferenceStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(FixedColorScheme::default()),
        );
        GlobalStateFacade::new(Arc::new(SessionStore::new()), Arc::new(preferences))
    }

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: UserId::new(),
            email: "test@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role,
            avatar: None,
        }
    }

    struct StubAuth(Option<UserInfo>);

    impl AuthBoundary for StubAuth {
        fn is_authenticated(&self) -> bool {
            self.0.is_some()
        }

        fn current_user(&self) -> Option<UserInfo> {
            self.0.clone()
        }
    }

    #[test]
    fn starts_from_the_empty_default_state() {
        let facade = facade();
        let state = facade.global_state();
        assert!(!state.user_session.is_authenticated());
        assert!(state.user_session.user().is_none());
        assert_eq!(state.language.current.code, "en");
        assert_eq!(state.theme.current.id, "light");
    }

    #[test]
    fn auth_event_drives_the_derived_projections() {
        let facade = facade();
        facade.on_auth_event(Some(user(Role::Analyst)));

        assert!(facade.is_authenticated());
        assert_eq!(facade.user_display_name(), "Test User");
        assert!(facade.has_permission(&Permission::new("banking.read")));
        assert!(!facade.has_permission(&Permission::new("banking.write")));

        facade.on_auth_event(None);
        assert!(!facade.is_authenticated());
        assert_eq!(facade.user_display_name(), "");
        assert!(facade.user_permissions().is_empty());
    }

    #[test]
    fn sync_from_pulls_the_boundary_state() {
        let facade = facade();
        facade.sync_from(&StubAuth(Some(user(Role::Admin))));
        assert!(facade.is_authenticated());

        facade.sync_from(&StubAuth(None));
        assert!(!facade.is_authenticated());
    }

    #[test]
    fn language_and_theme_actions_delegate() {
        let facade = facade();
        facade.set_language("ar");
        assert!(facade.is_rtl_language());

        facade.set_theme("dark");
        assert!(facade.is_dark_mode());
        facade.toggle_dark_mode();
        assert!(!facade.is_dark_mode());
    }

    #[test]
    fn export_import_round_trips_preferences() {
        let source = facade();
        source.set_language("fr");
        source.set_theme("purple");
        source.set_system_preference(SystemPreference::Dark);

        let target = facade();
        target.import_state(source.export_state());

        assert_eq!(target.current_language().code, "fr");
        assert_eq!(target.current_theme().id, "purple");
        assert_eq!(target.system_theme_preference(), SystemPreference::Dark);
        assert_eq!(target.export_state(), source.export_state());
    }

    #[test]
    fn json_round_trip_matches_typed_round_trip() {
        let source = facade();
        source.set_language("de");
        source.set_theme("blue");

        let target = facade();
        target.import_json(&source.export_json().unwrap()).unwrap();
        assert_eq!(target.export_state(), source.export_state());
    }

    #[test]
    fn import_never_touches_the_session() {
        let source = facade();
        let target = facade();
        target.on_auth_event(Some(user(Role::Viewer)));

        target.import_state(source.export_state());
        assert!(target.is_authenticated());

        assert!(!source.export_json().unwrap().contains("user"));
    }

    #[test]
    fn import_rejects_malformed_json() {
        let facade = facade();
        assert!(facade.import_json("{not json").is_err());
    }

    #[test]
    fn reset_to_defaults_leaves_the_session_alone() {
        let facade = facade();
        facade.on_auth_event(Some(user(Role::Manager)));
        facade.set_language("es");
        facade.set_theme("dark");

        facade.reset_to_defaults();
        assert_eq!(facade.current_language().code, "en");
        assert_eq!(facade.current_theme().id, "light");
        assert!(facade.is_authenticated());
    }

    #[test]
    fn permission_checks_are_vacuous_on_empty_lists() {
        let facade = facade();
        assert!(facade.has_any_permission(&[]));
        assert!(facade.has_all_permissions(&[]));
    }
}
