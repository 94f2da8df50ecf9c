//! `bankshell-state` — reactive global-state stores for the application
//! shell.
//!
//! Two stores own all mutable state: [`SessionStore`] (the authentication
//! snapshot, fed exclusively by the auth boundary) and [`PreferenceStore`]
//! (language + theme, persisted to client storage and rehydrated on
//! construction). [`GlobalStateFacade`] composes the two into one
//! observable aggregate with derived projections and the mutation API.
//!
//! Stores are constructed once at application start and passed by handle
//! to consumers; mutation methods are the only legal write path. Observers
//! subscribe with a callback and receive only fully-formed snapshots —
//! state is swapped under a lock and published after the lock is released.

pub mod facade;
pub mod language;
pub mod listeners;
pub mod preferences;
pub mod session_store;
pub mod theme;

pub use facade::{GlobalState, GlobalStateFacade, StateError, StateExport};
pub use language::{Language, LanguageState, default_languages};
pub use listeners::{Listeners, SubscriptionHandle};
pub use preferences::{LanguageTicket, PreferenceSnapshot, PreferenceStore, keys};
pub use session_store::SessionStore;
pub use theme::{SystemPreference, Theme, ThemeState, default_themes};
