//! OS color-scheme boundary.
//!
//! When the theme system-preference mode is `auto`, the effective theme is
//! resolved against the OS-reported "prefers dark" signal at read time.
//! The probe is re-queried on every read so a live OS change is picked up
//! without any stored state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Host-provided "prefers dark color scheme" query.
///
/// Browser hosts back this with `matchMedia('(prefers-color-scheme: dark)')`;
/// non-browser contexts use [`FixedColorScheme`] (defaults to light).
pub trait ColorSchemeProbe: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// A probe with an explicitly set answer.
///
/// Doubles as the no-signal fallback (`Default` reports light) and as a
/// switchable stub for tests exercising live preference changes.
#[derive(Debug, Default)]
pub struct FixedColorScheme {
    prefers_dark: AtomicBool,
}

impl FixedColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
        }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.store(prefers_dark, Ordering::Relaxed);
    }
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::Relaxed)
    }
}
