//! Local UI chrome state (theme flag, auth modal visibility).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! navigation and modal can evolve independently of provider data. Nothing
//! here is persisted except the theme, which `util::dark_mode` owns.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::session::SessionState;
use crate::util::dark_mode::Theme;

/// UI state shared by the navigation bar, hero, pricing, and modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Render-only mirror of the `ThemeController` mode. Written after each
    /// controller change (hydration and toggle), never read back into it.
    pub theme: Theme,
    pub auth_modal_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn open_auth_modal(&mut self) {
        self.auth_modal_open = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.auth_modal_open = false;
    }

    /// Open the auth modal for a call-to-action, but only when signed out.
    /// Returns whether the modal was opened.
    pub fn request_auth(&mut self, session: &SessionState) -> bool {
        if session.is_signed_in() {
            return false;
        }
        self.open_auth_modal();
        true
    }
}
