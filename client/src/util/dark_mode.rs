//! Theme preference: initialization, toggle, and persistence.
//!
//! Reads the preference from a [`KeyValueStore`] under [`STORAGE_KEY`] and
//! reflects it onto a [`PresentationRoot`] (the `<html>` element in the
//! browser). Every change is applied to the root and persisted in the same
//! call.
//!
//! TRADE-OFFS
//! ==========
//! Only the exact stored value `"dark"` selects dark mode; absence or any
//! other value falls back to light rather than to the system preference.
//! Initialization applies the mode but does not write storage, so a visitor
//! who never toggles leaves no key behind.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "theme";

/// Light or dark presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference; anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Document-wide presentation mode switch.
pub trait PresentationRoot {
    fn set_dark(&self, dark: bool);
}

/// The `<html>` element: toggles the `dark` class and the `data-theme`
/// attribute. No-op outside `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl PresentationRoot for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.class_list().toggle_with_force("dark", dark);
                let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dark;
        }
    }
}

/// Owns the theme flag together with its storage and presentation target.
#[derive(Debug)]
pub struct ThemeController<S, R> {
    store: S,
    root: R,
    theme: Theme,
}

impl<S: KeyValueStore, R: PresentationRoot> ThemeController<S, R> {
    /// Read the persisted preference (light when absent) and apply it.
    pub fn init(store: S, root: R) -> Self {
        let theme = Theme::from_stored(store.get(STORAGE_KEY).as_deref());
        root.set_dark(theme.is_dark());
        Self { store, root, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the mode, apply it, and persist it. Returns the new mode.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Switch to `theme`, apply it, and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.root.set_dark(theme.is_dark());
        self.store.set(STORAGE_KEY, theme.as_str());
    }
}
