//! Light/dark theme state with a persisted preference.
//!
//! [`ThemeState`] is the only place the theme changes. Readers take the
//! current [`Theme`]; the toggle control calls [`ThemeState::toggle`], which
//! flips the value and writes it through a [`PreferenceStore`].

use std::{cell::RefCell, collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage and used as the CSS class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::storage(format!("unknown theme value {other:?}"))),
        }
    }
}

/// Key/value storage for user preferences.
pub trait PreferenceStore {
    /// Read a stored value.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist a value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeState<S> {
    current: Theme,
    key: String,
    storage: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Restore the persisted theme, falling back to `default` when nothing
    /// usable is stored.
    pub fn restore(storage: S, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let current = match storage.load(&key) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring stored theme preference");
                default
            }),
            None => default,
        };

        Self {
            current,
            key,
            storage,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// A failed write is logged; the in-memory theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.storage.save(&self.key, self.current.as_str()) {
            tracing::warn!(%err, theme = %self.current, "failed to persist theme");
        }
        tracing::debug!(theme = %self.current, "theme toggled");
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CoreError::storage("read only"))
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_restore_defaults_to_light_when_empty() {
        let state = ThemeState::restore(MemoryPreferences::new(), "theme", Theme::Light);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn test_restore_reads_persisted_value() {
        let store = MemoryPreferences::with_entry("theme", "dark");
        let state = ThemeState::restore(store, "theme", Theme::Light);
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn test_restore_ignores_garbage() {
        let store = MemoryPreferences::with_entry("theme", "sepia");
        let state = ThemeState::restore(store, "theme", Theme::Light);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut state = ThemeState::restore(MemoryPreferences::new(), "theme", Theme::Light);

        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.storage().load("theme").as_deref(), Some("dark"));

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.storage().load("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let mut state = ThemeState::restore(ReadOnlyStore, "theme", Theme::Light);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn test_theme_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }

        let w: Wrapper = toml::from_str("theme = \"dark\"").expect("parse");
        assert_eq!(w.theme, Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
