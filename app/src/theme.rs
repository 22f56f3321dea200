//! Theme persistence in `localStorage` and the toggle control.

use folio_core::{
    CoreError, PreferenceStore, Theme, ThemeState, config::ThemeConfig, error::Result,
};
use leptos::prelude::*;

/// `window.localStorage`, when the browser allows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            local_storage().ok_or_else(|| CoreError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| CoreError::storage(format!("{err:?}")))
    }
}

/// Shared handle to the theme. The toggle button is the only writer.
#[derive(Debug, Clone, Copy)]
pub struct ThemeHandle {
    state: RwSignal<ThemeState<BrowserStorage>>,
}

impl ThemeHandle {
    /// Restore the stored theme, keep the document root in sync with it and
    /// provide the handle as context.
    pub fn install(config: &ThemeConfig) -> Self {
        let state = ThemeState::restore(BrowserStorage, config.storage_key.clone(), config.default);
        let handle = Self {
            state: RwSignal::new(state),
        };

        Effect::new(move |_| apply(handle.current()));
        provide_context(handle);
        handle
    }

    pub fn current(&self) -> Theme {
        self.state.with(ThemeState::current)
    }

    pub fn toggle(&self) {
        self.state.update(|state| {
            state.toggle();
        });
    }
}

fn apply(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("could not apply {theme} theme: {err:?}");
    }
}

#[component]
pub fn ThemeToggle(theme: ThemeHandle) -> impl IntoView {
    view! {
      <button
        type="button"
        class="folio-theme-toggle"
        aria-label=move || format!("Switch to {} mode", theme.current().toggled())
        on:click=move |_| theme.toggle()
      >
        {move || if theme.current().is_dark() { "☀" } else { "☾" }}
      </button>
    }
}
