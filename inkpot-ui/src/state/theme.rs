//! Browser Theme Bindings
//!
//! `localStorage` as the preference store and the `<html>` class list as
//! the presentation attribute. Both fail soft: the controller falls back
//! to in-memory state when storage is refused.

use leptos::*;

use inkpot::config::ThemeConfig;
use inkpot::theme::{
    PreferenceStore, Presentation, StorageError, StorageResult, ThemeController, ThemeMode,
};

/// Preference store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Toggles a class on the document root element
#[derive(Debug, Clone)]
pub struct DocumentPresentation {
    class: String,
}

impl DocumentPresentation {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
        }
    }
}

impl Presentation for DocumentPresentation {
    fn apply(&self, mode: ThemeMode) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            tracing::warn!("No document element, theme class not applied");
            return;
        };

        let classes = root.class_list();
        let result = if mode.is_dark() {
            classes.add_1(&self.class)
        } else {
            classes.remove_1(&self.class)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to apply theme class: {:?}", e);
        }
    }
}

/// Create the theme controller, apply the stored mode and provide it to
/// the component tree
pub fn provide_theme(config: &ThemeConfig) -> ThemeController {
    let theme = ThemeController::new(
        LocalStorageStore,
        DocumentPresentation::new(&config.dark_class),
        config,
    );

    // Other tabs writing the same key fire `storage` events here.
    let key = theme.storage_key().to_string();
    let observed = theme.clone();
    let listener = window_event_listener(ev::storage, move |event: web_sys::StorageEvent| {
        match event.key() {
            Some(changed) if changed == key => observed.sync_external(event.new_value().as_deref()),
            // `localStorage.clear()` reports no key
            None => observed.sync_external(None),
            Some(_) => {}
        }
    });
    on_cleanup(move || listener.remove());

    provide_context(theme.clone());
    theme
}
