//! Storage and inline-config readers.

use crate::core::config::{CONFIG_SCRIPT_ID, EffectsConfig};
use crate::core::theme::{THEME_KEY, ThemeMode};
use gloo::console;
use web_sys::{Document, Window};

/// Read the persisted theme. Storage that is disabled or throws reads as
/// "no preference".
pub(crate) fn load_theme(window: &Window) -> ThemeMode {
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    ThemeMode::from_stored(stored.as_deref())
}

pub(crate) fn apply_theme(document: &Document, theme: ThemeMode) {
    if let Some(root) = document.document_element() {
        theme.apply(&root);
    }
}

/// Resolve the effects config, falling back to defaults on a bad block.
pub(crate) fn load_config(document: &Document) -> EffectsConfig {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    match EffectsConfig::from_override(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("page-effects config ignored", err.to_string());
            EffectsConfig::default()
        }
    }
}
