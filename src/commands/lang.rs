use std::collections::HashMap;

use serde::Serialize;
use tauri::AppHandle;

use crate::i18n::{self, Language};
use crate::storage::StorageExt;

/// Everything the webview needs to swap the visible text layer: the active
/// language, its direction, and the full string table.
#[derive(Debug, Serialize)]
pub struct TranslationBundle {
    pub lang: Language,
    pub rtl: bool,
    pub strings: HashMap<&'static str, &'static str>,
}

fn bundle(lang: Language) -> TranslationBundle {
    TranslationBundle {
        lang,
        rtl: lang.is_rtl(),
        strings: i18n::table(lang).iter().copied().collect(),
    }
}

#[tauri::command]
pub fn get_language(app: AppHandle) -> Result<Language, String> {
    Ok(app.storage().load_language())
}

#[tauri::command]
pub fn set_language(app: AppHandle, lang: Language) -> Result<TranslationBundle, String> {
    app.storage().save_language(lang);

    Ok(bundle(lang))
}

#[tauri::command]
pub fn toggle_language(app: AppHandle) -> Result<TranslationBundle, String> {
    let next = app.storage().load_language().toggled();
    app.storage().save_language(next);

    Ok(bundle(next))
}

#[tauri::command]
pub fn get_translations(app: AppHandle, lang: Option<Language>) -> Result<TranslationBundle, String> {
    let lang = lang.unwrap_or_else(|| app.storage().load_language());

    Ok(bundle(lang))
}
