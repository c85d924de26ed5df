use tauri::AppHandle;

use crate::catalog::CATALOG;
use crate::models::ProductView;
use crate::storage::StorageExt;

#[tauri::command]
pub fn get_products(app: AppHandle) -> Result<Vec<ProductView>, String> {
    let lang = app.storage().load_language();

    Ok(CATALOG.iter().map(|p| p.localized(lang)).collect())
}
