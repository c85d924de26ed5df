use tauri::{AppHandle, Manager};

use crate::cart::{Cart, CartState};
use crate::catalog;
use crate::models::{CartItem, CartView};
use crate::storage::StorageExt;

/// Every cart mutation follows the same convention: mutate, persist the
/// full snapshot (fail-open), and hand the webview a fresh view to
/// re-render from.
fn mutate(app: &AppHandle, op: impl FnOnce(&mut Cart)) -> Result<CartView, String> {
    let state = app.state::<CartState>();
    let mut cart = state.cart.lock().map_err(|e| e.to_string())?;

    op(&mut cart);
    app.storage().save_cart(cart.items());

    Ok(CartView::from(&*cart))
}

#[tauri::command]
pub fn get_cart(app: AppHandle) -> Result<CartView, String> {
    let state = app.state::<CartState>();
    let cart = state.cart.lock().map_err(|e| e.to_string())?;

    Ok(CartView::from(&*cart))
}

/// Add one unit of a catalog product, merging into an existing line. The
/// name and price are snapshotted in the active language at add time.
#[tauri::command]
pub fn add_to_cart(app: AppHandle, product_id: i64) -> Result<CartView, String> {
    let product = catalog::find(product_id).ok_or_else(|| "Product not found".to_string())?;
    let localized = product.localized(app.storage().load_language());

    mutate(&app, |cart| {
        cart.add_or_increment(CartItem {
            id: product.id,
            name: localized.name,
            price: product.price,
            calories: product.calories,
            quantity: 1,
            image: localized.image,
        })
    })
}

#[tauri::command]
pub fn increase_quantity(app: AppHandle, product_id: i64) -> Result<CartView, String> {
    mutate(&app, |cart| cart.increment(product_id))
}

/// Stepping down stops at quantity 1; the remove action is the only way to
/// take a line out of the cart.
#[tauri::command]
pub fn decrease_quantity(app: AppHandle, product_id: i64) -> Result<CartView, String> {
    mutate(&app, |cart| cart.decrement(product_id))
}

#[tauri::command]
pub fn remove_from_cart(app: AppHandle, product_id: i64) -> Result<CartView, String> {
    mutate(&app, |cart| cart.remove(product_id))
}
