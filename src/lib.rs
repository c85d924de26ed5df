mod cart;
mod catalog;
mod commands;
mod i18n;
mod models;
mod storage;


use cart::{Cart, CartState};
use commands::{cart as cart_commands, catalog as catalog_commands, checkout, lang};
use storage::Storage;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Restore the persisted cart before the first render
            let storage = Storage::new(app.handle())?;
            let items = storage.restore_cart();
            log::info!("restored cart with {} line(s)", items.len());

            app.manage(storage);
            app.manage(CartState::new(Cart::from_items(items)));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog
            catalog_commands::get_products,
            // Cart
            cart_commands::get_cart,
            cart_commands::add_to_cart,
            cart_commands::increase_quantity,
            cart_commands::decrease_quantity,
            cart_commands::remove_from_cart,
            // Checkout
            checkout::submit_order,
            // Language
            lang::get_language,
            lang::set_language,
            lang::toggle_language,
            lang::get_translations,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
