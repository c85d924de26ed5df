use tauri::{AppHandle, Manager};

use crate::cart::{Cart, CartState};
use crate::models::{CheckoutDetails, Order, PAYMENT_METHOD};
use crate::storage::{Storage, StorageExt};

/// Build the order record from the current cart, write it to the transient
/// store, and empty the cart. The order is never read back; the caller
/// announces the confirmation. No retry and no server acknowledgement —
/// this is a simulated cash-on-delivery checkout.
pub fn place_order(
    cart: &mut Cart,
    storage: &Storage,
    details: &CheckoutDetails,
) -> Result<Order, String> {
    if cart.is_empty() {
        return Err("Cart is empty".to_string());
    }

    let customer_name = details.full_name.trim();
    let phone = details.phone.trim();
    let address = details.address.trim();

    if customer_name.is_empty() || phone.is_empty() || address.is_empty() {
        return Err("Missing checkout details".to_string());
    }

    let order = Order {
        customer_name: customer_name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        items: cart.items().to_vec(),
        total: cart.total(),
        payment_method: PAYMENT_METHOD.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    storage.save_last_order(&order);

    // Emptied, not deleted: the durable key keeps an empty snapshot
    cart.clear();
    storage.save_cart(cart.items());

    Ok(order)
}

#[tauri::command]
pub fn submit_order(app: AppHandle, details: CheckoutDetails) -> Result<Order, String> {
    let state = app.state::<CartState>();
    let mut cart = state.cart.lock().map_err(|e| e.to_string())?;

    place_order(&mut cart, app.storage(), &details)
}
