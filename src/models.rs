use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// Payment is collected in cash when the order is delivered; there is no
/// online payment step.
pub const PAYMENT_METHOD: &str = "cash-on-delivery";

/// Two-decimal amount with the fixed riyal suffix, e.g. "45.00 ر.س".
pub fn currency(value: f64) -> String {
    format!("{value:.2} ر.س")
}

/// One product line in the cart. Name and price are snapshotted from the
/// catalog at add time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub calories: i32,
    pub quantity: i32,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub payment_method: String,
    pub created_at: String,
}

/// Localized product data for the storefront grid.
#[derive(Debug, Serialize, Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_display: String,
    pub calories: i32,
    pub image: String,
}

/// One rendered cart line.
#[derive(Debug, Serialize, Clone)]
pub struct CartLineView {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub calories: i32,
    pub quantity: i32,
    pub image: String,
    pub line_total: String,
}

/// Cart display data for the drawer and the badge. `is_empty` drives the
/// checkout button guard.
#[derive(Debug, Serialize, Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: f64,
    pub total_display: String,
    pub item_count: i32,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLineView::from).collect(),
            total: cart.total(),
            total_display: currency(cart.total()),
            item_count: cart.item_count(),
            is_empty: cart.is_empty(),
        }
    }
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            calories: item.calories,
            quantity: item.quantity,
            image: item.image.clone(),
            line_total: currency(item.price * f64::from(item.quantity)),
        }
    }
}
