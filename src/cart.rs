use std::sync::Mutex;

use crate::models::CartItem;

/// In-memory cart: an ordered list of lines, at most one per product id.
/// Persistence and rendering are driven by the command layer after each
/// mutation; the cart itself holds no side effects.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cart from a restored snapshot.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a line for `item`, or bump the quantity if its id is already in
    /// the cart. Insertion order is preserved for display.
    pub fn add_or_increment(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|it| it.id == item.id) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(CartItem { quantity: 1, ..item }),
        }
    }

    pub fn increment(&mut self, id: i64) {
        if let Some(item) = self.items.iter_mut().find(|it| it.id == id) {
            item.quantity += 1;
        }
    }

    /// Quantities never drop below 1; removing a line is a separate,
    /// explicit action.
    pub fn decrement(&mut self, id: i64) {
        if let Some(item) = self.items.iter_mut().find(|it| it.id == id) {
            item.quantity = (item.quantity - 1).max(1);
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.items.retain(|it| it.id != id);
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|it| it.price * f64::from(it.quantity))
            .sum()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|it| it.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Managed cart state, mutated only from command handlers.
pub struct CartState {
    pub cart: Mutex<Cart>,
}

impl CartState {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: Mutex::new(cart),
        }
    }
}
