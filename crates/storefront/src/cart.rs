//! The cart data model.
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s, at most one per item
//! ID, with every quantity at least 1. Order is insertion order and is
//! preserved for stable rendering.

use brewhaven_core::{ItemId, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable product identifier, unique within a cart.
    pub id: ItemId,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Display asset reference (URL or path).
    pub image: String,
    /// Unit count, always >= 1 while the item is present.
    pub quantity: u32,
}

impl LineItem {
    /// Line total (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// Outcome of [`Cart::adjust_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item remains in the cart with the given quantity.
    Updated(u32),
    /// The adjustment took the quantity to zero or below; the item was
    /// removed as part of the same operation.
    Removed,
    /// No item with that ID exists; nothing changed.
    NotFound,
}

/// An ordered collection of line items for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If an item with this ID is already present its quantity increments by
    /// one and the stored name, price, and image are left untouched, even if
    /// the arguments differ. Otherwise a new item is appended with quantity 1.
    ///
    /// Returns `true` if the item was newly inserted.
    pub fn add(&mut self, id: ItemId, name: &str, price: Price, image: &str) -> bool {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            return false;
        }

        self.items.push(LineItem {
            id,
            name: name.to_owned(),
            price,
            image: image.to_owned(),
            quantity: 1,
        });
        true
    }

    /// Remove the item with the given ID.
    ///
    /// Returns `true` if an item was removed; removing an absent ID is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Add a signed delta to an item's quantity.
    ///
    /// A resulting quantity of zero or below removes the item entirely; the
    /// cart never holds an item with a non-positive quantity. The positive
    /// side saturates at `u32::MAX`; only a non-positive result removes.
    pub fn adjust_quantity(&mut self, id: &ItemId, delta: i32) -> QuantityChange {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return QuantityChange::NotFound;
        };

        let updated = i64::from(item.quantity) + i64::from(delta);
        if updated <= 0 {
            self.remove(id);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        item.quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Cart total as sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total unit count across all items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Price {
        Price::from_cents(cents).unwrap()
    }

    #[test]
    fn test_add_distinct_ids_appends_in_order() {
        let mut cart = Cart::new();
        assert!(cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg"));
        assert!(cart.add(ItemId::from("b"), "Mocha", price(525), "mocha.jpg"));

        assert_eq!(cart.len(), 2);
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_repeat_add_increments_quantity_only() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        // Conflicting metadata on a repeat add is ignored; the ID is the sole
        // identity key.
        assert!(!cart.add(ItemId::from("a"), "Renamed", price(999), "other.jpg"));

        let item = cart.get(&ItemId::from("a")).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.name, "Latte");
        assert_eq!(item.price, price(450));
        assert_eq!(item.image, "latte.jpg");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");

        assert!(cart.remove(&ItemId::from("a")));
        let snapshot = cart.clone();
        assert!(!cart.remove(&ItemId::from("a")));
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_adjust_quantity_updates() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");

        assert_eq!(
            cart.adjust_quantity(&ItemId::from("a"), 2),
            QuantityChange::Updated(3)
        );
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_adjust_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");

        assert_eq!(
            cart.adjust_quantity(&ItemId::from("a"), -2),
            QuantityChange::Removed
        );
        assert!(cart.get(&ItemId::from("a")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");

        assert_eq!(
            cart.adjust_quantity(&ItemId::from("a"), -5),
            QuantityChange::Removed
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_saturates_at_max() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        cart.adjust_quantity(&ItemId::from("a"), i32::MAX);
        cart.adjust_quantity(&ItemId::from("a"), i32::MAX);
        assert_eq!(
            cart.get(&ItemId::from("a")).unwrap().quantity,
            u32::MAX
        );

        // A positive delta past the ceiling keeps the item at the ceiling;
        // it must never turn into a removal.
        assert_eq!(
            cart.adjust_quantity(&ItemId::from("a"), 1),
            QuantityChange::Updated(u32::MAX)
        );
        assert_eq!(cart.get(&ItemId::from("a")).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_adjust_quantity_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        let snapshot = cart.clone();

        assert_eq!(
            cart.adjust_quantity(&ItemId::from("ghost"), 1),
            QuantityChange::NotFound
        );
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_subtotal_and_unit_count() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");
        cart.add(ItemId::from("b"), "Scone", price(300), "scone.jpg");

        assert_eq!(cart.subtotal(), Decimal::new(1200, 2));
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn test_serde_preserves_order() {
        let mut cart = Cart::new();
        cart.add(ItemId::from("b"), "Mocha", price(525), "mocha.jpg");
        cart.add(ItemId::from("a"), "Latte", price(450), "latte.jpg");

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
