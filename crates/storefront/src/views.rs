//! Pure view projections of the cart.
//!
//! These types carry everything a rendering surface needs, preformatted, so
//! the cart store can be tested without any rendering technology present.
//! They hold no state of their own and are recomputed from the cart after
//! every mutation.

use rust_decimal::Decimal;

use crate::cart::{Cart, LineItem};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    /// Unit price with currency symbol, e.g. `"$4.50"`.
    pub price: String,
    /// Line total with currency symbol, e.g. `"$9.00"`.
    pub line_price: String,
    pub image: String,
    pub quantity: u32,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Cart total formatted to two decimal places, without a currency symbol
    /// (the panel markup supplies it), e.g. `"4.50"`.
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// The zero-item cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_amount(Decimal::ZERO),
            item_count: 0,
        }
    }
}

/// Item-count badge display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    pub count: u32,
}

impl BadgeView {
    /// The badge disappears entirely at zero items.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.count == 0
    }
}

/// Format a decimal amount to two places, e.g. `"4.50"`.
fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Format a decimal amount as a price string, e.g. `"$4.50"`.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_amount(cart.subtotal()),
            item_count: cart.unit_count(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: format_price(item.price.amount()),
            line_price: format_price(item.line_total()),
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

impl From<&Cart> for BadgeView {
    fn from(cart: &Cart) -> Self {
        Self {
            count: cart.unit_count(),
        }
    }
}
