//! The cart session: the only sanctioned mutation entry points.
//!
//! A [`CartSession`] owns the authoritative in-memory cart, its backing
//! store, the notification queue, and a render target. It is constructed once
//! at startup from persisted data. Every mutation fully persists the cart and
//! redraws both views before control returns; operations never interleave in
//! the single-threaded event model.

use brewhaven_core::{ItemId, Price};

use crate::cart::{Cart, QuantityChange};
use crate::notify::{NotificationKind, NotificationQueue};
use crate::render::RenderTarget;
use crate::store::{CART_KEY, LocalStore, StoreError};
use crate::views::{BadgeView, CartView};

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart has items; navigate to the checkout target.
    Proceed {
        /// Where the host should navigate.
        url: String,
    },
    /// The cart is empty; an error notification was emitted instead.
    EmptyCart,
}

/// An owned cart store bound to a persistence backend and a render target.
pub struct CartSession<S, R> {
    cart: Cart,
    store: S,
    renderer: R,
    notifications: NotificationQueue,
    checkout_url: String,
}

impl<S: LocalStore, R: RenderTarget> CartSession<S, R> {
    /// Load the session from the store's [`CART_KEY`] entry.
    ///
    /// An absent entry starts an empty cart. So does an unparseable one,
    /// with a warning: corrupt persisted state must never prevent startup.
    /// Both views are drawn once from the loaded cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store itself cannot be read.
    pub fn load(store: S, renderer: R, checkout_url: impl Into<String>) -> Result<Self, StoreError> {
        let cart = match store.get(CART_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "persisted cart is unreadable; starting empty");
                Cart::new()
            }),
            None => Cart::new(),
        };

        let mut session = Self {
            cart,
            store,
            renderer,
            notifications: NotificationQueue::new(),
            checkout_url: checkout_url.into(),
        };
        session.render();
        Ok(session)
    }

    /// Add one unit of a product to the cart.
    ///
    /// A repeat add for an existing ID only increments its quantity; the
    /// stored name, price, and image stay as first seen. Emits a success
    /// notification naming the item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: &str,
        price: Price,
        image: &str,
    ) -> Result<(), StoreError> {
        let inserted = self.cart.add(id, name, price, image);
        self.persist()?;
        self.render();

        self.notifications
            .push(NotificationKind::Success, format!("{name} added to cart!"));
        tracing::info!(item = name, inserted, "item added to cart");
        Ok(())
    }

    /// Remove an item from the cart. Removing an absent ID is a no-op, not
    /// an error. No notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<(), StoreError> {
        let removed = self.cart.remove(id);
        self.persist()?;
        self.render();

        if removed {
            tracing::info!(item = %id, "item removed from cart");
        }
        Ok(())
    }

    /// Add a signed delta to an item's quantity.
    ///
    /// A resulting quantity of zero or below removes the item entirely, as a
    /// single logical step with one persist and one redraw. An unknown ID
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn update_quantity(
        &mut self,
        id: &ItemId,
        delta: i32,
    ) -> Result<QuantityChange, StoreError> {
        let change = self.cart.adjust_quantity(id, delta);
        if change == QuantityChange::NotFound {
            return Ok(change);
        }

        self.persist()?;
        self.render();

        if change == QuantityChange::Removed {
            tracing::info!(item = %id, "quantity reached zero; item removed");
        }
        Ok(change)
    }

    /// Attempt to move to checkout.
    ///
    /// A non-empty cart yields the configured checkout target. An empty cart
    /// emits an error notification and stays put.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            self.notifications
                .push(NotificationKind::Error, "Your cart is empty!");
            return CheckoutOutcome::EmptyCart;
        }

        CheckoutOutcome::Proceed {
            url: self.checkout_url.clone(),
        }
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The notification queue.
    #[must_use]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Mutable access to the notification queue (for sweeping).
    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// The render target.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Serialize the whole cart and overwrite the store entry.
    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.cart)?;
        self.store.set(CART_KEY, &raw)
    }

    /// Redraw both views from the current cart.
    fn render(&mut self) {
        self.renderer.render_panel(&CartView::from(&self.cart));
        self.renderer.render_badge(&BadgeView::from(&self.cart));
    }
}
