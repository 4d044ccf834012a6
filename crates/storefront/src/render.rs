//! Rendering surfaces for the cart.
//!
//! The session never touches markup directly; it hands fresh view models to a
//! [`RenderTarget`] after every mutation. [`HtmlRenderer`] is the production
//! target, producing the same fragments the storefront page swaps in: the
//! cart panel, the count badge, and notification overlays.

use askama::Template;

use crate::notify::Notification;
use crate::views::{BadgeView, CartView};

/// A surface the session redraws after every cart mutation.
pub trait RenderTarget {
    /// Redraw the cart panel from the given view.
    fn render_panel(&mut self, cart: &CartView);

    /// Redraw the item-count badge from the given view.
    fn render_badge(&mut self, badge: &BadgeView);
}

/// Cart panel fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate<'a> {
    badge: &'a BadgeView,
}

/// Notification overlay fragment template.
#[derive(Template)]
#[template(path = "partials/notification.html")]
struct NotificationTemplate<'a> {
    css_class: &'static str,
    icon: &'static str,
    message: &'a str,
}

/// Askama-backed render target.
///
/// Retains the most recently rendered panel and badge markup so a host can
/// pick them up after a mutation completes.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    panel: String,
    badge: String,
}

impl HtmlRenderer {
    /// Create a renderer with no markup yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered cart panel fragment.
    #[must_use]
    pub fn panel_html(&self) -> &str {
        &self.panel
    }

    /// The most recently rendered badge fragment.
    #[must_use]
    pub fn badge_html(&self) -> &str {
        &self.badge
    }
}

impl RenderTarget for HtmlRenderer {
    fn render_panel(&mut self, cart: &CartView) {
        match (CartItemsTemplate { cart }).render() {
            Ok(html) => self.panel = html,
            Err(error) => tracing::error!(%error, "failed to render cart panel"),
        }
    }

    fn render_badge(&mut self, badge: &BadgeView) {
        match (CartCountTemplate { badge }).render() {
            Ok(html) => self.badge = html,
            Err(error) => tracing::error!(%error, "failed to render cart badge"),
        }
    }
}

/// Render a notification overlay fragment.
///
/// Falls back to the bare message if templating fails.
#[must_use]
pub fn notification_html(notification: &Notification) -> String {
    let template = NotificationTemplate {
        css_class: notification.kind.css_class(),
        icon: notification.kind.icon(),
        message: &notification.message,
    };
    template
        .render()
        .unwrap_or_else(|_| notification.message.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brewhaven_core::{ItemId, Price};

    use super::*;
    use crate::cart::Cart;
    use crate::notify::{Notification, NotificationKind};

    #[test]
    fn test_panel_empty_placeholder() {
        let mut renderer = HtmlRenderer::new();
        renderer.render_panel(&CartView::empty());

        assert!(renderer.panel_html().contains("Your cart is empty"));
        assert!(renderer.panel_html().contains(">0.00</span>"));
    }

    #[test]
    fn test_panel_lists_items_with_controls() {
        let mut cart = Cart::new();
        cart.add(
            ItemId::from("latte-1"),
            "Latte",
            Price::from_cents(450).unwrap(),
            "latte.jpg",
        );

        let mut renderer = HtmlRenderer::new();
        renderer.render_panel(&CartView::from(&cart));
        let html = renderer.panel_html();

        assert!(html.contains("Latte"));
        assert!(html.contains("$4.50"));
        assert!(html.contains("data-item-id=\"latte-1\""));
        assert!(html.contains("data-action=\"increment\""));
        assert!(html.contains("data-action=\"decrement\""));
        assert!(html.contains("data-action=\"remove\""));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_panel_escapes_markup_in_names() {
        let mut cart = Cart::new();
        cart.add(
            ItemId::from("x"),
            "<script>alert(1)</script>",
            Price::from_cents(100).unwrap(),
            "x.jpg",
        );

        let mut renderer = HtmlRenderer::new();
        renderer.render_panel(&CartView::from(&cart));

        assert!(!renderer.panel_html().contains("<script>"));
    }

    #[test]
    fn test_badge_hidden_at_zero() {
        let mut renderer = HtmlRenderer::new();
        renderer.render_badge(&BadgeView { count: 0 });
        assert!(renderer.badge_html().contains("display: none"));

        renderer.render_badge(&BadgeView { count: 3 });
        assert!(renderer.badge_html().contains(">3</span>"));
        assert!(!renderer.badge_html().contains("display: none"));
    }

    #[test]
    fn test_notification_markup() {
        let success = Notification::new(NotificationKind::Success, "Latte added to cart!");
        let html = notification_html(&success);
        assert!(html.contains("alert-success"));
        assert!(html.contains("fa-check-circle"));
        assert!(html.contains("Latte added to cart!"));

        let error = Notification::new(NotificationKind::Error, "Your cart is empty!");
        assert!(notification_html(&error).contains("alert-danger"));
    }
}
