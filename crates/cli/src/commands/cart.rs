//! Cart subcommands.
//!
//! Each invocation loads the session from the file store, runs one mutation,
//! and prints the freshly rendered panel and badge fragments plus any active
//! notifications, mirroring what the storefront page would swap in.

use std::error::Error;

use brewhaven_core::{ItemId, Price};
use brewhaven_storefront::cart::QuantityChange;
use brewhaven_storefront::config::StorefrontConfig;
use brewhaven_storefront::render::{HtmlRenderer, notification_html};
use brewhaven_storefront::{CartSession, CheckoutOutcome, FileStore};
use chrono::Utc;

type Session = CartSession<FileStore, HtmlRenderer>;

fn open_session() -> Result<Session, Box<dyn Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(store = %config.store_path.display(), "opening cart session");
    let store = FileStore::open(config.store_path);
    Ok(CartSession::load(
        store,
        HtmlRenderer::new(),
        config.checkout_url,
    )?)
}

fn print_views(session: &Session) {
    println!("{}", session.renderer().panel_html());
    println!("{}", session.renderer().badge_html());
}

fn print_notifications(session: &Session) {
    for notification in session.notifications().active_at(Utc::now()) {
        println!("{}", notification_html(notification));
    }
}

/// `bh-cli cart add`
pub fn add(id: &str, name: &str, price: Price, image: &str) -> Result<(), Box<dyn Error>> {
    let mut session = open_session()?;
    session.add_item(ItemId::from(id), name, price, image)?;
    print_views(&session);
    print_notifications(&session);
    Ok(())
}

/// `bh-cli cart remove`
pub fn remove(id: &str) -> Result<(), Box<dyn Error>> {
    let mut session = open_session()?;
    session.remove_item(&ItemId::from(id))?;
    print_views(&session);
    Ok(())
}

/// `bh-cli cart update`
pub fn update(id: &str, delta: i32) -> Result<(), Box<dyn Error>> {
    let mut session = open_session()?;
    match session.update_quantity(&ItemId::from(id), delta)? {
        QuantityChange::Updated(quantity) => {
            tracing::info!(item = id, quantity, "quantity updated");
        }
        QuantityChange::Removed => tracing::info!(item = id, "item removed"),
        QuantityChange::NotFound => tracing::warn!(item = id, "no such item in cart"),
    }
    print_views(&session);
    Ok(())
}

/// `bh-cli cart show`
pub fn show() -> Result<(), Box<dyn Error>> {
    let session = open_session()?;
    print_views(&session);
    Ok(())
}

/// `bh-cli cart checkout`
pub fn checkout() -> Result<(), Box<dyn Error>> {
    let mut session = open_session()?;
    match session.checkout() {
        CheckoutOutcome::Proceed { url } => println!("Proceeding to checkout: {url}"),
        CheckoutOutcome::EmptyCart => print_notifications(&session),
    }
    Ok(())
}
