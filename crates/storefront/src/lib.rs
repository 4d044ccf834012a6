//! Brew Haven Storefront - cart store and presentation layer.
//!
//! This crate holds the authoritative shopping cart for a storefront session:
//! an ordered list of line items, mirrored into a local key-value store after
//! every mutation, plus the read-only projections the UI consumes (cart panel
//! and item-count badge), transient notifications, the checkout guard, and
//! form-field validation helpers.
//!
//! # Architecture
//!
//! - [`cart`] - The [`cart::Cart`] data model and its invariants
//! - [`store`] - The [`store::LocalStore`] persistence seam (file or memory)
//! - [`session`] - [`session::CartSession`], the only sanctioned mutation
//!   entry points
//! - [`views`] - Pure projections of the cart for rendering
//! - [`render`] - The [`render::RenderTarget`] seam and the Askama-backed
//!   HTML renderer
//! - [`notify`] - Transient, auto-dismissing notifications
//! - [`forms`] - Form-field validation
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod forms;
pub mod notify;
pub mod render;
pub mod session;
pub mod store;
pub mod views;

pub use cart::{Cart, LineItem, QuantityChange};
pub use session::{CartSession, CheckoutOutcome};
pub use store::{CART_KEY, FileStore, LocalStore, MemoryStore, StoreError};
