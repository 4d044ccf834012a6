//! Brew Haven Core - Shared types library.
//!
//! This crate provides common types used across all Brew Haven components:
//! - `storefront` - Cart store, rendering, and UX helpers
//! - `cli` - Command-line front end for the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe item IDs, prices, emails, and
//!   phone numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
