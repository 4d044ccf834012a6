//! CLI command implementations.

pub mod cart;
pub mod phone;
