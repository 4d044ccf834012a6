//! Newtype ID for type-safe item references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, stable identifier for a product in the cart.
///
/// IDs are caller-supplied strings (e.g. `"espresso-classic"`). The cart holds
/// at most one line item per ID; equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ItemId::new("latte-classic");
        assert_eq!(format!("{id}"), "latte-classic");
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(ItemId::from("a"), ItemId::new("a"));
        assert_ne!(ItemId::from("a"), ItemId::from("A"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ItemId::new("mocha");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"mocha\"");

        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
