//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are opaque strings. Fresh IDs are random UUIDs, but any string loaded
//! from configuration is accepted as-is, which lets the protected catch-all
//! category keep its fixed `default-other` identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4()))
            }

            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");
define_id!(BudgetGoalId, "bgl-");
define_id!(SavingsGoalId, "sgl-");

/// Identifier of the permanent catch-all category
pub const DEFAULT_OTHER_CATEGORY_ID: &str = "default-other";

impl CategoryId {
    /// The ID of the protected "Other" category
    pub fn default_other() -> Self {
        Self::from_string(DEFAULT_OTHER_CATEGORY_ID)
    }

    /// Check if this is the protected "Other" category
    pub fn is_default_other(&self) -> bool {
        self.0 == DEFAULT_OTHER_CATEGORY_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation_is_unique() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("txn-"));
    }

    #[test]
    fn test_default_other() {
        let id = CategoryId::default_other();
        assert!(id.is_default_other());
        assert_eq!(id.to_string(), "default-other");
        assert!(!CategoryId::new().is_default_other());
    }

    #[test]
    fn test_id_serialization() {
        let id = SavingsGoalId::from_string("2024-06-01T10:00:00.000Z");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2024-06-01T10:00:00.000Z\"");
        let deserialized: SavingsGoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
