//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a caller-supplied product id from being passed where a derived
//! cart line id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::LineSize;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product identifier, supplied by the page.
    ProductId
);
define_id!(
    /// Cart line identifier: `<product id>-<size tag>`.
    LineId
);

impl LineId {
    /// Derive the line id for a product/size pair.
    ///
    /// ```
    /// use cart_core::{LineId, LineSize, ProductId};
    ///
    /// let id = LineId::derive(&ProductId::new("R1"), &LineSize::Default);
    /// assert_eq!(id.as_str(), "R1-default");
    /// ```
    pub fn derive(product_id: &ProductId, size: &LineSize) -> Self {
        Self(format!("{}-{}", product_id.as_str(), size.tag()))
    }
}
