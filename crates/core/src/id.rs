//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings: callers may bring their own (`"p1"`) and factories
//! generate UUIDv7 strings. A blank identifier can be *held* so that validators can report
//! `"Id is required"` instead of failing at parse time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Untyped entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Declare a typed identifier wrapping [`EntityId`].
///
/// ```ignore
/// storefront_core::entity_id!(ProductId);
/// let id = ProductId::generate();
/// ```
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t($crate::EntityId);

        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self($crate::EntityId::new(value))
            }

            pub fn generate() -> Self {
                Self($crate::EntityId::generate())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn is_blank(&self) -> bool {
                self.0.is_blank()
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<$t> for $crate::EntityId {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}
