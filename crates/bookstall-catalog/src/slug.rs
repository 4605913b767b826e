//! Newtype identifier for books.
//!
//! Books are addressed by a URL-friendly slug. The newtype keeps slugs
//! from being confused with the many other strings a book carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique, URL-friendly book identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookSlug(String);

impl BookSlug {
    /// Create a slug from a string.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BookSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookSlug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookSlug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for BookSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
