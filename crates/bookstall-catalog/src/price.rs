//! Price type for book listings.
//!
//! Stored in minor units (cents) to avoid floating-point drift; the
//! catalog document carries prices as plain decimal numbers, so the type
//! (de)serializes as a decimal. Prices are non-negative and
//! currency-agnostic; display is always two fractional digits with a
//! leading symbol.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currency symbol prefixed to every displayed price.
const SYMBOL: &str = "$";

/// A non-negative price in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Create a price from minor units.
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal amount, rounding to the nearest
    /// cent. Returns `None` for negative or non-finite amounts.
    ///
    /// ```
    /// use bookstall_catalog::Price;
    /// let price = Price::try_from_decimal(49.99).unwrap();
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        Some(Self {
            cents: (amount * 100.0).round() as u64,
        })
    }

    /// Get the amount in minor units.
    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Format as a display string with exactly two fractional digits
    /// (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}.{:02}", SYMBOL, self.cents / 100, self.cents % 100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::try_from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {}", amount)))
    }
}
