//! # Product Types
//!
//! Catalog products for mini-shop. A product is one of a fixed set of
//! variants (`ProductKind`) and is immutable once constructed.

use crate::error::{PriceRejection, ShopError, ShopResult};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Price with amount in the smallest currency unit (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Price {
    /// Amount in cents
    pub amount: i64,
}

impl Price {
    pub const ZERO: Price = Price { amount: 0 };

    /// Largest price a product may carry: 10^13 currency units.
    /// Kept below 2^53 cents so every value converts exactly from `f64`.
    pub const MAX: Price = Price {
        amount: 1_000_000_000_000_000,
    };

    /// Create a price from a decimal amount (e.g. `29.99`), rounded to the
    /// nearest cent. Out-of-range input saturates; use `try_from_decimal`
    /// for validated conversion.
    pub fn new(amount: f64) -> Self {
        Self {
            amount: (amount * 100.0).round() as i64,
        }
    }

    /// Convert a decimal amount, rounding to the nearest cent.
    ///
    /// Fails unless the amount is finite and within `0..=Price::MAX`.
    pub fn try_from_decimal(amount: f64) -> Result<Self, PriceRejection> {
        if !amount.is_finite() {
            return Err(PriceRejection::NotFinite);
        }
        if amount < 0.0 {
            return Err(PriceRejection::Negative);
        }

        let cents = (amount * 100.0).round();
        if cents > Self::MAX.amount as f64 {
            return Err(PriceRejection::TooLarge);
        }
        Ok(Self::from_cents(cents as i64))
    }

    /// Create a price from cents
    pub fn from_cents(amount: i64) -> Self {
        Self { amount }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    /// Add two prices, `None` on overflow
    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.amount.checked_add(rhs.amount).map(Price::from_cents)
    }

    /// Sum prices, `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Price>>(prices: I) -> Option<Price> {
        prices
            .into_iter()
            .try_fold(Price::ZERO, |acc, price| acc.checked_add(price))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_decimal())
    }
}

/// Product variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Book,
    /// Laptops cannot be refunded
    Laptop,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Book => "book",
            ProductKind::Laptop => "laptop",
        }
    }

    /// Whether `Refundable::refund` succeeds for this variant
    pub fn is_refundable(&self) -> bool {
        !matches!(self, ProductKind::Laptop)
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability: the entity can be shipped to a customer.
pub trait Deliverable {
    /// Deliver the item. Never fails.
    fn deliver(&self) -> DeliveryNotice;
}

/// Capability: the entity can be returned for a refund.
pub trait Refundable {
    fn refund(&self) -> ShopResult<RefundNotice>;
}

/// Notification emitted when a product is delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryNotice {
    pub product_id: String,
    pub product_name: String,
}

impl fmt::Display for DeliveryNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} delivered", self.product_name)
    }
}

/// Notification emitted when a product is refunded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundNotice {
    pub product_id: String,
    pub product_name: String,
    pub amount: Price,
}

impl fmt::Display for RefundNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} refunded", self.product_name)
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    kind: ProductKind,
    price: Price,
}

impl Product {
    /// Create a product of the given variant.
    ///
    /// The price is stored in whole cents: `price` is rounded to the
    /// nearest cent, so `0.004` becomes `0.00` and `0.006` becomes `0.01`.
    ///
    /// Fails with [`ShopError::InvalidPrice`] when `price` is negative,
    /// not a finite number, or above [`Price::MAX`].
    pub fn new(
        kind: ProductKind,
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> ShopResult<Self> {
        let id = id.into();
        let cents = match Price::try_from_decimal(price) {
            Ok(cents) => cents,
            Err(reason) => return Err(ShopError::invalid_price(id, price, reason)),
        };

        Ok(Self {
            id,
            name: name.into(),
            kind,
            price: cents,
        })
    }

    pub fn book(id: impl Into<String>, name: impl Into<String>, price: f64) -> ShopResult<Self> {
        Self::new(ProductKind::Book, id, name, price)
    }

    pub fn laptop(id: impl Into<String>, name: impl Into<String>, price: f64) -> ShopResult<Self> {
        Self::new(ProductKind::Laptop, id, name, price)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Deliverable for Product {
    fn deliver(&self) -> DeliveryNotice {
        info!(product_id = %self.id, kind = %self.kind, "product delivered");
        DeliveryNotice {
            product_id: self.id.clone(),
            product_name: self.name.clone(),
        }
    }
}

impl Refundable for Product {
    fn refund(&self) -> ShopResult<RefundNotice> {
        if !self.kind.is_refundable() {
            warn!(product_id = %self.id, kind = %self.kind, "refund refused");
            return Err(ShopError::NonRefundable {
                id: self.id.clone(),
            });
        }

        info!(product_id = %self.id, amount = %self.price, "product refunded");
        Ok(RefundNotice {
            product_id: self.id.clone(),
            product_name: self.name.clone(),
            amount: self.price,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}  {}", self.id, self.name, self.price)
    }
}
