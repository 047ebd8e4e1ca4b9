//! # Shop Error Types
//!
//! Typed error handling for the mini-shop domain.
//! Every fallible operation returns `Result<T, ShopError>`.

use std::fmt;
use thiserror::Error;

/// Why a product price was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRejection {
    Negative,
    NotFinite,
    /// Above `Price::MAX`
    TooLarge,
}

impl fmt::Display for PriceRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRejection::Negative => f.write_str("< 0"),
            PriceRejection::NotFinite => f.write_str("is not a finite number"),
            PriceRejection::TooLarge => f.write_str("exceeds the maximum"),
        }
    }
}

/// Core error type for catalog, order and repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// Repository `add` on an id that is already stored
    #[error("Duplicate id: {id}")]
    DuplicateId { id: String },

    /// Repository `update` / `delete` on an id that was never stored
    #[error("Not found: {id}")]
    NotFound { id: String },

    /// Product constructed with a price that cannot be stored.
    /// `price` is the rejected input as written.
    #[error("Price {reason}: {id}")]
    InvalidPrice {
        id: String,
        price: String,
        reason: PriceRejection,
    },

    /// Refund attempted on a product variant that does not allow it
    #[error("Laptop is not refundable: {id}")]
    NonRefundable { id: String },

    /// Order total does not fit in a `Price`
    #[error("Order total overflows: {id}")]
    TotalOverflow { id: String },
}

impl ShopError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn invalid_price(id: impl Into<String>, price: f64, reason: PriceRejection) -> Self {
        Self::InvalidPrice {
            id: id.into(),
            price: price.to_string(),
            reason,
        }
    }

    /// Stable tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ShopError::DuplicateId { .. } => "duplicate_id",
            ShopError::NotFound { .. } => "not_found",
            ShopError::InvalidPrice { .. } => "invalid_price",
            ShopError::NonRefundable { .. } => "non_refundable",
            ShopError::TotalOverflow { .. } => "total_overflow",
        }
    }

    /// The entity id the error refers to
    pub fn id(&self) -> &str {
        match self {
            ShopError::DuplicateId { id }
            | ShopError::NotFound { id }
            | ShopError::InvalidPrice { id, .. }
            | ShopError::NonRefundable { id }
            | ShopError::TotalOverflow { id } => id,
        }
    }
}

/// Result type alias for shop operations
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ShopError::duplicate_id("B1").to_string(), "Duplicate id: B1");
        assert_eq!(ShopError::not_found("X9").to_string(), "Not found: X9");
        assert_eq!(
            ShopError::invalid_price("Book", -10.0, PriceRejection::Negative).to_string(),
            "Price < 0: Book"
        );
        assert_eq!(
            ShopError::TotalOverflow { id: "O1".into() }.to_string(),
            "Order total overflows: O1"
        );
        assert_eq!(
            ShopError::NonRefundable { id: "L1".into() }.to_string(),
            "Laptop is not refundable: L1"
        );
    }

    #[test]
    fn test_kind_and_id() {
        let err = ShopError::not_found("C7");
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.id(), "C7");

        let err = ShopError::NonRefundable { id: "L1".into() };
        assert_eq!(err.kind(), "non_refundable");
        assert_eq!(err.id(), "L1");
    }

    #[test]
    fn test_nan_price_error_equals_itself() {
        let err = ShopError::invalid_price("L9", f64::NAN, PriceRejection::NotFinite);

        assert_eq!(err, err.clone());
        assert_eq!(err.to_string(), "Price is not a finite number: L9");
        assert_eq!(
            err,
            ShopError::InvalidPrice {
                id: "L9".into(),
                price: "NaN".into(),
                reason: PriceRejection::NotFinite,
            }
        );
    }
}
