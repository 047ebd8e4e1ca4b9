//! # Order Types
//!
//! An order ties one customer to a list of catalog products. Products and
//! the customer are shared with their repositories, not owned.

use crate::customer::Customer;
use crate::error::{ShopError, ShopResult};
use crate::payment::{PaymentMethod, PaymentReceipt};
use crate::product::{Price, Product};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// An order placed by a customer
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Order ID (e.g. "O1")
    pub id: String,

    /// Customer who placed the order
    pub customer: Arc<Customer>,

    /// Products in the order, in the order they were added
    pub items: Vec<Arc<Product>>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: impl Into<String>, customer: Arc<Customer>) -> Self {
        Self {
            id: id.into(),
            customer,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a product. The same product may appear more than once.
    pub fn add_product(&mut self, product: Arc<Product>) {
        self.items.push(product);
    }

    /// Builder: add a product
    pub fn with_product(mut self, product: Arc<Product>) -> Self {
        self.add_product(product);
        self
    }

    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    /// Sum of the constituent product prices.
    ///
    /// Fails with [`ShopError::TotalOverflow`] if the sum does not fit in a
    /// `Price`.
    pub fn total(&self) -> ShopResult<Price> {
        Price::checked_sum(self.items.iter().map(|p| p.price())).ok_or_else(|| {
            ShopError::TotalOverflow {
                id: self.id.clone(),
            }
        })
    }

    /// Settle the order total through the given payment method
    pub fn pay(&self, method: &dyn PaymentMethod) -> ShopResult<PaymentReceipt> {
        Ok(method.pay(&self.id, self.total()?))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{CashPayment, MobileWalletPayment};

    fn alice() -> Arc<Customer> {
        Arc::new(Customer::new("C1", "Alice"))
    }

    #[test]
    fn test_order_total() {
        let book = Arc::new(Product::book("B1", "Rust in Action", 100.0).unwrap());
        let laptop = Arc::new(Product::laptop("L1", "MacBook", 2000.0).unwrap());

        let order = Order::new("O1", alice())
            .with_product(book)
            .with_product(laptop);

        assert_eq!(order.total(), Ok(Price::new(2100.0)));
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new("O2", alice());

        assert!(order.is_empty());
        assert_eq!(order.total(), Ok(Price::ZERO));
    }

    #[test]
    fn test_repeated_product_counts_twice() {
        let book = Arc::new(Product::book("B1", "Rust in Action", 12.5).unwrap());

        let mut order = Order::new("O3", alice());
        order.add_product(Arc::clone(&book));
        order.add_product(book);

        assert_eq!(order.total(), Ok(Price::new(25.0)));
    }

    #[test]
    fn test_total_at_max_prices() {
        let gold = Arc::new(Product::book("G1", "Gold Edition", Price::MAX.as_decimal()).unwrap());
        let order = Order::new("O4", alice())
            .with_product(Arc::clone(&gold))
            .with_product(gold);

        assert_eq!(order.total(), Ok(Price::from_cents(2 * Price::MAX.amount)));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let gold = Arc::new(Product::book("G1", "Gold Edition", Price::MAX.as_decimal()).unwrap());

        // i64::MAX / Price::MAX is 9223, so one more item overflows
        let mut order = Order::new("O5", alice());
        for _ in 0..=(i64::MAX / Price::MAX.amount) {
            order.add_product(Arc::clone(&gold));
        }

        let overflow = ShopError::TotalOverflow { id: "O5".into() };
        assert_eq!(order.total(), Err(overflow.clone()));
        assert_eq!(order.pay(&CashPayment).unwrap_err(), overflow);
    }

    #[test]
    fn test_products_are_shared() {
        let book = Arc::new(Product::book("B1", "Rust in Action", 100.0).unwrap());
        let order = Order::new("O1", alice()).with_product(Arc::clone(&book));

        assert!(Arc::ptr_eq(&order.items()[0], &book));
        assert_eq!(Arc::strong_count(&book), 2);
    }

    #[test]
    fn test_pay_uses_total() {
        let laptop = Arc::new(Product::laptop("L1", "MacBook", 2000.0).unwrap());
        let order = Order::new("O1", alice()).with_product(laptop);

        let receipt = order.pay(&CashPayment).unwrap();
        assert_eq!(receipt.amount, Price::new(2000.0));
        assert_eq!(receipt.order_id, "O1");

        let receipt = order.pay(&MobileWalletPayment).unwrap();
        assert_eq!(receipt.to_string(), "Paid by MoMo: 2000.00");
    }

    #[test]
    fn test_order_serializes() {
        let book = Arc::new(Product::book("B1", "Rust in Action", 100.0).unwrap());
        let order = Order::new("O1", alice()).with_product(book);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "O1");
        assert_eq!(json["customer"]["name"], "Alice");
        assert_eq!(json["items"][0]["kind"], "book");
        assert_eq!(json["items"][0]["price"]["amount"], 10_000);
    }
}
