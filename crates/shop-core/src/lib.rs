//! # shop-core
//!
//! Core types and traits for the mini-shop catalog.
//!
//! This crate provides:
//! - `Product` (Book / Laptop variants) with the `Deliverable` and `Refundable` capabilities
//! - `Customer` and `Order`
//! - `PaymentMethod` strategies and `PaymentMethodSelector`
//! - `Repository` trait and `InMemoryRepository` store
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shop_core::{Customer, Order, PaypalPayment, Product, ProductRepository, Repository};
//!
//! let book = Arc::new(Product::book("B1", "Rust in Action", 100.0)?);
//! let laptop = Arc::new(Product::laptop("L1", "MacBook", 2000.0)?);
//!
//! let mut products = ProductRepository::new();
//! products.add(Arc::clone(&book))?;
//! products.add(Arc::clone(&laptop))?;
//!
//! let customer = Arc::new(Customer::new("C1", "Alice"));
//! let order = Order::new("O1", customer)
//!     .with_product(book)
//!     .with_product(laptop);
//!
//! let receipt = order.pay(&PaypalPayment)?;
//! assert_eq!(receipt.to_string(), "Paid by PayPal: 2100.00");
//! # Ok::<(), shop_core::ShopError>(())
//! ```

pub mod customer;
pub mod error;
pub mod order;
pub mod payment;
pub mod product;
pub mod repository;

// Re-exports for convenience
pub use customer::Customer;
pub use error::{PriceRejection, ShopError, ShopResult};
pub use order::Order;
pub use payment::{
    BoxedPaymentMethod, CashPayment, CreditCardPayment, MobileWalletPayment, PaymentMethod,
    PaymentMethodSelector, PaymentReceipt, PaypalPayment,
};
pub use product::{
    Deliverable, DeliveryNotice, Price, Product, ProductKind, RefundNotice, Refundable,
};
pub use repository::{
    CustomerRepository, Identified, InMemoryRepository, OrderRepository, ProductRepository,
    Repository,
};
