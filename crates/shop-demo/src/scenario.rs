//! # Demo Scenario
//!
//! Fixed walkthrough over the catalog: seed the repositories, place an
//! order, deliver, refund, pay with every method, then trigger the
//! duplicate-id and invalid-price failures.
//!
//! Expected failures are caught and written to the report; only a failure
//! while seeding aborts the run.

use anyhow::Context;
use shop_core::{
    Customer, CustomerRepository, Deliverable, Order, OrderRepository, PaymentMethodSelector,
    PaymentReceipt, Price, Product, ProductRepository, Refundable, Repository, ShopError,
    ShopResult,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything the walkthrough printed, plus what it observed
#[derive(Debug, Default)]
pub struct DemoReport {
    /// Console lines, in order
    pub lines: Vec<String>,
    /// Errors caught along the way
    pub errors: Vec<ShopError>,
    pub receipts: Vec<PaymentReceipt>,
    pub products: ProductRepository,
    pub customers: CustomerRepository,
    pub orders: OrderRepository,
}

impl DemoReport {
    /// Total of a stored order
    pub fn order_total(&self, order_id: &str) -> Option<Price> {
        self.orders.find_by_id(order_id)?.total().ok()
    }

    fn section(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("{title}:"));
    }

    fn line(&mut self, line: impl fmt::Display) {
        self.lines.push(line.to_string());
    }

    /// Record the outcome of a step that is allowed to fail
    fn record<T: fmt::Display>(&mut self, result: ShopResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.line(&value);
                Some(value)
            }
            Err(e) => {
                warn!(kind = e.kind(), id = e.id(), "{}", e);
                self.line(&e);
                self.errors.push(e);
                None
            }
        }
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Run the walkthrough
pub fn run() -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();

    let book = Arc::new(Product::book("B1", "Rust Programming Guide", 100.0)?);
    let laptop = Arc::new(Product::laptop("L1", "MacBook", 2000.0)?);

    report
        .products
        .add(Arc::clone(&book))
        .context("seeding product B1")?;
    report
        .products
        .add(Arc::clone(&laptop))
        .context("seeding product L1")?;

    let customer = Arc::new(Customer::new("C1", "Alice"));
    report
        .customers
        .add(Arc::clone(&customer))
        .context("seeding customer C1")?;

    report.section("Product list");
    for product in report.products.find_all() {
        report.line(&product);
    }

    let order = Arc::new(
        Order::new("O1", customer)
            .with_product(Arc::clone(&book))
            .with_product(Arc::clone(&laptop)),
    );
    report
        .orders
        .add(Arc::clone(&order))
        .context("storing order O1")?;
    let order_json = serde_json::to_string(&*order)?;
    debug!(order = %order_json, "order stored");
    let total = order.total().context("totalling order O1")?;
    info!(order_id = %order.id, total = %total, "order placed");

    report.section("Deliver");
    for product in order.items() {
        let notice = product.deliver();
        report.line(notice);
    }

    report.section("Refund");
    for product in order.items() {
        report.record(product.refund());
    }

    report.section("Payment test");
    let selector = PaymentMethodSelector::standard();
    for method in selector.methods() {
        if let Some(receipt) = report.record(order.pay(&**method)) {
            report.receipts.push(receipt);
        }
    }

    report.section("Duplicate test");
    let duplicate = report.products.add(Arc::clone(&book));
    report.record(duplicate.map(|()| "added"));

    report.section("Invalid price test");
    report.record(Product::book("Book", "Book 2", -10.0));

    Ok(report)
}
