use shop_core::{Price, PriceRejection, ShopError};
use shop_demo::scenario;

#[test]
fn walkthrough_records_expected_failures() {
    let report = scenario::run().unwrap();

    let kinds: Vec<_> = report.errors.iter().map(ShopError::kind).collect();
    assert_eq!(kinds, vec!["non_refundable", "duplicate_id", "invalid_price"]);

    assert_eq!(report.errors[0], ShopError::NonRefundable { id: "L1".into() });
    assert_eq!(report.errors[1], ShopError::duplicate_id("B1"));
    assert_eq!(
        report.errors[2],
        ShopError::InvalidPrice {
            id: "Book".into(),
            price: "-10".into(),
            reason: PriceRejection::Negative,
        }
    );
}

#[test]
fn duplicate_add_leaves_two_products() {
    let report = scenario::run().unwrap();

    assert_eq!(report.products.len(), 2);
    assert_eq!(report.customers.len(), 1);
    assert_eq!(report.orders.len(), 1);
}

#[test]
fn every_payment_method_settles_the_total() {
    let report = scenario::run().unwrap();

    assert_eq!(report.order_total("O1"), Some(Price::new(2100.0)));

    let providers: Vec<_> = report.receipts.iter().map(|r| r.provider.as_str()).collect();
    assert_eq!(providers, vec!["credit_card", "paypal", "cash", "momo"]);
    assert!(report
        .receipts
        .iter()
        .all(|r| r.amount == Price::new(2100.0) && r.order_id == "O1"));
}

#[test]
fn report_lines_follow_the_script() {
    let report = scenario::run().unwrap();
    let lines: Vec<&str> = report.lines.iter().map(String::as_str).collect();

    let expected = vec![
        "Product list:",
        "B1 Rust Programming Guide  100.00",
        "L1 MacBook  2000.00",
        "",
        "Deliver:",
        "Rust Programming Guide delivered",
        "MacBook delivered",
        "",
        "Refund:",
        "Rust Programming Guide refunded",
        "Laptop is not refundable: L1",
        "",
        "Payment test:",
        "Paid by credit card: 2100.00",
        "Paid by PayPal: 2100.00",
        "Paid in cash: 2100.00",
        "Paid by MoMo: 2100.00",
        "",
        "Duplicate test:",
        "Duplicate id: B1",
        "",
        "Invalid price test:",
        "Price < 0: Book",
    ];
    assert_eq!(lines, expected);
    assert!(report.to_string().ends_with("Price < 0: Book\n"));
}
