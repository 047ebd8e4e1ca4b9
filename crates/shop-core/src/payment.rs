//! # Payment Methods
//!
//! Strategy pattern trait for settling an order's total.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentMethod (trait)                    │
//! │  ├── pay()                                                  │
//! │  ├── provider_name()                                        │
//! │  └── channel_label()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!       ┌──────────────┬─────┴────────┬──────────────┐
//!       │              │              │              │
//!  ┌────┴─────┐  ┌─────┴────┐  ┌──────┴───┐  ┌───────┴──────┐
//!  │CreditCard│  │  PayPal  │  │   Cash   │  │ MobileWallet │
//!  └──────────┘  └──────────┘  └──────────┘  └──────────────┘
//! ```
//!
//! No ledger is kept: paying twice simply produces two receipts.

use crate::product::Price;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// An interchangeable way of paying an amount.
pub trait PaymentMethod: Send + Sync {
    /// Get the provider name (for logging and lookup).
    fn provider_name(&self) -> &'static str;

    /// Human readable prefix used when reporting a payment.
    fn channel_label(&self) -> &'static str;

    /// Pay `amount` for the given order and report it through this channel.
    fn pay(&self, order_id: &str, amount: Price) -> PaymentReceipt {
        info!(
            provider = self.provider_name(),
            order_id,
            amount = %amount,
            "payment settled"
        );
        PaymentReceipt::new(order_id, self.provider_name(), self.channel_label(), amount)
    }
}

/// Type alias for a shared payment method (dynamic dispatch)
pub type BoxedPaymentMethod = Arc<dyn PaymentMethod>;

/// Proof that an amount was reported through a payment channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    /// Unique receipt reference
    pub reference: Uuid,
    pub order_id: String,
    /// Provider name (e.g. "paypal")
    pub provider: String,
    pub channel: String,
    pub amount: Price,
    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    pub fn new(
        order_id: impl Into<String>,
        provider: impl Into<String>,
        channel: impl Into<String>,
        amount: Price,
    ) -> Self {
        Self {
            reference: Uuid::new_v4(),
            order_id: order_id.into(),
            provider: provider.into(),
            channel: channel.into(),
            amount,
            paid_at: Utc::now(),
        }
    }
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.channel, self.amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn provider_name(&self) -> &'static str {
        "credit_card"
    }

    fn channel_label(&self) -> &'static str {
        "Paid by credit card"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaypalPayment;

impl PaymentMethod for PaypalPayment {
    fn provider_name(&self) -> &'static str {
        "paypal"
    }

    fn channel_label(&self) -> &'static str {
        "Paid by PayPal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentMethod for CashPayment {
    fn provider_name(&self) -> &'static str {
        "cash"
    }

    fn channel_label(&self) -> &'static str {
        "Paid in cash"
    }
}

/// MoMo mobile wallet
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileWalletPayment;

impl PaymentMethod for MobileWalletPayment {
    fn provider_name(&self) -> &'static str {
        "momo"
    }

    fn channel_label(&self) -> &'static str {
        "Paid by MoMo"
    }
}

/// Registry of payment methods, kept in registration order
#[derive(Clone)]
pub struct PaymentMethodSelector {
    methods: Vec<BoxedPaymentMethod>,
    default_provider: String,
}

impl PaymentMethodSelector {
    /// Create an empty selector with a default provider
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            methods: Vec::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Selector with all four built-in methods, defaulting to credit card
    pub fn standard() -> Self {
        Self::new("credit_card")
            .with_method(Arc::new(CreditCardPayment))
            .with_method(Arc::new(PaypalPayment))
            .with_method(Arc::new(CashPayment))
            .with_method(Arc::new(MobileWalletPayment))
    }

    /// Register a payment method, replacing one with the same provider name
    pub fn register(&mut self, method: BoxedPaymentMethod) {
        match self
            .methods
            .iter_mut()
            .find(|m| m.provider_name() == method.provider_name())
        {
            Some(slot) => *slot = method,
            None => self.methods.push(method),
        }
    }

    /// Register with builder pattern
    pub fn with_method(mut self, method: BoxedPaymentMethod) -> Self {
        self.register(method);
        self
    }

    pub fn default_method(&self) -> Option<&BoxedPaymentMethod> {
        self.get(&self.default_provider)
    }

    pub fn get(&self, provider: &str) -> Option<&BoxedPaymentMethod> {
        self.methods.iter().find(|m| m.provider_name() == provider)
    }

    /// Get method or fall back to default
    pub fn get_or_default(&self, provider: Option<&str>) -> Option<&BoxedPaymentMethod> {
        match provider {
            Some(p) => self.get(p).or_else(|| self.default_method()),
            None => self.default_method(),
        }
    }

    /// All registered methods in registration order
    pub fn methods(&self) -> impl Iterator<Item = &BoxedPaymentMethod> {
        self.methods.iter()
    }

    pub fn providers(&self) -> Vec<&'static str> {
        self.methods.iter().map(|m| m.provider_name()).collect()
    }

    pub fn has_provider(&self, provider: &str) -> bool {
        self.get(provider).is_some()
    }
}

impl Default for PaymentMethodSelector {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for PaymentMethodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentMethodSelector")
            .field("providers", &self.providers())
            .field("default_provider", &self.default_provider)
            .finish()
    }
}
