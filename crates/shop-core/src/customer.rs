//! # Customer
//!
//! The buyer an order belongs to.

use serde::Serialize;

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}
