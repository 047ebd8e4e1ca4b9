//! # Repositories
//!
//! Keyed in-memory storage for products, customers and orders.
//!
//! Any type that can report its own id (`Identified`) can be stored in an
//! `InMemoryRepository`. Keys are unique: `add` refuses an existing id,
//! `update` and `delete` refuse a missing one.

use crate::customer::Customer;
use crate::error::{ShopError, ShopResult};
use crate::order::Order;
use crate::product::Product;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Capability: the entity yields its own unique id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified + ?Sized> Identified for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        Product::id(self)
    }
}

impl Identified for Customer {
    fn id(&self) -> &str {
        Customer::id(self)
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD contract shared by every repository.
pub trait Repository<T> {
    /// Insert a new item. Fails with [`ShopError::DuplicateId`] if the id is taken.
    fn add(&mut self, item: T) -> ShopResult<()>;

    /// Replace the item stored under the same id. Fails with
    /// [`ShopError::NotFound`] if nothing is stored under it.
    fn update(&mut self, item: T) -> ShopResult<()>;

    /// Remove and return the item stored under `id`.
    fn delete(&mut self, id: &str) -> ShopResult<T>;

    /// Snapshot of every stored item.
    fn find_all(&self) -> Vec<T>;

    fn find_by_id(&self, id: &str) -> Option<&T>;
}

/// `HashMap`-backed repository that iterates in insertion order
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: HashMap<String, T>,
    order: Vec<String>,
}

pub type ProductRepository = InMemoryRepository<Arc<Product>>;
pub type CustomerRepository = InMemoryRepository<Arc<Customer>>;
pub type OrderRepository = InMemoryRepository<Arc<Order>>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate stored items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified + Clone> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, item: T) -> ShopResult<()> {
        let id = item.id().to_string();
        if self.items.contains_key(&id) {
            return Err(ShopError::duplicate_id(id));
        }

        debug!(id = %id, "repository add");
        self.order.push(id.clone());
        self.items.insert(id, item);
        Ok(())
    }

    fn update(&mut self, item: T) -> ShopResult<()> {
        match self.items.get_mut(item.id()) {
            Some(slot) => {
                debug!(id = item.id(), "repository update");
                *slot = item;
                Ok(())
            }
            None => Err(ShopError::not_found(item.id())),
        }
    }

    fn delete(&mut self, id: &str) -> ShopResult<T> {
        let item = self
            .items
            .remove(id)
            .ok_or_else(|| ShopError::not_found(id))?;

        debug!(id, "repository delete");
        self.order.retain(|stored| stored != id);
        Ok(item)
    }

    fn find_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }
}
