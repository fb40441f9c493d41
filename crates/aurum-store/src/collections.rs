//! # Entity Collections
//!
//! The six in-memory collections the UI renders from.
//!
//! ## Why Independent Collections? (not one big state struct)
//! Each collection has its own lock so the synchronizer can replace them
//! independently: a slow or failed `/produtos` fetch never blocks the
//! customers list from updating.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       EntityStore Layout                                │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐                    │
//! │  │  customers   │ │opportunities │ │    orders    │                    │
//! │  │ Arc<RwLock<  │ │ Arc<RwLock<  │ │ Arc<RwLock<  │   ... products,    │
//! │  │  Vec<T>>>    │ │  Vec<T>>>    │ │  Vec<T>>>    │   employees, logs  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘                    │
//! │                                                                         │
//! │  WRITERS: the synchronizer (replace) and the session store (clear).    │
//! │  READERS: presentation code, via cloned snapshots only.                │
//! │  Vec keeps the backend's insertion order for stable list rendering.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use aurum_core::{ActivityLog, Customer, Employee, Opportunity, Order, Product};
use tokio::sync::RwLock;

// =============================================================================
// Collection
// =============================================================================

/// One shared, replaceable collection of records.
///
/// Cheap to clone: clones observe the same underlying data.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clones the current contents for rendering or inspection.
    pub async fn snapshot(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    /// Replaces the whole collection with a freshly fetched one.
    pub async fn replace(&self, records: Vec<T>) {
        *self.inner.write().await = records;
    }

    /// Empties the collection.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the collection currently holds nothing.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Entity Store
// =============================================================================

/// The six collections, owned once per client instance.
///
/// Presentation code reads snapshots and calls the gateway; only the
/// synchronizer and the session store write here.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    customers: Collection<Customer>,
    opportunities: Collection<Opportunity>,
    orders: Collection<Order>,
    products: Collection<Product>,
    employees: Collection<Employee>,
    logs: Collection<ActivityLog>,
}

impl EntityStore {
    /// Creates a store with six empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &Collection<Customer> {
        &self.customers
    }

    pub fn opportunities(&self) -> &Collection<Opportunity> {
        &self.opportunities
    }

    pub fn orders(&self) -> &Collection<Order> {
        &self.orders
    }

    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    pub fn employees(&self) -> &Collection<Employee> {
        &self.employees
    }

    pub fn logs(&self) -> &Collection<ActivityLog> {
        &self.logs
    }

    /// Empties all six collections immediately.
    ///
    /// Called on logout and session invalidation so no data leaks across
    /// sessions; lazily-emptying on next fetch would leave stale rows
    /// visible in the meantime.
    pub async fn clear_all(&self) {
        tokio::join!(
            self.customers.clear(),
            self.opportunities.clear(),
            self.orders.clear(),
            self.products.clear(),
            self.employees.clear(),
            self.logs.clear(),
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_preserves_order() {
        let collection: Collection<i32> = Collection::new();
        collection.replace(vec![3, 1, 2]).await;
        assert_eq!(collection.snapshot().await, vec![3, 1, 2]);

        collection.replace(vec![9]).await;
        assert_eq!(collection.snapshot().await, vec![9]);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let collection: Collection<i32> = Collection::new();
        let alias = collection.clone();
        collection.replace(vec![1, 2]).await;
        assert_eq!(alias.len().await, 2);
    }

    #[tokio::test]
    async fn test_clear_all_empties_every_collection() {
        let store = EntityStore::new();
        store
            .customers()
            .replace(vec![Customer {
                id: Some(1),
                name: "Joalheria Central".into(),
                tax_id: "00.000.000/0001-00".into(),
                email: "c@c.com".into(),
                phone: None,
                address: None,
            }])
            .await;
        store
            .employees()
            .replace(vec![Employee {
                id: Some(1),
                name: "Ana".into(),
                tax_id: "000.000.000-00".into(),
                role: "Vendas".into(),
                email: "ana@aurum.com".into(),
            }])
            .await;

        store.clear_all().await;
        assert!(store.customers().is_empty().await);
        assert!(store.employees().is_empty().await);
    }
}
