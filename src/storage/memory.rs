use super::types::{Product, ProductId};

use dashmap::DashMap;

/// In-memory product catalogue shared by every request handler.
///
/// Backed by a sharded `DashMap`, so a single insert never interleaves with
/// another write to the same key. There is no eviction and no delete; the
/// contents live until the process exits.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: DashMap<ProductId, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }

    /// Stores `product` under `id`, returning the record it replaced.
    pub fn upsert(&self, id: ProductId, product: Product) -> Option<Product> {
        let previous = self.products.insert(id.clone(), product);
        if previous.is_some() {
            tracing::debug!("Overwrote product {}", id);
        }
        previous
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Clones every stored product accepted by `predicate`.
    ///
    /// Iteration order follows the shard layout and is not stable between calls.
    pub fn scan<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}
