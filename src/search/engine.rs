use crate::storage::memory::ProductStore;
use crate::storage::types::Product;

/// Case-insensitive substring match of `needle` against the product's `name`.
///
/// `needle` must already be lowercased. A missing or non-string `name` counts
/// as the empty string.
pub fn matches_name(product: &Product, needle: &str) -> bool {
    let name = product
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or("");
    name.to_lowercase().contains(needle)
}

pub fn search_products(store: &ProductStore, query: &str) -> Vec<Product> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    store.scan(|product| matches_name(product, &needle))
}
