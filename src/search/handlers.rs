use super::engine::search_products;
use super::types::{SearchParams, SearchResponse};
use crate::storage::memory::ProductStore;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(store): Extension<Arc<ProductStore>>,
) -> Json<SearchResponse> {
    let query = SearchParams::from_pairs(pairs).q.unwrap_or_default();
    tracing::info!("Search received: {:?}", query);

    let results = search_products(&store, &query);
    tracing::debug!(
        "Search {:?} matched {} of {} products",
        query,
        results.len(),
        store.len()
    );

    Json(SearchResponse { query, results })
}
