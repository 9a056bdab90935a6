use super::types::IngestSummary;
use crate::error::{ApiError, StatusMessage};
use crate::storage::memory::ProductStore;
use crate::storage::types::ProductId;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

pub async fn handle_ingest(
    Extension(store): Extension<Arc<ProductStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusMessage>), ApiError> {
    let products = match parse_ingest_payload(&body) {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!("Rejected ingest request ({} bytes): {}", body.len(), err);
            return Err(err);
        }
    };

    let summary = ingest_products(&store, products);
    tracing::info!(
        "Ingested batch: received={} stored={} skipped={} store_size={}",
        summary.received,
        summary.stored,
        summary.skipped,
        store.len()
    );

    Ok((StatusCode::OK, Json(StatusMessage::success(summary.message()))))
}

/// Extracts the `products` array from a raw ingest body.
///
/// Empty bodies, invalid JSON, non-object or empty-object documents, and a
/// missing or non-array `products` field all map to `ApiError::NoProducts`.
pub fn parse_ingest_payload(body: &[u8]) -> Result<Vec<Value>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::NoProducts);
    }

    let document: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Ingest body is not valid JSON: {}", e);
        ApiError::NoProducts
    })?;

    match document {
        Value::Object(mut fields) => match fields.remove("products") {
            Some(Value::Array(products)) => Ok(products),
            Some(other) => {
                tracing::debug!("Ingest `products` is not an array: {}", other);
                Err(ApiError::NoProducts)
            }
            None => Err(ApiError::NoProducts),
        },
        _ => Err(ApiError::NoProducts),
    }
}

/// Upserts every product that carries a usable id; the rest are counted and dropped.
pub fn ingest_products(store: &ProductStore, products: Vec<Value>) -> IngestSummary {
    let mut summary = IngestSummary {
        received: products.len(),
        ..IngestSummary::default()
    };

    for (position, product) in products.into_iter().enumerate() {
        let Value::Object(record) = product else {
            tracing::debug!("Skipping product #{}: not an object", position);
            summary.skipped += 1;
            continue;
        };

        match ProductId::of(&record) {
            Some(id) => {
                store.upsert(id, record);
                summary.stored += 1;
            }
            None => {
                tracing::debug!("Skipping product #{}: no usable id", position);
                summary.skipped += 1;
            }
        }
    }

    summary
}
