//! Ingestion Module Tests
//!
//! ## Test Scopes
//! - **Payload parsing**: Which request bodies are accepted and which map to the fixed 400.
//! - **Batch application**: Overwrite semantics, skipped elements and the reported count.
//! - **Handler**: The status/body pair returned for good and bad requests.

#[cfg(test)]
mod tests {
    use crate::error::{ApiError, StatusMessage};
    use crate::ingestion::handlers::{handle_ingest, ingest_products, parse_ingest_payload};
    use crate::ingestion::types::IngestSummary;
    use crate::storage::memory::ProductStore;
    use crate::storage::types::ProductId;
    use axum::body::Bytes;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn products(value: Value) -> Vec<Value> {
        match value {
            Value::Array(items) => items,
            other => panic!("expected an array, got {}", other),
        }
    }

    // ============================================================
    // PAYLOAD PARSING TESTS
    // ============================================================

    #[test]
    fn test_parse_valid_payload() {
        let body = br#"{"products": [{"id": 1, "name": "Red Shoe"}, {"id": 2}]}"#;
        let parsed = parse_ingest_payload(body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["name"], json!("Red Shoe"));
    }

    #[test]
    fn test_parse_empty_products_array_is_accepted() {
        let parsed = parse_ingest_payload(br#"{"products": []}"#).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_top_level_fields() {
        let body = br#"{"source": "crawler", "products": [{"id": "x"}]}"#;
        assert_eq!(parse_ingest_payload(body).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        let bodies: [&[u8]; 9] = [
            b"",
            b"   ",
            b"not json",
            b"{\"products\": [",
            b"{}",
            b"[]",
            b"null",
            b"{\"items\": []}",
            b"{\"products\": null}",
        ];

        for body in bodies {
            let result = parse_ingest_payload(body);
            assert!(
                matches!(result, Err(ApiError::NoProducts)),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_array_products() {
        for body in [
            &br#"{"products": "shoe"}"#[..],
            &br#"{"products": {"id": 1}}"#[..],
            &br#"{"products": 3}"#[..],
        ] {
            assert!(parse_ingest_payload(body).is_err());
        }
    }

    // ============================================================
    // BATCH APPLICATION TESTS
    // ============================================================

    #[test]
    fn test_ingest_stores_products_with_ids() {
        let store = ProductStore::new();
        let summary = ingest_products(
            &store,
            products(json!([
                {"id": 1, "name": "Red Shoe"},
                {"id": 2, "name": "Blue Hat"},
                {"name": "No Id"}
            ])),
        );

        assert_eq!(
            summary,
            IngestSummary {
                received: 3,
                stored: 2,
                skipped: 1
            }
        );
        assert_eq!(summary.message(), "3 products ingested");
        assert_eq!(store.len(), 2);
        assert!(store.get(&ProductId::Number("1".to_string())).is_some());
        assert!(store.get(&ProductId::Number("2".to_string())).is_some());
    }

    #[test]
    fn test_ingest_missing_id_counts_but_does_not_store() {
        let store = ProductStore::new();
        let summary = ingest_products(&store, products(json!([{"name": "Ghost"}])));

        assert_eq!(summary.received, 1);
        assert_eq!(summary.skipped, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ingest_falsy_ids_are_skipped() {
        let store = ProductStore::new();
        let summary = ingest_products(
            &store,
            products(json!([
                {"id": 0, "name": "Zero"},
                {"id": "", "name": "Empty"},
                {"id": null, "name": "Null"},
                {"id": false, "name": "False"}
            ])),
        );

        assert_eq!(summary.received, 4);
        assert_eq!(summary.stored, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ingest_non_object_elements_are_skipped() {
        let store = ProductStore::new();
        let summary = ingest_products(&store, products(json!(["shoe", 42, null, [1], {"id": 9}])));

        assert_eq!(summary.received, 5);
        assert_eq!(summary.stored, 1);
        assert_eq!(summary.skipped, 4);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ingest_same_id_twice_last_write_wins() {
        let store = ProductStore::new();
        ingest_products(&store, products(json!([{"id": 1, "name": "First"}])));
        ingest_products(&store, products(json!([{"id": 1, "name": "Second"}])));

        assert_eq!(store.len(), 1);
        let stored = store.get(&ProductId::Number("1".to_string())).unwrap();
        assert_eq!(stored["name"], json!("Second"));
    }

    #[test]
    fn test_ingest_duplicate_ids_within_one_batch() {
        let store = ProductStore::new();
        let summary = ingest_products(
            &store,
            products(json!([
                {"id": "sku", "name": "Draft"},
                {"id": "sku", "name": "Final"}
            ])),
        );

        assert_eq!(summary.received, 2);
        assert_eq!(summary.stored, 2);
        assert_eq!(store.len(), 1);
        let stored = store.get(&ProductId::Text("sku".to_string())).unwrap();
        assert_eq!(stored["name"], json!("Final"));
    }

    #[test]
    fn test_ingest_string_and_numeric_ids_do_not_collide() {
        let store = ProductStore::new();
        ingest_products(
            &store,
            products(json!([{"id": 1, "name": "Number"}, {"id": "1", "name": "Text"}])),
        );
        assert_eq!(store.len(), 2);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_ingest_success() {
        let store = Arc::new(ProductStore::new());
        let body = Bytes::from_static(br#"{"products": [{"id": 5, "name": "Desk"}]}"#);

        let (status, Json(message)) = handle_ingest(Extension(store.clone()), body)
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(message, StatusMessage::success("1 products ingested"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_handle_ingest_rejects_empty_object() {
        let store = Arc::new(ProductStore::new());
        let result = handle_ingest(Extension(store.clone()), Bytes::from_static(b"{}")).await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No products found in request");
        assert!(store.is_empty());
    }
}
