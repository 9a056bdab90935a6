//! Product Search Service Library
//!
//! A small HTTP service that keeps product records in memory and searches them
//! by name. The binary (`main.rs`) only wires configuration, logging and the
//! listener around what is defined here.
//!
//! ## Modules
//! - **`storage`**: The process-wide `ProductStore` keyed by product id.
//! - **`ingestion`**: `POST /api/ingest`, batch upsert of schema-less product records.
//! - **`search`**: `GET /api/search`, case-insensitive substring scan over product names.
//! - **`api`**: Router assembly with CORS and panic handling.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Client-facing error responses.

pub mod api;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;

pub use api::create_app;
pub use storage::memory::ProductStore;
