//! Search Service Module
//!
//! Answers name lookups against the in-memory product catalogue.
//!
//! ## Overview
//! There is no index: every query walks the whole `ProductStore` and keeps the
//! records whose `name` contains the query, ignoring case. Matching records are
//! returned whole, in whatever order the store yields them.
//!
//! ## Submodules
//! - **`engine`**: The matching predicate and the linear scan.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Query parameters and the response body.

pub mod engine;
pub mod handlers;
pub mod types;
