//! Product Storage Module
//!
//! Implements the process-wide in-memory product catalogue.
//!
//! ## Core Concepts
//! - **Keying**: Every record is stored under the `ProductId` derived from its `id` field.
//! - **Overwrite**: A later write for the same id replaces the earlier record (last-write-wins).
//! - **Sharing**: `ProductStore` is built once at startup and handed to handlers as `Arc<ProductStore>`.
//! - **Concurrency**: Writes are atomic per key; a scan may observe a batch half applied.

pub mod memory;
pub mod types;
