//! Ingestion Service Module
//!
//! Accepts batches of product records and writes them into the `ProductStore`.
//!
//! ## Workflow
//! 1. **Parse**: Reads the raw request body as JSON, whatever the `Content-Type`.
//! 2. **Validate**: Requires a top-level `products` array; nothing else is checked.
//! 3. **Store**: Upserts each element that has a usable `id`, silently skipping the rest.
//! 4. **Report**: Answers with the number of elements received, stored or not.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
