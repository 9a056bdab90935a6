//! Ingestion Data Types

/// Outcome of applying one ingest batch to the store.
///
/// `received` is what the client is told; `stored` and `skipped` only feed the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub received: usize,
    pub stored: usize,
    pub skipped: usize,
}

impl IngestSummary {
    pub fn message(&self) -> String {
        format!("{} products ingested", self.received)
    }
}
