use async_trait::async_trait;

use crate::ValidationRecord;

#[async_trait]
pub trait ValidationRecorder: Send + Sync {
    /// Append a validation result. The timestamp is assigned here, not by
    /// the caller.
    async fn record(&self, rfc: &str, is_valid: bool) -> anyhow::Result<ValidationRecord>;

    /// Append several results, in order. Stops at the first failure.
    async fn record_batch(
        &self,
        entries: &[(String, bool)],
    ) -> anyhow::Result<Vec<ValidationRecord>> {
        let mut records = Vec::with_capacity(entries.len());
        for (rfc, is_valid) in entries {
            records.push(self.record(rfc, *is_valid).await?);
        }
        Ok(records)
    }
}

#[async_trait]
pub trait HistoryReader: Send + Sync {
    async fn count(&self) -> anyhow::Result<u64>;

    /// Records ordered newest first.
    async fn list_recent(&self, offset: u64, limit: u64) -> anyhow::Result<Vec<ValidationRecord>>;
}

/// The single table behind both the recorder and the reader.
#[async_trait]
pub trait ValidationRepo: ValidationRecorder + HistoryReader {
    /// Cheap liveness probe of the backing store.
    async fn ping(&self) -> anyhow::Result<()>;
}
