//! Validation and history on top of a [`ValidationRepo`].
//!
//! Persistence is best-effort. A validation result never depends on the
//! store, so storage errors are logged and the caller still gets an answer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::history::{HistoryPage, PageLimits, PageRequest};
use crate::rfc::{RfcFormat, normalize};
use crate::{ValidationError, ValidationRecord, ValidationRepo};

/// Default cap on RFCs accepted in one batch.
pub const DEFAULT_MAX_BATCH: usize = 5000;

/// Outcome of a bulk validation, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchResult {
    pub count: usize,
    pub results: Vec<ValidationRecord>,
}

pub struct ValidationService {
    repo: Arc<dyn ValidationRepo>,
    format: RfcFormat,
    limits: PageLimits,
    max_batch: usize,
}

impl ValidationService {
    #[must_use]
    pub fn new(repo: Arc<dyn ValidationRepo>) -> Self {
        Self {
            repo,
            format: RfcFormat::default(),
            limits: PageLimits::default(),
            max_batch: DEFAULT_MAX_BATCH,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: RfcFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_page_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch;
        self
    }

    #[must_use]
    pub const fn format(&self) -> RfcFormat {
        self.format
    }

    #[must_use]
    pub const fn page_limits(&self) -> &PageLimits {
        &self.limits
    }

    /// Normalize, match and record a single RFC.
    pub async fn validate(&self, raw: &str) -> Result<ValidationRecord, ValidationError> {
        let rfc = normalize(raw);
        if rfc.is_empty() {
            return Err(ValidationError::MissingRfc);
        }

        let is_valid = self.format.is_match(&rfc);
        debug!("Validated {rfc}: is_valid={is_valid}");

        Ok(self.record_best_effort(rfc, is_valid).await)
    }

    /// Validate many RFCs at once. Blank entries are skipped.
    pub async fn validate_batch(&self, raws: &[String]) -> Result<BatchResult, ValidationError> {
        let rfcs: Vec<String> = raws
            .iter()
            .map(|raw| normalize(raw))
            .filter(|rfc| !rfc.is_empty())
            .collect();

        if rfcs.len() > self.max_batch {
            return Err(ValidationError::BatchTooLarge {
                count: rfcs.len(),
                limit: self.max_batch,
            });
        }

        let entries: Vec<(String, bool)> = rfcs
            .into_iter()
            .map(|rfc| {
                let is_valid = self.format.is_match(&rfc);
                (rfc, is_valid)
            })
            .collect();

        let results = if entries.is_empty() {
            Vec::new()
        } else {
            match self.repo.record_batch(&entries).await {
                Ok(records) => records,
                Err(e) => {
                    warn!("Failed to record batch of {} validations: {e}", entries.len());
                    entries
                        .into_iter()
                        .map(|(rfc, is_valid)| ValidationRecord::now(rfc, is_valid))
                        .collect()
                }
            }
        };

        debug!("Validated batch of {} RFCs", results.len());
        Ok(BatchResult {
            count: results.len(),
            results,
        })
    }

    /// Read one page of history. An unreadable store yields an empty page
    /// with `total == 0`.
    pub async fn history(&self, request: PageRequest) -> HistoryPage {
        match self.read_page(request).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to read validation history: {e}");
                HistoryPage::empty(request)
            }
        }
    }

    /// Whether the backing store currently answers.
    pub async fn storage_available(&self) -> bool {
        match self.repo.ping().await {
            Ok(()) => true,
            Err(e) => {
                debug!("Storage ping failed: {e}");
                false
            }
        }
    }

    async fn read_page(&self, request: PageRequest) -> anyhow::Result<HistoryPage> {
        let total = self.repo.count().await?;
        let items = self
            .repo
            .list_recent(request.offset(), request.per_page)
            .await?;

        Ok(HistoryPage {
            total,
            page: request.page,
            per_page: request.per_page,
            items,
        })
    }

    async fn record_best_effort(&self, rfc: String, is_valid: bool) -> ValidationRecord {
        match self.repo.record(&rfc, is_valid).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to record validation of {rfc}: {e}");
                ValidationRecord::now(rfc, is_valid)
            }
        }
    }
}
