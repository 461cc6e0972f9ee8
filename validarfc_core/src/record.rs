use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One validation attempt. Append-only: never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRecord {
    pub rfc: String,
    pub is_valid: bool,
    pub created_at: DateTime<Utc>,
}

impl ValidationRecord {
    /// Build a record stamped with the current time.
    ///
    /// Used when storage could not assign the timestamp itself.
    #[must_use]
    pub fn now(rfc: impl Into<String>, is_valid: bool) -> Self {
        Self {
            rfc: rfc.into(),
            is_valid,
            created_at: Utc::now(),
        }
    }
}
