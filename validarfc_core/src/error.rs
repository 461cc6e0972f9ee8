use thiserror::Error;

/// Client-side errors raised before a validation is attempted.
///
/// Storage failures never show up here; they are logged and swallowed by
/// [`crate::ValidationService`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rfc is required")]
    MissingRfc,

    #[error("batch of {count} RFCs exceeds the limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },
}
