#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Core types for RFC validation.
//!
//! - [`rfc`]: the lexical matcher and input normalization
//! - [`repository`]: storage seams for recording and reading validations
//! - [`history`]: pagination of the validation history
//! - [`service`]: best-effort orchestration of the three

pub mod error;
pub mod history;
pub mod record;
pub mod repository;
pub mod rfc;
pub mod service;

pub use error::ValidationError;
pub use history::{HistoryPage, PageLimits, PageRequest};
pub use record::ValidationRecord;
pub use repository::{HistoryReader, ValidationRecorder, ValidationRepo};
pub use rfc::{RfcFormat, RfcKind, is_valid_rfc, normalize};
pub use service::{BatchResult, ValidationService};
