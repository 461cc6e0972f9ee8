//! HTTP surface for RFC validation.
//!
//! # Routes
//!
//! ```text
//! GET  /health              {status, timestamp, version, database}
//! POST /api/validate        {rfc}          -> {rfc, is_valid, created_at}
//! POST /api/validate/bulk   {rfcs: [...]}  -> {count, results: [...]}
//! GET  /api/history?page=&per_page=        -> {total, page, per_page, items}
//! ```
//!
//! Storage failures never fail a request: validation still answers, and
//! history degrades to an empty page.

pub mod api;
pub mod error;
pub mod server;

pub use error::{ApiError, Result, ServerError};
pub use server::{Server, ServerState};

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
