//! Router, handlers and the serve loop.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use chrono::Utc;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use validarfc_core::{BatchResult, HistoryPage, PageRequest, ValidationRecord, ValidationService};

use crate::api::{
    BulkValidateRequest, DatabaseStatus, HealthResponse, HistoryQuery, ValidateRequest,
};
use crate::{ApiError, Result, ServerError};

/// State shared across handlers
pub struct ServerState {
    pub service: Arc<ValidationService>,
}

impl ServerState {
    #[must_use]
    pub const fn new(service: Arc<ValidationService>) -> Self {
        Self { service }
    }
}

pub struct Server {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl Server {
    #[must_use]
    pub fn new(addr: SocketAddr, service: Arc<ValidationService>) -> Self {
        Self {
            addr,
            state: Arc::new(ServerState::new(service)),
        }
    }

    /// Parse `host:port` into a listen address.
    pub fn parse_addr(host: &str, port: u16) -> Result<SocketAddr> {
        format!("{host}:{port}")
            .parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{host}:{port}: {e}")))
    }

    #[must_use]
    pub fn state(&self) -> Arc<ServerState> {
        self.state.clone()
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Self::router(self.state.clone())
    }

    pub fn router(state: Arc<ServerState>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/api/validate", post(Self::handle_validate))
            .route("/api/validate/bulk", post(Self::handle_validate_bulk))
            .route("/api/history", get(Self::handle_history))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind and serve until Ctrl+C.
    pub async fn start(&self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("ValidaRFC server listening on {}", addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }

    // HTTP handlers

    async fn handle_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
        let database = if state.service.storage_available().await {
            DatabaseStatus::Up
        } else {
            DatabaseStatus::Down
        };

        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: crate::VERSION.to_string(),
            database,
        })
    }

    async fn handle_validate(
        State(state): State<Arc<ServerState>>,
        payload: std::result::Result<Json<ValidateRequest>, JsonRejection>,
    ) -> std::result::Result<Json<ValidationRecord>, ApiError> {
        let Json(request) = payload?;
        let record = state.service.validate(&request.rfc).await?;
        Ok(Json(record))
    }

    async fn handle_validate_bulk(
        State(state): State<Arc<ServerState>>,
        payload: std::result::Result<Json<BulkValidateRequest>, JsonRejection>,
    ) -> std::result::Result<Json<BatchResult>, ApiError> {
        let Json(request) = payload?;
        let result = state.service.validate_batch(&request.rfcs).await?;
        Ok(Json(result))
    }

    async fn handle_history(
        State(state): State<Arc<ServerState>>,
        query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
    ) -> Json<HistoryPage> {
        let query = query.map(|Query(q)| q).unwrap_or_default();
        let request = PageRequest::from_query(
            query.page.as_deref(),
            query.per_page.as_deref(),
            state.service.page_limits(),
        );
        Json(state.service.history(request).await)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
