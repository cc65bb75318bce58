use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::AiState;
use crate::config::Config;
use crate::db::DatabaseState;
use crate::error::BackendError;
use crate::handlers::{
    analyze::analyze_handler, health::health_handler,
    transactions::list_transactions_handler,
};

/// Shared, read-only handles built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<DatabaseState>,
    pub ai: Arc<AiState>,
}

impl AppState {
    pub fn new(database: DatabaseState, ai: AiState) -> Self {
        Self {
            database: Arc::new(database),
            ai: Arc::new(ai),
        }
    }

    /// Configure whichever integrations have credentials.
    pub fn from_config(cfg: &Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let database = DatabaseState::from_settings(http, cfg.supabase());
        let ai = AiState::from_key(cfg.gemini_key());
        Ok(Self::new(database, ai))
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(health_handler))
        .route("/api/transactions", get(list_transactions_handler))
        .route("/api/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
