//! HTTP wrapper: one profile route plus a liveness probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::fetcher::Fetcher;
use crate::profile::ProfileRecord;
use crate::scraper;

pub struct AppState {
    pub fetcher: Fetcher,
    pub analyzed_by: String,
}

#[derive(Serialize)]
struct ProfileEnvelope<'a> {
    success: bool,
    analyzed_by: &'a str,
    profile: ProfileRecord,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    message: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/tiktok/:username", get(handle_profile))
        .layer(cors)
        .with_state(state)
}

pub async fn start(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Profile analyzer listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Response {
    match scraper::scrape_profile(&state.fetcher, &username).await {
        Ok(profile) => Json(ProfileEnvelope {
            success: true,
            analyzed_by: &state.analyzed_by,
            profile,
        })
        .into_response(),
        Err(e) => {
            warn!(identifier = %username, error = ?e, "profile request failed");
            let body = ErrorEnvelope {
                success: false,
                message: e.boundary_message(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}
