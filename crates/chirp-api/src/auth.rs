use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use chirp_core::SocialService;
use chirp_types::api::{LoginRequest, RegisterRequest};

use crate::error::run_blocking;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub service: SocialService,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let account = run_blocking(&state, move |svc| svc.register(&req)).await?;
    Ok(Json(account))
}

/// One-shot credential check; no session or token is issued.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let account = run_blocking(&state, move |svc| svc.login(&req)).await?;
    Ok(Json(account))
}
