use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{AuthUrlResponse, CallbackRequest, SessionResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/spotify", get(authorize))
        .route("/callback", post(callback))
}

async fn authorize(State(state): State<Arc<AppState>>) -> Result<Json<AuthUrlResponse>> {
    let auth_url = state.oauth.build_authorization_url()?;
    Ok(Json(AuthUrlResponse { auth_url }))
}

async fn callback(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Malformed OAuth callback body: {}", e.body_text());
        AppError::AuthenticationFailed
    })?;

    let session_id = state.oauth.exchange_code(&req.code).await?;
    Ok(Json(SessionResponse { session_id }))
}
