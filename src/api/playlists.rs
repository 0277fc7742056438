use crate::api::{validation_message, AppState};
use crate::error::{AppError, Result};
use crate::models::{
    CreatePlaylistRequest, GenerationRequest, PlaylistCreationResult, PlaylistResult,
};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use std::sync::Arc;
use validator::Validate;

pub fn playlist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-playlist", post(generate_playlist))
        .route("/create-spotify-playlist", post(create_spotify_playlist))
}

async fn generate_playlist(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<PlaylistResult>> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    req.validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let mood = req.mood.unwrap_or_default();

    let result = state
        .generator
        .generate(&mood, req.song_count, &req.genres)
        .await
        .map_err(|e| {
            tracing::error!("Playlist generation failed: {}", e);
            AppError::GenerationFailed
        })?;

    Ok(Json(result))
}

async fn create_spotify_playlist(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreatePlaylistRequest>, JsonRejection>,
) -> Result<Json<PlaylistCreationResult>> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    tracing::info!(
        "Creating Spotify playlist '{}' with {} requested tracks",
        req.playlist_name,
        req.tracks.len()
    );

    let result = state
        .creator
        .create_playlist(&req.session_id, &req.playlist_name, &req.tracks)
        .await
        .map_err(|e| match e {
            AppError::InvalidSession => AppError::InvalidSession,
            other => {
                tracing::error!("Playlist creation error: {}", other);
                AppError::PlaylistCreationFailed
            }
        })?;

    Ok(Json(result))
}
