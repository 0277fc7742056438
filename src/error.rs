use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Invalid session")]
    InvalidSession,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Spotify error: {0}")]
    Spotify(String),

    #[error("OpenAI error: {0}")]
    OpenAi(String),

    #[error("Server error generating playlist")]
    GenerationFailed,

    #[error("Failed to create playlist")]
    PlaylistCreationFailed,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationFailed => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidSession => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::GenerationFailed | AppError::PlaylistCreationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Spotify(ref e) => {
                tracing::error!("Spotify error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::OpenAi(ref e) => {
                tracing::error!("OpenAI error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
