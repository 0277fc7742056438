pub mod auth;
pub mod health;
pub mod playlists;

pub use auth::auth_routes;
pub use health::health_routes;
pub use playlists::playlist_routes;

use crate::config::Config;
use crate::services::{
    CatalogClient, CatalogResolver, OAuthService, PlaylistCreator, PlaylistGenerator,
    SessionStore, TextGenerator,
};
use axum::Router;
use std::sync::Arc;
use validator::ValidationErrors;

pub struct AppState {
    pub generator: Arc<PlaylistGenerator>,
    pub oauth: Arc<OAuthService>,
    pub creator: Arc<PlaylistCreator>,
}

impl AppState {
    pub fn new(
        text_generator: Arc<dyn TextGenerator>,
        catalog: Arc<dyn CatalogClient>,
        sessions: Arc<dyn SessionStore>,
        config: &Config,
    ) -> Self {
        let resolver = Arc::new(CatalogResolver::new(
            catalog.clone(),
            config.resolve_concurrency,
        ));

        Self {
            generator: Arc::new(PlaylistGenerator::new(
                text_generator,
                catalog.clone(),
                resolver.clone(),
            )),
            oauth: Arc::new(OAuthService::new(catalog.clone(), sessions.clone(), config)),
            creator: Arc::new(PlaylistCreator::new(catalog, sessions, resolver)),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(playlist_routes())
        .nest("/auth", auth_routes())
        .merge(health_routes())
        .with_state(state)
}

/// First human-readable message from a failed validation
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
