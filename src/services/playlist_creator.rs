use crate::error::{AppError, Result};
use crate::models::{PlaylistCreationResult, TrackRequest};
use crate::services::resolver::CatalogResolver;
use crate::services::session_store::SessionStore;
use crate::services::spotify::{CatalogClient, NewPlaylist};
use std::sync::Arc;
use tracing::info;

pub const PLAYLIST_DESCRIPTION: &str = "Created with Vibe Lister";

/// Creates a private playlist in the session owner's account and fills it
/// with whichever requested tracks can be found.
pub struct PlaylistCreator {
    catalog: Arc<dyn CatalogClient>,
    sessions: Arc<dyn SessionStore>,
    resolver: Arc<CatalogResolver>,
}

impl PlaylistCreator {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        sessions: Arc<dyn SessionStore>,
        resolver: Arc<CatalogResolver>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            resolver,
        }
    }

    pub async fn create_playlist(
        &self,
        session_id: &str,
        playlist_name: &str,
        tracks: &[TrackRequest],
    ) -> Result<PlaylistCreationResult> {
        let session = self
            .sessions
            .get(session_id)
            .await
            .ok_or(AppError::InvalidSession)?;
        let token = session.access_token.as_str();

        let user_id = self.catalog.current_user_id(token).await?;

        let playlist = self
            .catalog
            .create_playlist(
                token,
                &user_id,
                &NewPlaylist {
                    name: playlist_name.to_string(),
                    description: PLAYLIST_DESCRIPTION.to_string(),
                    public: false,
                },
            )
            .await?;

        info!("Created playlist {} for user {}", playlist.id, user_id);

        let queries = tracks.iter().map(TrackRequest::search_query).collect();
        let uris: Vec<String> = self
            .resolver
            .resolve_all(queries, token)
            .await
            .into_iter()
            .map(|track| track.uri)
            .collect();

        if !uris.is_empty() {
            self.catalog.add_tracks(token, &playlist.id, &uris).await?;
        }

        info!(
            "Added {} of {} requested tracks to playlist {}",
            uris.len(),
            tracks.len(),
            playlist.id
        );

        Ok(PlaylistCreationResult {
            success: true,
            playlist_url: playlist.url,
            tracks_added: uris.len(),
        })
    }
}
