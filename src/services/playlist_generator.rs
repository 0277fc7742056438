use crate::error::Result;
use crate::models::{PlaylistResult, ResolvedTrack};
use crate::services::openai::TextGenerator;
use crate::services::parser::{parse_candidates, playlist_name};
use crate::services::resolver::CatalogResolver;
use crate::services::spotify::CatalogClient;
use std::sync::Arc;
use tracing::info;

/// Mood -> generated text -> candidate lines -> Spotify tracks
pub struct PlaylistGenerator {
    text_generator: Arc<dyn TextGenerator>,
    catalog: Arc<dyn CatalogClient>,
    resolver: Arc<CatalogResolver>,
}

impl PlaylistGenerator {
    pub fn new(
        text_generator: Arc<dyn TextGenerator>,
        catalog: Arc<dyn CatalogClient>,
        resolver: Arc<CatalogResolver>,
    ) -> Self {
        Self {
            text_generator,
            catalog,
            resolver,
        }
    }

    pub async fn generate(
        &self,
        mood: &str,
        song_count: usize,
        genres: &[String],
    ) -> Result<PlaylistResult> {
        info!("Generating playlist for mood: {}", mood);

        let raw_playlist = self
            .text_generator
            .generate(mood, song_count, genres)
            .await?;

        let candidates = parse_candidates(&raw_playlist, song_count);
        info!("Parsed {} candidate songs", candidates.len());

        let token = self.catalog.client_credentials_token().await?;

        let tracks: Vec<ResolvedTrack> = self
            .resolver
            .resolve_all(candidates, &token)
            .await
            .into_iter()
            .map(ResolvedTrack::from)
            .collect();

        info!("Resolved {} tracks on Spotify", tracks.len());

        Ok(PlaylistResult {
            playlist_name: playlist_name(&raw_playlist),
            tracks,
        })
    }
}
