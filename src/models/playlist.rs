use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ResolvedTrack, TrackRequest};

pub const DEFAULT_SONG_COUNT: usize = 10;

fn default_song_count() -> usize {
    DEFAULT_SONG_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[validate(
        required(message = "Mood is required"),
        length(min = 1, message = "Mood is required")
    )]
    pub mood: Option<String>,
    #[serde(default = "default_song_count")]
    pub song_count: usize,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResult {
    pub playlist_name: String,
    pub tracks: Vec<ResolvedTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub tracks: Vec<TrackRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistCreationResult {
    pub success: bool,
    pub playlist_url: String,
    pub tracks_added: usize,
}
