//! In-process stand-ins for the upstream APIs.

use crate::error::{AppError, Result};
use crate::models::{CatalogTrack, TokenPair};
use crate::services::openai::TextGenerator;
use crate::services::spotify::{CatalogClient, CreatedPlaylist, NewPlaylist};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn catalog_track(name: &str, artist: &str, id: &str) -> CatalogTrack {
    CatalogTrack {
        name: name.to_string(),
        artists: vec![artist.to_string()],
        url: format!("https://open.spotify.com/track/{}", id),
        uri: format!("spotify:track:{}", id),
    }
}

#[derive(Default)]
pub struct FakeTextGenerator {
    pub reply: String,
    pub fail: bool,
    pub prompts: Mutex<Vec<(String, usize, Vec<String>)>>,
}

impl FakeTextGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate(&self, mood: &str, song_count: usize, genres: &[String]) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((mood.to_string(), song_count, genres.to_vec()));
        if self.fail {
            return Err(AppError::OpenAi("API returned status: 500".to_string()));
        }
        Ok(self.reply.clone())
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    /// Search query -> best match. Queries not listed return no items.
    pub matches: HashMap<String, CatalogTrack>,
    /// Search queries that fail at the transport level
    pub failing_queries: HashSet<String>,
    pub fail_token: bool,
    pub fail_exchange: bool,
    pub fail_profile: bool,
    pub fail_create: bool,
    pub fail_attach: bool,
    pub calls: Mutex<Vec<String>>,
    pub searches: Mutex<Vec<(String, String)>>,
    pub attached: Mutex<Vec<(String, Vec<String>)>>,
    pub created: Mutex<Vec<NewPlaylist>>,
}

impl FakeCatalog {
    pub fn with_match(mut self, query: &str, track: CatalogTrack) -> Self {
        self.matches.insert(query.to_string(), track);
        self
    }

    pub fn with_failure(mut self, query: &str) -> Self {
        self.failing_queries.insert(query.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn client_credentials_token(&self) -> Result<String> {
        self.record("token");
        if self.fail_token {
            return Err(AppError::Spotify("Token endpoint returned status: 401".to_string()));
        }
        Ok("app-token".to_string())
    }

    async fn exchange_code(&self, code: &str, _redirect_uri: &str) -> Result<TokenPair> {
        self.record("exchange");
        if self.fail_exchange {
            return Err(AppError::Spotify("invalid_grant".to_string()));
        }
        Ok(TokenPair {
            access_token: format!("access-{}", code),
            refresh_token: format!("refresh-{}", code),
        })
    }

    async fn search_track(&self, query: &str, token: &str) -> Result<Option<CatalogTrack>> {
        self.record("search");
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), token.to_string()));
        if self.failing_queries.contains(query) {
            return Err(AppError::Spotify("Search request failed".to_string()));
        }
        Ok(self.matches.get(query).cloned())
    }

    async fn current_user_id(&self, _token: &str) -> Result<String> {
        self.record("me");
        if self.fail_profile {
            return Err(AppError::Spotify("Profile returned status: 401".to_string()));
        }
        Ok("listener".to_string())
    }

    async fn create_playlist(
        &self,
        _token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist> {
        self.record("create");
        if self.fail_create {
            return Err(AppError::Spotify("Create playlist returned status: 403".to_string()));
        }
        self.created.lock().unwrap().push(playlist.clone());
        Ok(CreatedPlaylist {
            id: format!("{}-playlist", user_id),
            url: format!("https://open.spotify.com/playlist/{}-playlist", user_id),
        })
    }

    async fn add_tracks(&self, _token: &str, playlist_id: &str, uris: &[String]) -> Result<()> {
        self.record("add");
        if self.fail_attach {
            return Err(AppError::Spotify("Add tracks returned status: 502".to_string()));
        }
        self.attached
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }
}
