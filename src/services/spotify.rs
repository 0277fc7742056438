use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CatalogTrack, TokenPair};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Spotify endpoints used by the service. Implemented over HTTP by [`SpotifyClient`].
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Client-credentials grant; returns a bearer token for catalog search
    async fn client_credentials_token(&self) -> Result<String>;

    /// Authorization-code grant
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenPair>;

    /// Track search limited to one result
    async fn search_track(&self, query: &str, token: &str) -> Result<Option<CatalogTrack>>;

    async fn current_user_id(&self, token: &str) -> Result<String>;

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist>;

    async fn add_tracks(&self, token: &str, playlist_id: &str, uris: &[String]) -> Result<()>;
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    accounts_url: String,
    api_url: String,
    basic_auth: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ClientCredentialsResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
    #[serde(default)]
    external_urls: ExternalUrls,
    #[serde(default)]
    uri: String,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    #[serde(default)]
    spotify: String,
}

#[derive(Debug, Deserialize)]
struct SpotifyUser {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpotifyPlaylist {
    id: String,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Debug, Serialize)]
struct AddTracksRequest<'a> {
    uris: &'a [String],
}

impl From<SpotifyTrack> for CatalogTrack {
    fn from(track: SpotifyTrack) -> Self {
        CatalogTrack {
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            url: track.external_urls.spotify,
            uri: track.uri,
        }
    }
}

/// `Basic base64(client_id:client_secret)`
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            accounts_url: config.spotify_accounts_url.trim_end_matches('/').to_string(),
            api_url: config.spotify_api_url.trim_end_matches('/').to_string(),
            basic_auth: basic_auth_header(&config.spotify_client_id, &config.spotify_client_secret),
            client: Client::new(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url)
    }

    async fn check(response: Response, context: &str) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Spotify(format!(
                "{} returned status: {} - {}",
                context, status, body
            )));
        }
        Ok(response)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| AppError::Spotify(format!("Failed to parse {} response: {}", context, e)))
    }
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn client_credentials_token(&self) -> Result<String> {
        let response = self
            .client
            .post(self.token_url())
            .header("Authorization", &self.basic_auth)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Token request failed: {}", e)))?;

        let response = Self::check(response, "Token endpoint").await?;
        let token: ClientCredentialsResponse = Self::read_json(response, "token").await?;
        Ok(token.access_token)
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenPair> {
        let response = self
            .client
            .post(self.token_url())
            .header("Authorization", &self.basic_auth)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Code exchange failed: {}", e)))?;

        let response = Self::check(response, "Token endpoint").await?;
        Self::read_json(response, "token").await
    }

    async fn search_track(&self, query: &str, token: &str) -> Result<Option<CatalogTrack>> {
        tracing::debug!("Searching Spotify for: {}", query);

        let response = self
            .client
            .get(format!("{}/search", self.api_url))
            .bearer_auth(token)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Search request failed: {}", e)))?;

        let response = Self::check(response, "Search").await?;
        let search: SearchResponse = Self::read_json(response, "search").await?;

        Ok(search
            .tracks
            .and_then(|page| page.items.into_iter().next())
            .map(CatalogTrack::from))
    }

    async fn current_user_id(&self, token: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/me", self.api_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Profile request failed: {}", e)))?;

        let response = Self::check(response, "Profile").await?;
        let user: SpotifyUser = Self::read_json(response, "profile").await?;
        Ok(user.id)
    }

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist> {
        let response = self
            .client
            .post(format!("{}/users/{}/playlists", self.api_url, user_id))
            .bearer_auth(token)
            .json(playlist)
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Create playlist request failed: {}", e)))?;

        let response = Self::check(response, "Create playlist").await?;
        let created: SpotifyPlaylist = Self::read_json(response, "playlist").await?;

        Ok(CreatedPlaylist {
            id: created.id,
            url: created.external_urls.spotify,
        })
    }

    async fn add_tracks(&self, token: &str, playlist_id: &str, uris: &[String]) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(token)
            .json(&AddTracksRequest { uris })
            .send()
            .await
            .map_err(|e| AppError::Spotify(format!("Add tracks request failed: {}", e)))?;

        Self::check(response, "Add tracks").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        // base64("client-id:client-secret")
        assert_eq!(
            basic_auth_header("client-id", "client-secret"),
            "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
        );
    }

    #[test]
    fn test_search_response_first_item() {
        let raw = r#"{
            "tracks": {
                "items": [
                    {
                        "name": "Song One",
                        "uri": "spotify:track:1",
                        "artists": [{"name": "Artist A"}, {"name": "Artist B"}],
                        "external_urls": {"spotify": "https://open.spotify.com/track/1"}
                    },
                    {
                        "name": "Song Two",
                        "uri": "spotify:track:2",
                        "artists": [],
                        "external_urls": {"spotify": "https://open.spotify.com/track/2"}
                    }
                ]
            }
        }"#;

        let search: SearchResponse = serde_json::from_str(raw).unwrap();
        let track = search
            .tracks
            .and_then(|page| page.items.into_iter().next())
            .map(CatalogTrack::from)
            .unwrap();

        assert_eq!(track.name, "Song One");
        assert_eq!(track.artists, vec!["Artist A", "Artist B"]);
        assert_eq!(track.url, "https://open.spotify.com/track/1");
        assert_eq!(track.uri, "spotify:track:1");
    }

    #[test]
    fn test_search_response_without_items() {
        let search: SearchResponse = serde_json::from_str(r#"{"tracks": {"items": []}}"#).unwrap();
        assert!(search.tracks.unwrap().items.is_empty());

        let search: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(search.tracks.is_none());
    }

    #[test]
    fn test_new_playlist_body() {
        let body = serde_json::to_value(NewPlaylist {
            name: "Sunny Vibes".to_string(),
            description: "Created with Vibe Lister".to_string(),
            public: false,
        })
        .unwrap();

        assert_eq!(body["name"], "Sunny Vibes");
        assert_eq!(body["description"], "Created with Vibe Lister");
        assert_eq!(body["public"], false);
    }
}
