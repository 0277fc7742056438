use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Session;
use crate::services::session_store::{generate_session_id, SessionStore};
use crate::services::spotify::CatalogClient;
use reqwest::Url;
use std::sync::Arc;

pub const SCOPES: &str = "playlist-modify-public playlist-modify-private";

/// Spotify authorization-code flow: builds the consent URL and turns the
/// returned code into a stored session.
pub struct OAuthService {
    catalog: Arc<dyn CatalogClient>,
    sessions: Arc<dyn SessionStore>,
    client_id: String,
    redirect_uri: String,
    authorize_url: String,
}

impl OAuthService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        sessions: Arc<dyn SessionStore>,
        config: &Config,
    ) -> Self {
        Self {
            catalog,
            sessions,
            client_id: config.spotify_client_id.clone(),
            redirect_uri: config.spotify_redirect_uri.clone(),
            authorize_url: format!(
                "{}/authorize",
                config.spotify_accounts_url.trim_end_matches('/')
            ),
        }
    }

    pub fn build_authorization_url(&self) -> Result<String> {
        let url = Url::parse_with_params(
            &self.authorize_url,
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("scope", SCOPES),
                ("redirect_uri", self.redirect_uri.as_str()),
            ],
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid authorize URL: {}", e)))?;

        Ok(url.into())
    }

    /// Exchanges an authorization code and stores the resulting tokens.
    /// Returns the new session id; nothing is stored when the exchange fails.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        if code.is_empty() {
            tracing::warn!("OAuth callback without an authorization code");
            return Err(AppError::AuthenticationFailed);
        }

        let tokens = self
            .catalog
            .exchange_code(code, &self.redirect_uri)
            .await
            .map_err(|e| {
                tracing::error!("OAuth error: {}", e);
                AppError::AuthenticationFailed
            })?;

        let session_id = generate_session_id();
        self.sessions
            .put(
                session_id.clone(),
                Session::new(tokens.access_token, tokens.refresh_token),
            )
            .await;

        tracing::debug!("Created Spotify session");
        Ok(session_id)
    }
}
