use std::env;

pub const DEFAULT_REDIRECT_URI: &str = "https://vibe-lister-ui.onrender.com";
pub const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 3600;
/// Ten years
pub const MAX_SESSION_TTL_SECONDS: i64 = 315_360_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
    pub spotify_accounts_url: String,
    pub spotify_api_url: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). "*" allows any origin.
    pub cors_origins: Vec<String>,
    /// Seconds a session stays valid after the OAuth callback. `None` keeps sessions until restart.
    pub session_ttl_seconds: Option<i64>,
    /// Number of catalog searches in flight at once while resolving a batch
    pub resolve_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let session_ttl_seconds = session_ttl(env::var("SESSION_TTL_SECONDS").ok().as_deref());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_redirect_uri: env::var("SPOTIFY_REDIRECT_URI")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            spotify_accounts_url: env::var("SPOTIFY_ACCOUNTS_URL")
                .unwrap_or_else(|_| DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string()),
            spotify_api_url: env::var("SPOTIFY_API_URL")
                .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string()),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            cors_origins,
            session_ttl_seconds,
            resolve_concurrency: env::var("RESOLVE_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(4)
                .max(1),
        })
    }
}

/// `0` or a negative value disables expiry. Unparseable or out-of-range values use the default.
fn session_ttl(raw: Option<&str>) -> Option<i64> {
    let Some(raw) = raw else {
        return Some(DEFAULT_SESSION_TTL_SECONDS);
    };

    match raw.trim().parse::<i64>() {
        Ok(secs) if secs <= 0 => None,
        Ok(secs) if secs <= MAX_SESSION_TTL_SECONDS => Some(secs),
        _ => {
            tracing::warn!(
                "Ignoring SESSION_TTL_SECONDS={}, using {}",
                raw,
                DEFAULT_SESSION_TTL_SECONDS
            );
            Some(DEFAULT_SESSION_TTL_SECONDS)
        }
    }
}

fn required(key: &str) -> Result<String, anyhow::Error> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} environment variable must be set", key))
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            spotify_client_id: "client-id".to_string(),
            spotify_client_secret: "client-secret".to_string(),
            spotify_redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            spotify_accounts_url: DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            openai_api_key: "sk-test".to_string(),
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            openai_model: "gpt-4".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3001,
            cors_origins: vec!["*".to_string()],
            session_ttl_seconds: None,
            resolve_concurrency: 1,
        }
    }
}
