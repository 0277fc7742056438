use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth credentials held for a user between the callback and playlist creation
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            created_at: Utc::now(),
        }
    }
}

/// Token endpoint response for the authorization-code grant
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CallbackRequest {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
}
