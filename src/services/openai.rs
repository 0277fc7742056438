use crate::config::Config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are a playlist curator.";

/// Produces free-text playlist suggestions for a mood
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, mood: &str, song_count: usize, genres: &[String]) -> Result<String>;
}

/// Builds the user prompt. The genre clause is only present when genres were requested.
pub fn build_prompt(mood: &str, song_count: usize, genres: &[String]) -> String {
    let genre_clause = if genres.is_empty() {
        String::new()
    } else {
        format!(
            ". IMPORTANT: Only include songs from one of these genres: {}. Do not include any songs from other genres.",
            genres.join(", ")
        )
    };

    format!(
        "Generate a fun playlist name and {} song suggestions (artist + title) for this mood: {}{}",
        song_count, mood, genre_clause
    )
}

pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    model: String,
    http_client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, mood: &str, song_count: usize, genres: &[String]) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(mood, song_count, genres),
                },
            ],
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::OpenAi(format!("Failed to call chat completions: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::OpenAi(format!(
                "API returned status: {} - {}",
                status, body
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::OpenAi(format!("Failed to parse response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::OpenAi("Response contained no message content".to_string()))?;

        tracing::debug!(
            "Generated playlist text: {}",
            content.chars().take(300).collect::<String>()
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_genres() {
        let prompt = build_prompt("late night drive", 10, &[]);
        assert_eq!(
            prompt,
            "Generate a fun playlist name and 10 song suggestions (artist + title) for this mood: late night drive"
        );
        assert!(!prompt.contains("IMPORTANT"));
    }

    #[test]
    fn test_prompt_with_genres() {
        let genres = vec!["synthwave".to_string(), "city pop".to_string()];
        let prompt = build_prompt("late night drive", 5, &genres);

        assert!(prompt.starts_with(
            "Generate a fun playlist name and 5 song suggestions (artist + title) for this mood: late night drive"
        ));
        assert!(prompt.contains(
            ". IMPORTANT: Only include songs from one of these genres: synthwave, city pop. Do not include any songs from other genres."
        ));
    }

    #[test]
    fn test_chat_response_shape() {
        let raw = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Sunny Vibes\nA - B"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Sunny Vibes\nA - B")
        );
    }
}
