pub mod oauth;
pub mod openai;
pub mod parser;
pub mod playlist_creator;
pub mod playlist_generator;
pub mod resolver;
pub mod session_store;
pub mod spotify;

#[cfg(test)]
pub mod testing;

pub use oauth::OAuthService;
pub use openai::{OpenAiClient, TextGenerator};
pub use playlist_creator::PlaylistCreator;
pub use playlist_generator::PlaylistGenerator;
pub use resolver::CatalogResolver;
pub use session_store::{InMemorySessionStore, SessionStore};
pub use spotify::{CatalogClient, SpotifyClient};
