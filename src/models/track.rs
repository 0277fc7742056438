use serde::{Deserialize, Serialize};

/// Best match returned by a catalog search
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTrack {
    pub name: String,
    pub artists: Vec<String>,
    pub url: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedTrack {
    pub title: String,
    pub artist: String,
    pub url: String,
}

impl From<CatalogTrack> for ResolvedTrack {
    fn from(track: CatalogTrack) -> Self {
        ResolvedTrack {
            title: track.name,
            artist: track.artists.join(", "),
            url: track.url,
        }
    }
}

/// A (title, artist) pair the client wants added to a playlist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

impl TrackRequest {
    pub fn search_query(&self) -> String {
        format!("{} {}", self.title, self.artist)
    }
}
