pub mod playlist;
pub mod session;
pub mod track;

pub use playlist::{
    CreatePlaylistRequest, GenerationRequest, PlaylistCreationResult, PlaylistResult,
};
pub use session::{AuthUrlResponse, CallbackRequest, Session, SessionResponse, TokenPair};
pub use track::{CatalogTrack, ResolvedTrack, TrackRequest};
