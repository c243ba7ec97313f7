//! Data model shared by the catalog loader, the playlist ring and the session
//!
//! These types are independent of where tracks come from (the Rhythmbox
//! store) and of how they are played.

mod library;
mod playlist;
mod track;

pub use library::Library;
pub use playlist::Playlist;
pub use track::Track;
