//! Ring Playlist - circular playlist core for a music player
//!
//! The heart of this library is [`PlaylistRing`], a circular doubly linked
//! list of tracks with wrap-around navigation, shuffle/restore and simple
//! filtering. Around it sit a loader for a Rhythmbox track store and a small
//! playback session that drives the ring from user commands.

pub mod catalog;
pub mod format;
pub mod model;
pub mod playlist;
pub mod session;

pub use model::Track;
pub use playlist::{Direction, PlaylistRing};
pub use session::{Session, SessionConfig};
