use serde::{Deserialize, Serialize};

/// A named, ordered list of track references from the track store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Track IDs (references Track::id), in playlist order
    pub track_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            track_ids: Vec::new(),
        }
    }

    /// Add a track to this playlist
    pub fn add_track(&mut self, track_id: String) {
        self.track_ids.push(track_id);
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}
