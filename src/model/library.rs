use super::{Playlist, Track};
use std::collections::HashMap;

/// Everything loaded from the track store: tracks in store order plus playlists
#[derive(Debug, Clone)]
pub struct Library {
    /// All tracks, in the order the store listed them
    tracks: Vec<Track>,

    /// Track ID -> position in `tracks` (first occurrence wins)
    index: HashMap<String, usize>,

    /// All playlists
    playlists: Vec<Playlist>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            index: HashMap::new(),
            playlists: Vec::new(),
        }
    }

    /// Add a track to the library
    pub fn add_track(&mut self, track: Track) {
        if self.index.contains_key(&track.id) {
            log::warn!("Duplicate track id {} ({}), keeping both", track.id, track.title);
        } else {
            self.index.insert(track.id.clone(), self.tracks.len());
        }
        self.tracks.push(track);
    }

    /// Add a playlist to the library
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Get a track by ID
    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.index.get(id).map(|&pos| &self.tracks[pos])
    }

    /// Get all tracks, in store order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Find a playlist by name (exact match)
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Resolve a playlist's entries to tracks, skipping IDs the library lacks
    pub fn tracks_for(&self, playlist: &Playlist) -> Vec<Track> {
        playlist
            .track_ids
            .iter()
            .filter_map(|id| self.get_track(id).cloned())
            .collect()
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, title: &str) -> Track {
        Track::new(id, title, "Test Artist", 180, format!("file:///music/{}.mp3", id))
    }

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
    }

    #[test]
    fn test_add_track_keeps_store_order() {
        let mut lib = Library::new();
        lib.add_track(track("b", "Second"));
        lib.add_track(track("a", "First"));

        assert_eq!(lib.track_count(), 2);
        assert_eq!(lib.tracks()[0].id, "b");
        assert_eq!(lib.get_track("a").unwrap().title, "First");
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut lib = Library::new();
        lib.add_track(track("x", "Original"));
        lib.add_track(track("x", "Copy"));

        assert_eq!(lib.track_count(), 2);
        assert_eq!(lib.get_track("x").unwrap().title, "Original");
    }

    #[test]
    fn test_tracks_for_playlist_skips_unknown_ids() {
        let mut lib = Library::new();
        lib.add_track(track("t1", "One"));
        lib.add_track(track("t2", "Two"));

        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add_track("t2".to_string());
        playlist.add_track("missing".to_string());
        playlist.add_track("t1".to_string());
        lib.add_playlist(playlist);

        let resolved = lib.tracks_for(lib.playlist("Mix").unwrap());
        let ids: Vec<&str> = resolved.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1"]);
        assert!(lib.playlist("mix").is_none());
    }
}
