//! Raw entry as read from rhythmdb.xml, before it becomes a [`Track`]

use crate::model::Track;

/// Rhythmbox track entry (as stored in rhythmdb.xml)
#[derive(Debug, Clone, Default)]
pub(super) struct StoreEntry {
    pub(super) title: Option<String>,
    pub(super) artist: Option<String>,
    pub(super) genre: Option<String>,
    pub(super) duration: Option<u32>, // seconds
    pub(super) location: Option<String>, // file:// URI
    pub(super) mb_track_id: Option<String>,
    pub(super) cover: Option<String>,
}

impl StoreEntry {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Convert to a [`Track`]. Needs at minimum a title and a location.
    ///
    /// The ID is the MusicBrainz track ID when the store has one, otherwise the
    /// md5 of the location so it stays stable across reloads.
    pub(super) fn into_track(self) -> Option<Track> {
        let title = self.title?;
        let location = self.location?;

        let id = match self.mb_track_id {
            Some(mbid) if !mbid.is_empty() => mbid,
            _ => format!("{:x}", md5::compute(location.as_bytes())),
        };

        Some(Track {
            id,
            title,
            artist: self.artist.unwrap_or_else(|| "Unknown Artist".to_string()),
            duration_seconds: self.duration.unwrap_or(0),
            audio_locator: location,
            cover_locator: self.cover,
            genre: self.genre.filter(|g| !g.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_title_and_location() {
        let mut entry = StoreEntry::new();
        entry.title = Some("Song".to_string());
        assert!(entry.clone().into_track().is_none());

        entry.location = Some("file:///a.mp3".to_string());
        let track = entry.into_track().unwrap();
        assert_eq!(track.artist, "Unknown Artist");
        assert_eq!(track.duration_seconds, 0);
        assert_eq!(track.id, format!("{:x}", md5::compute(b"file:///a.mp3")));
    }

    #[test]
    fn test_prefers_musicbrainz_id() {
        let entry = StoreEntry {
            title: Some("Song".to_string()),
            location: Some("file:///a.mp3".to_string()),
            mb_track_id: Some("mbid-1".to_string()),
            genre: Some(String::new()),
            ..StoreEntry::default()
        };
        let track = entry.into_track().unwrap();
        assert_eq!(track.id, "mbid-1");
        assert!(track.genre.is_none());
    }
}
