use serde::{Deserialize, Serialize};

/// A single playable track, as supplied by the track store
///
/// The ring never mutates a track once it is inserted; navigation links live
/// in the ring's nodes, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique identifier for this track
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Track duration in whole seconds
    pub duration_seconds: u32,

    /// Where the audio can be fetched from (usually a file:// URI)
    pub audio_locator: String,

    /// Cover art locator (optional)
    pub cover_locator: Option<String>,

    /// Genre (optional)
    pub genre: Option<String>,
}

impl Track {
    /// Create a track without cover art or genre
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_seconds: u32,
        audio_locator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            duration_seconds,
            audio_locator: audio_locator.into(),
            cover_locator: None,
            genre: None,
        }
    }

    /// Set the genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the cover art locator
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover_locator = Some(cover.into());
        self
    }

    /// Case-insensitive substring match against title, artist or genre.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self
                .genre
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(needle))
    }

    /// Case-insensitive exact genre match
    pub(crate) fn has_genre(&self, genre: &str) -> bool {
        self.genre
            .as_deref()
            .is_some_and(|g| g.to_lowercase() == genre.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_text_field() {
        let track = Track::new("1", "Shape of You", "Ed Sheeran", 233, "file:///a.mp3")
            .with_genre("Pop");

        assert!(track.matches_text("sheeran"));
        assert!(track.matches_text("pop"));
        assert!(track.matches_text("shape"));
        assert!(!track.matches_text("rock"));
    }

    #[test]
    fn test_genre_is_exact_but_case_insensitive() {
        let track = Track::new("1", "Title", "Artist", 10, "file:///a.mp3").with_genre("Hip Hop");

        assert!(track.has_genre("hip hop"));
        assert!(track.has_genre("HIP HOP"));
        assert!(!track.has_genre("hip"));

        let untagged = Track::new("2", "Title", "Artist", 10, "file:///b.mp3");
        assert!(!untagged.has_genre(""));
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let track = Track::new("1", "T", "A", 5, "file:///x.mp3").with_cover("cover.jpg");

        assert_eq!(track.duration_seconds, 5);
        assert_eq!(track.cover_locator.as_deref(), Some("cover.jpg"));
        assert!(track.genre.is_none());
    }
}
