//! Read-only views over the ring: listings, filters and totals

use super::PlaylistRing;
use crate::format::format_duration;
use crate::model::Track;

impl PlaylistRing {
    /// All tracks in ring order, starting at head
    pub fn all_tracks(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    /// Tracks whose title, artist or genre contains `query`, ignoring case.
    ///
    /// A blank query matches every track with a non-empty text field; callers
    /// wanting "no filter" should use [`PlaylistRing::all_tracks`] instead.
    pub fn search(&self, query: &str) -> Vec<Track> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|t| t.matches_text(&needle))
            .cloned()
            .collect()
    }

    /// Tracks whose genre equals `genre`, ignoring case
    pub fn by_genre(&self, genre: &str) -> Vec<Track> {
        self.iter().filter(|t| t.has_genre(genre)).cloned().collect()
    }

    /// Sum of all track durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.iter().map(|t| u64::from(t.duration_seconds)).sum()
    }

    /// [`PlaylistRing::total_duration`] as `H:MM:SS` or `M:SS`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.total_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlaylistRing {
        let mut ring = PlaylistRing::new();
        ring.insert(
            Track::new("1", "Shape of You", "Ed Sheeran", 233, "file:///1.mp3").with_genre("Pop"),
        );
        ring.insert(
            Track::new("2", "Blinding Lights", "The Weeknd", 200, "file:///2.mp3")
                .with_genre("Synthpop"),
        );
        ring.insert(Track::new("3", "Untitled", "Nobody", 0, "file:///3.mp3"));
        ring
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let ring = sample();
        for query in ["SHEERAN", "pop", "shape"] {
            let hits = ring.search(query);
            assert_eq!(hits[0].id, "1", "query {}", query);
        }
    }

    #[test]
    fn test_search_returns_ring_order() {
        let ring = sample();
        let hits: Vec<String> = ring.search("POP").into_iter().map(|t| t.id).collect();
        assert_eq!(hits, vec!["1", "2"]);
        assert!(ring.search("jazz").is_empty());
    }

    #[test]
    fn test_blank_search_matches_everything_with_text() {
        assert_eq!(sample().search("").len(), 3);
    }

    #[test]
    fn test_by_genre_is_exact() {
        let ring = sample();
        let hits = ring.by_genre("pop");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(ring.by_genre("SYNTHPOP")[0].id, "2");
        assert!(ring.by_genre("").is_empty());
    }

    #[test]
    fn test_total_duration() {
        let ring = sample();
        assert_eq!(ring.total_duration(), 433);
        assert_eq!(ring.formatted_duration(), "7:13");
        assert_eq!(PlaylistRing::new().formatted_duration(), "0:00");
    }
}
