//! Session configuration

use super::CommandError;
use std::fmt;
use std::str::FromStr;

/// What happens when a track finishes playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Advance, but stop after the last track in ring order
    #[default]
    Off,

    /// Advance and wrap around forever
    All,

    /// Replay the same track
    One,
}

impl FromStr for RepeatMode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(RepeatMode::Off),
            "all" => Ok(RepeatMode::All),
            "one" | "track" => Ok(RepeatMode::One),
            other => Err(CommandError::InvalidRepeat(other.to_string())),
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        };
        f.write_str(name)
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Behaviour at the end of a track
    pub repeat: RepeatMode,

    /// Shuffle the ring as soon as it is loaded
    pub shuffle_on_start: bool,

    /// Track ID to select before playback starts (None = first track)
    pub start_track: Option<String>,

    /// Playlist to load from the library (None = every track)
    pub playlist: Option<String>,
}

impl SessionConfig {
    /// Create a configuration with repeat off and no shuffle
    pub fn new() -> Self {
        Self::default()
    }

    /// Set repeat mode
    pub fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Shuffle on start
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_on_start = shuffle;
        self
    }

    /// Start from a specific track
    pub fn with_start_track(mut self, id: String) -> Self {
        self.start_track = Some(id);
        self
    }

    /// Load a specific playlist
    pub fn with_playlist(mut self, name: String) -> Self {
        self.playlist = Some(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_mode_parsing() {
        assert_eq!("ALL".parse::<RepeatMode>().unwrap(), RepeatMode::All);
        assert_eq!(" one ".parse::<RepeatMode>().unwrap(), RepeatMode::One);
        assert_eq!("none".parse::<RepeatMode>().unwrap(), RepeatMode::Off);
        assert!("sometimes".parse::<RepeatMode>().is_err());
        assert_eq!(RepeatMode::All.to_string(), "all");
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_repeat(RepeatMode::One)
            .with_shuffle(true)
            .with_start_track("t1".to_string())
            .with_playlist("Mix".to_string());

        assert_eq!(config.repeat, RepeatMode::One);
        assert!(config.shuffle_on_start);
        assert_eq!(config.start_track.as_deref(), Some("t1"));
        assert_eq!(config.playlist.as_deref(), Some("Mix"));
    }
}
