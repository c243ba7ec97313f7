//! Audio output seam
//!
//! Decoding and playing audio is somebody else's job; the session only tells
//! an [`AudioOutput`] which locator to play and when to stop.

use crate::catalog::uri_to_path;
use crate::model::Track;
use anyhow::Result;

/// Something that can play a track's audio
pub trait AudioOutput {
    /// Start playing `track` from the beginning, replacing whatever was playing
    fn play(&mut self, track: &Track) -> Result<()>;

    /// Stop playback
    fn stop(&mut self) -> Result<()>;
}

/// Output that only logs what it would play
#[derive(Debug, Default)]
pub struct LogOutput;

impl LogOutput {
    pub fn new() -> Self {
        Self
    }
}

impl AudioOutput for LogOutput {
    fn play(&mut self, track: &Track) -> Result<()> {
        match uri_to_path(&track.audio_locator) {
            Some(path) => log::info!("Playing {} - {} ({:?})", track.artist, track.title, path),
            None => log::info!("Playing {} - {} ({})", track.artist, track.title, track.audio_locator),
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        log::info!("Playback stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_output_accepts_any_locator() {
        let mut output = LogOutput::new();
        output
            .play(&Track::new("1", "Local", "A", 1, "file:///music/My%20Song.mp3"))
            .unwrap();
        output
            .play(&Track::new("2", "Stream", "A", 1, "http://radio.example/live"))
            .unwrap();
        output.stop().unwrap();
    }
}
