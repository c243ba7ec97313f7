//! Playback session
//!
//! A [`Session`] is the single owner of the playlist ring for one listening
//! session. It turns user [`Command`]s and "track ended" notifications into
//! ring operations, and tells the [`AudioOutput`] what to play.

mod command;
mod config;
mod output;

pub use command::{Command, CommandError};
pub use config::{RepeatMode, SessionConfig};
pub use output::{AudioOutput, LogOutput};

use crate::format::format_duration;
use crate::model::Track;
use crate::playlist::{Direction, PlaylistRing};
use anyhow::Result;
use std::fmt;

/// Outcome of a command, printable for the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The (new) current track, None when the ring is empty
    Track(Option<Track>),

    /// A listing or filter result, in ring order
    Tracks(Vec<Track>),

    /// Result of a remove
    Removed { id: String, removed: bool },

    /// Shuffle state after shuffle/restore
    Order { shuffled: bool },

    /// Track count and total running time
    Summary { count: usize, total_seconds: u64 },

    Repeat(RepeatMode),

    /// Playback reached the end with repeat off
    Stopped,

    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Track(Some(track)) => write!(f, "> {}", describe(track)),
            Response::Track(None) => write!(f, "no tracks available"),
            Response::Tracks(tracks) if tracks.is_empty() => write!(f, "no matches"),
            Response::Tracks(tracks) => {
                for (i, track) in tracks.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}  {}", track.id, describe(track))?;
                }
                Ok(())
            }
            Response::Removed { id, removed: true } => write!(f, "removed {}", id),
            Response::Removed { id, removed: false } => write!(f, "no track {}", id),
            Response::Order { shuffled: true } => write!(f, "shuffle on"),
            Response::Order { shuffled: false } => write!(f, "shuffle off"),
            Response::Summary {
                count,
                total_seconds,
            } => write!(f, "{} tracks, {}", count, format_duration(*total_seconds)),
            Response::Repeat(mode) => write!(f, "repeat {}", mode),
            Response::Stopped => write!(f, "end of playlist"),
            Response::Quit => write!(f, "bye"),
        }
    }
}

fn describe(track: &Track) -> String {
    format!(
        "{} - {} [{}]",
        track.artist,
        track.title,
        format_duration(u64::from(track.duration_seconds))
    )
}

/// One listening session: the ring, the output, and the settings
pub struct Session<O: AudioOutput> {
    config: SessionConfig,
    ring: PlaylistRing,
    output: O,
    playing: bool,
}

impl<O: AudioOutput> Session<O> {
    /// Create a session with an empty ring
    pub fn new(config: SessionConfig, output: O) -> Self {
        Self {
            config,
            ring: PlaylistRing::new(),
            output,
            playing: false,
        }
    }

    /// Load `tracks` into the ring, apply the start settings and start playing
    pub fn start(&mut self, tracks: Vec<Track>) -> Result<()> {
        self.ring.rebuild(tracks);

        if self.config.shuffle_on_start {
            self.ring.shuffle();
        }

        if let Some(ref id) = self.config.start_track {
            if self.ring.select_by_id(id).is_none() {
                log::warn!("Start track {} not found, starting from the top", id);
            }
        }

        log::info!(
            "Session started: {} tracks, {}",
            self.ring.len(),
            self.ring.formatted_duration()
        );

        self.play_current()
    }

    /// Replace the ring contents after the upstream track list changed.
    ///
    /// Playback continues on the same track if it survived; otherwise the new
    /// current track starts.
    pub fn reload(&mut self, tracks: Vec<Track>) -> Result<()> {
        let before = self.ring.current().map(|t| t.id.clone());
        self.ring.rebuild(tracks);
        let after = self.ring.current().map(|t| t.id.clone());

        if before != after {
            self.play_current()?;
        }
        Ok(())
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        log::debug!("Executing {:?}", command);

        let response = match command {
            Command::Next => self.step(Direction::Forward)?,
            Command::Prev => self.step(Direction::Backward)?,
            Command::Select(id) => {
                if self.ring.select_by_id(&id).is_some() {
                    self.play_current()?;
                }
                self.current_response()
            }
            Command::Remove(id) => {
                let was_current = self.ring.is_current(&id);
                let removed = self.ring.remove(&id);
                if removed && was_current {
                    self.play_current()?;
                }
                Response::Removed { id, removed }
            }
            Command::Shuffle => {
                self.ring.shuffle();
                Response::Order {
                    shuffled: self.ring.is_shuffled(),
                }
            }
            Command::Restore => {
                self.ring.restore_order();
                Response::Order {
                    shuffled: self.ring.is_shuffled(),
                }
            }
            Command::List => Response::Tracks(self.ring.all_tracks()),
            Command::Search(query) => {
                // Blank means no filter, not "match everything with text"
                if query.trim().is_empty() {
                    Response::Tracks(self.ring.all_tracks())
                } else {
                    Response::Tracks(self.ring.search(query.trim()))
                }
            }
            Command::Genre(genre) => Response::Tracks(self.ring.by_genre(&genre)),
            Command::Current => self.current_response(),
            Command::Total => Response::Summary {
                count: self.ring.len(),
                total_seconds: self.ring.total_duration(),
            },
            Command::Ended => self.track_ended()?,
            Command::Repeat(mode) => {
                self.config.repeat = mode;
                Response::Repeat(mode)
            }
            Command::Quit => {
                self.stop()?;
                Response::Quit
            }
        };

        Ok(response)
    }

    /// Handle the output reporting that the current track finished
    pub fn track_ended(&mut self) -> Result<Response> {
        if self.ring.is_empty() {
            return Ok(Response::Track(None));
        }

        match self.config.repeat {
            RepeatMode::One => {
                self.play_current()?;
                Ok(self.current_response())
            }
            RepeatMode::All => self.step(Direction::Forward),
            RepeatMode::Off if self.ring.at_tail() => {
                self.stop()?;
                Ok(Response::Stopped)
            }
            RepeatMode::Off => self.step(Direction::Forward),
        }
    }

    /// The playlist ring
    pub fn ring(&self) -> &PlaylistRing {
        &self.ring
    }

    /// The audio output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Current settings
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether the output is currently playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn step(&mut self, direction: Direction) -> Result<Response> {
        if self.ring.advance(direction).is_some() {
            self.play_current()?;
        }
        Ok(self.current_response())
    }

    fn current_response(&self) -> Response {
        Response::Track(self.ring.current().cloned())
    }

    fn play_current(&mut self) -> Result<()> {
        match self.ring.current() {
            Some(track) => {
                self.output.play(track)?;
                self.playing = true;
                Ok(())
            }
            None => self.stop(),
        }
    }

    fn stop(&mut self) -> Result<()> {
        if self.playing {
            self.output.stop()?;
            self.playing = false;
        }
        Ok(())
    }
}
