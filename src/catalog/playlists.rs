//! Playlist file (playlists.xml) parser
//!
//! Only static playlists are read; automatic (smart) playlists are query
//! definitions rather than track lists and are skipped.

use crate::model::{Playlist, Track};
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse playlists.xml and extract all static playlists
///
/// # Arguments
/// * `path` - Path to playlists.xml
/// * `tracks` - All tracks from the database (to resolve playlist entries)
pub fn parse_playlists(path: &Path, tracks: &[Track]) -> Result<Vec<Playlist>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open playlists: {:?}", path))?;

    let playlists = read_playlists(BufReader::new(file), tracks);

    log::info!("Parsed {} playlists", playlists.len());
    Ok(playlists)
}

pub(super) fn read_playlists<R: BufRead>(source: R, tracks: &[Track]) -> Vec<Playlist> {
    // Locations are compared decoded, so differently escaped URIs still match
    let location_to_id: HashMap<String, String> = tracks
        .iter()
        .map(|t| (normalize_location(&t.audio_locator), t.id.clone()))
        .collect();

    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut playlists = Vec::new();
    let mut current_playlist: Option<Playlist> = None;
    let mut in_location = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"playlist" => {
                    let mut playlist_name = String::from("Unnamed");
                    let mut playlist_type = String::from("static");

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => {
                                playlist_name = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            b"type" => {
                                playlist_type = String::from_utf8_lossy(&attr.value).to_string();
                            }
                            _ => {}
                        }
                    }

                    if playlist_type == "static" {
                        current_playlist = Some(Playlist::new(playlist_name));
                    } else {
                        log::debug!("Skipping {} playlist: {}", playlist_type, playlist_name);
                    }
                }
                b"location" => in_location = current_playlist.is_some(),
                _ => {}
            },

            Ok(Event::Text(e)) => {
                if in_location {
                    if let Some(ref mut playlist) = current_playlist {
                        let text = e.unescape().unwrap_or_default().to_string();
                        match location_to_id.get(&normalize_location(&text)) {
                            Some(track_id) => playlist.add_track(track_id.clone()),
                            None => log::debug!("Track not found for location: {}", text),
                        }
                    }
                }
            }

            Ok(Event::End(e)) => match e.name().as_ref() {
                b"playlist" => {
                    if let Some(playlist) = current_playlist.take() {
                        if playlist.is_empty() {
                            log::debug!("Skipping empty playlist: {}", playlist.name);
                        } else {
                            playlists.push(playlist);
                        }
                    }
                }
                b"location" => in_location = false,
                _ => {}
            },

            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("XML parsing error: {:?}", e);
                break;
            }
            _ => {}
        }

        buf.clear();
    }

    playlists
}

fn normalize_location(location: &str) -> String {
    urlencoding::decode(location)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| location.to_string())
}
