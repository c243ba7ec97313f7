//! Track database (rhythmdb.xml) parser

use super::entry::StoreEntry;
use crate::model::Track;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse rhythmdb.xml and extract all song entries, in file order
pub fn parse_database(path: &Path) -> Result<Vec<Track>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open track database: {:?}", path))?;

    let tracks = read_entries(BufReader::new(file));

    log::info!("Parsed {} tracks from track database", tracks.len());
    Ok(tracks)
}

/// Read `<entry type="song">` elements from any XML source.
///
/// A malformed document yields the entries read before the error.
pub(super) fn read_entries<R: BufRead>(source: R) -> Vec<Track> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut current_entry: Option<StoreEntry> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match name.as_ref() {
                    b"entry" => {
                        let is_song = e
                            .attributes()
                            .flatten()
                            .any(|attr| attr.key.as_ref() == b"type" && attr.value.as_ref() == b"song");
                        if is_song {
                            current_entry = Some(StoreEntry::new());
                        }
                    }
                    _ => {
                        if current_entry.is_some() {
                            current_element = String::from_utf8_lossy(name.as_ref()).to_string();
                        }
                    }
                }
            }

            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();

                    match current_element.as_str() {
                        "title" => entry.title = Some(text),
                        "artist" => entry.artist = Some(text),
                        "genre" => entry.genre = Some(text),
                        "location" => entry.location = Some(text),
                        "mb-trackid" => entry.mb_track_id = Some(text),
                        "cover" => entry.cover = Some(text),
                        "duration" => match text.parse::<u32>() {
                            Ok(duration) => entry.duration = Some(duration),
                            Err(_) => log::warn!("Ignoring bad duration {:?}", text),
                        },
                        _ => {}
                    }
                }
            }

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"entry" {
                    if let Some(entry) = current_entry.take() {
                        match entry.into_track() {
                            Some(track) => tracks.push(track),
                            None => log::warn!("Skipping entry without title or location"),
                        }
                    }
                }
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!(
                    "XML parsing error at position {}: {:?}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }

        buf.clear();
    }

    tracks
}
