//! Track store loading
//!
//! The persisted track store is a Rhythmbox library: `rhythmdb.xml` for the
//! tracks and, optionally, `playlists.xml` for static playlists. Loading
//! produces a [`Library`] that the session feeds into the playlist ring.

mod database;
mod entry;
mod error;
mod playlists;

pub use database::parse_database;
pub use error::CatalogError;
pub use playlists::parse_playlists;

use crate::model::{Library, Track};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load tracks and (if a path is given) playlists into a [`Library`]
pub fn load_library(db_path: &Path, playlists_path: Option<&Path>) -> Result<Library> {
    log::info!("Parsing track database from {:?}", db_path);
    let tracks = parse_database(db_path)?;

    let playlists = match playlists_path {
        Some(path) => {
            log::info!("Parsing playlists from {:?}", path);
            parse_playlists(path, &tracks)?
        }
        None => Vec::new(),
    };

    let mut library = Library::new();
    for track in tracks {
        library.add_track(track);
    }
    for playlist in playlists {
        library.add_playlist(playlist);
    }

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok(library)
}

/// Pick the tracks a session should play: a named playlist, or everything
pub fn select_tracks(library: &Library, playlist: Option<&str>) -> Result<Vec<Track>, CatalogError> {
    let Some(name) = playlist else {
        return Ok(library.tracks().to_vec());
    };

    let playlist = library
        .playlist(name)
        .ok_or_else(|| CatalogError::UnknownPlaylist(name.to_string()))?;

    let tracks = library.tracks_for(playlist);
    if tracks.is_empty() {
        return Err(CatalogError::EmptyPlaylist(name.to_string()));
    }
    Ok(tracks)
}

/// Convert a file:// URI to a path
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    uri.strip_prefix("file://")
        .and_then(|path| urlencoding::decode(path).ok())
        .map(|decoded| PathBuf::from(decoded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Playlist;

    #[test]
    fn test_uri_to_path_decodes() {
        assert_eq!(
            uri_to_path("file:///music/My%20Song.mp3"),
            Some(PathBuf::from("/music/My Song.mp3"))
        );
        assert_eq!(uri_to_path("http://example.com/a.mp3"), None);
    }

    #[test]
    fn test_select_tracks() {
        let mut lib = Library::new();
        lib.add_track(Track::new("a", "A", "X", 1, "file:///a"));
        lib.add_track(Track::new("b", "B", "X", 1, "file:///b"));

        let mut mix = Playlist::new("Mix".to_string());
        mix.add_track("b".to_string());
        lib.add_playlist(mix);

        let mut stale = Playlist::new("Stale".to_string());
        stale.add_track("gone".to_string());
        lib.add_playlist(stale);

        assert_eq!(select_tracks(&lib, None).unwrap().len(), 2);
        assert_eq!(select_tracks(&lib, Some("Mix")).unwrap()[0].id, "b");
        assert!(matches!(
            select_tracks(&lib, Some("Nope")),
            Err(CatalogError::UnknownPlaylist(name)) if name == "Nope"
        ));
        assert!(matches!(
            select_tracks(&lib, Some("Stale")),
            Err(CatalogError::EmptyPlaylist(_))
        ));
    }
}
