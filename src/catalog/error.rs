use thiserror::Error;

/// Problems choosing which tracks to play from a loaded library
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no playlist named '{0}' in the library")]
    UnknownPlaylist(String),

    #[error("playlist '{0}' has no tracks in the library")]
    EmptyPlaylist(String),
}
