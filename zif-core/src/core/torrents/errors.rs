use thiserror::Error;

/// The torrent package specific results.
pub type Result<T> = std::result::Result<T, Error>;

/// The torrent error describes exceptions which have occurred when interacting
/// with the torrent engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("torrent engine url {0} is invalid")]
    InvalidUrl(String),
    #[error("torrent {0} couldn't be found")]
    NotFound(String),
    #[error("torrent file index {0} is invalid")]
    InvalidFileIndex(usize),
    #[error("torrent byte range {0} is invalid")]
    InvalidRange(String),
    #[error("the torrent engine returned an error, {0}")]
    Engine(String),
    #[error("an io error occurred, {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
