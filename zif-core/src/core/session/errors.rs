use std::time::Duration;

use thiserror::Error;

use crate::core::torrents::MagnetError;
use crate::core::{stream, torrents};

/// The stream session specific results.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors which can be returned by a stream request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The stream request couldn't be parsed into a magnet uri or info hash.
    #[error("stream request is invalid, {0}")]
    InvalidRequest(String),
    /// The torrent metadata wasn't received within the configured duration.
    #[error("torrent metadata wasn't received within {0:?}")]
    Timeout(Duration),
    /// The stream server couldn't be started.
    #[error("stream server failed, {0}")]
    Server(String),
    /// The torrent engine returned an error.
    #[error("torrent engine failed, {0}")]
    Torrent(String),
    /// The stream request has been superseded by a newer request.
    #[error("stream request has been cancelled")]
    Cancelled,
}

impl From<MagnetError> for Error {
    fn from(e: MagnetError) -> Self {
        Error::InvalidRequest(e.to_string())
    }
}

impl From<torrents::Error> for Error {
    fn from(e: torrents::Error) -> Self {
        Error::Torrent(e.to_string())
    }
}

impl From<stream::Error> for Error {
    fn from(e: stream::Error) -> Self {
        Error::Server(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_magnet_error() {
        let result = Error::from(MagnetError::MissingInfoHash);

        assert_eq!(
            Error::InvalidRequest("magnet uri doesn't contain a valid info hash".to_string()),
            result
        );
    }

    #[test]
    fn test_from_stream_error() {
        let result = Error::from(stream::Error::Closed);

        assert_eq!(
            Error::Server("the stream server has already been closed".to_string()),
            result
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "torrent metadata wasn't received within 2s",
            Error::Timeout(Duration::from_secs(2)).to_string()
        );
    }
}
