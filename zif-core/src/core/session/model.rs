use std::fmt::{Display, Formatter};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::session::Error;
use crate::core::torrents::{Magnet, TorrentFile, TorrentHandle};

const PLAYBACK_PROTOCOL: &str = "http";
const PLAYBACK_HOST: &str = "localhost";

/// The states of a [crate::core::session::StreamSessionManager].
#[derive(Debug, Display, Copy, Clone, PartialEq)]
pub enum SessionState {
    /// No stream is active.
    Idle,
    /// The torrent of a stream request is being looked up or added to the engine.
    Resolving,
    /// The stream server of the torrent is being bound.
    Binding,
    /// The stream server is accepting playback requests.
    Ready,
    /// The last stream request failed.
    Error,
}

/// The events of a [crate::core::session::StreamSessionManager].
#[derive(Debug, Display, Clone, PartialEq)]
pub enum StreamSessionEvent {
    /// Invoked when the session state has changed.
    #[display("Stream session state changed to {}", _0)]
    StateChanged(SessionState),
    /// Invoked when the torrent of the latest stream request is being served.
    #[display("Torrent {} is ready to be streamed", _0)]
    TorrentReady(StreamNotification),
    /// Invoked when the latest stream request failed.
    #[display("Stream request failed, {}", _0)]
    StreamFailed(Error),
}

/// A request to stream the torrent identified by a magnet uri or bare info hash.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamRequest {
    magnet: Magnet,
}

impl StreamRequest {
    /// Parse the given stream identifier.
    ///
    /// It returns [Error::InvalidRequest] when the identifier is neither a magnet uri nor an info hash.
    pub fn parse(value: &str) -> Result<Self, Error> {
        Ok(Self {
            magnet: Magnet::parse_identifier(value)?,
        })
    }

    /// Returns the lowercase hex info hash of the requested torrent.
    pub fn info_hash(&self) -> &str {
        self.magnet.info_hash.as_str()
    }

    /// Returns the magnet uri to add to the torrent engine.
    pub fn magnet_uri(&self) -> &str {
        self.magnet.uri()
    }
}

impl Display for StreamRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.magnet.display_name {
            Some(name) => write!(f, "{} ({})", self.magnet.info_hash, name),
            None => write!(f, "{}", self.magnet.info_hash),
        }
    }
}

/// The notification that a torrent is being served by a stream server.
///
/// The `port` always belongs to the server which was alive when the notification was emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamNotification {
    pub info_hash: String,
    pub name: String,
    /// The files of the torrent in their original torrent ordering.
    pub files: Vec<TorrentFile>,
    pub port: u16,
}

impl StreamNotification {
    /// Create a new notification for the given torrent served on the given port.
    pub fn new(torrent: &dyn TorrentHandle, port: u16) -> Self {
        Self {
            info_hash: torrent.info_hash().to_string(),
            name: torrent.name().to_string(),
            files: torrent.files(),
            port,
        }
    }

    /// Returns the original torrent file index of the given file path.
    pub fn file_index(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|file| file.path == path)
    }

    /// Returns the playback url of the given file path.
    /// The url always uses the original torrent file index, regardless of how a file list has been sorted.
    pub fn playback_url(&self, path: &str) -> Option<Url> {
        self.file_index(path)
            .and_then(|index| self.playback_url_by_index(index))
    }

    /// Returns the playback url of the file at the given original torrent file index.
    pub fn playback_url_by_index(&self, file_index: usize) -> Option<Url> {
        if file_index >= self.files.len() {
            return None;
        }

        Url::parse(
            format!(
                "{}://{}:{}/{}",
                PLAYBACK_PROTOCOL, PLAYBACK_HOST, self.port, file_index
            )
            .as_str(),
        )
        .ok()
    }
}

impl Display for StreamNotification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} files) on port {}",
            self.info_hash,
            self.files.len(),
            self.port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryTorrent;

    fn create_notification() -> StreamNotification {
        let torrent = InMemoryTorrent::new("eadaf0efea39406914414d359e0ea16416409bd7", "Lorem")
            .with_file("Lorem/sample.mkv", "sample")
            .with_file("Lorem/episode 2.mkv", "episode 2")
            .with_file("Lorem/episode 1.mkv", "episode 1");

        StreamNotification::new(&torrent, 8900)
    }

    #[test]
    fn test_stream_request_parse() {
        let result = StreamRequest::parse(
            "magnet:?xt=urn:btih:EADAF0EFEA39406914414D359E0EA16416409BD7&dn=Lorem",
        )
        .expect("expected a valid request");

        assert_eq!("eadaf0efea39406914414d359e0ea16416409bd7", result.info_hash());
        assert_eq!(
            "eadaf0efea39406914414d359e0ea16416409bd7 (Lorem)",
            result.to_string()
        );
    }

    #[test]
    fn test_stream_request_parse_invalid() {
        let result = StreamRequest::parse("magnet:?dn=Lorem");

        assert_eq!(
            Err(Error::InvalidRequest(
                "magnet uri doesn't contain a valid info hash".to_string()
            )),
            result
        );
    }

    #[test]
    fn test_notification_playback_url_uses_original_index() {
        let notification = create_notification();
        let mut sorted_files = notification.files.clone();
        sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!("Lorem/episode 1.mkv", sorted_files[0].path);
        let result = notification
            .playback_url(sorted_files[0].path.as_str())
            .expect("expected a playback url");

        assert_eq!("http://localhost:8900/2", result.as_str());
    }

    #[test]
    fn test_notification_playback_url_unknown_file() {
        let notification = create_notification();

        assert_eq!(None, notification.playback_url("Lorem/ipsum.mkv"));
        assert_eq!(None, notification.playback_url_by_index(3));
    }

    #[test]
    fn test_notification_display() {
        let notification = create_notification();

        assert_eq!(
            "eadaf0efea39406914414d359e0ea16416409bd7 (3 files) on port 8900",
            notification.to_string()
        );
    }

    #[test]
    fn test_session_event_display() {
        assert_eq!(
            "Stream session state changed to Ready",
            StreamSessionEvent::StateChanged(SessionState::Ready).to_string()
        );
        assert_eq!(
            "Stream request failed, stream request has been cancelled",
            StreamSessionEvent::StreamFailed(Error::Cancelled).to_string()
        );
    }
}
