use std::fmt::Debug;
use std::ops::Range;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use derive_more::Display;
use futures::Stream;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::core::torrents;

/// The byte stream of a torrent file range.
pub type ByteStream = Pin<Box<dyn Stream<Item = torrents::Result<Bytes>> + Send>>;

/// A file within a torrent.
/// The position of the file within [TorrentHandle::files] is the file index of the torrent.
#[derive(Debug, Display, Clone, PartialEq, Serialize, Deserialize)]
#[display("{} ({} bytes)", path, size)]
pub struct TorrentFile {
    /// The relative path of the file within the torrent.
    pub path: String,
    /// The total size in bytes of the file.
    pub size: u64,
}

/// The download statistics of a torrent.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq)]
#[display("{:.2}% ({}/{} bytes)", progress * 100.0, downloaded, total_size)]
pub struct TorrentStats {
    /// The download progress between 0.0 and 1.0.
    pub progress: f32,
    pub downloaded: u64,
    pub total_size: u64,
    pub finished: bool,
}

/// An engine owned reference to a torrent of which the metadata is known.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait TorrentHandle: Debug + Send + Sync {
    /// Returns the lowercase hex info hash of the torrent.
    fn info_hash(&self) -> &str;

    /// Returns the name of the torrent.
    fn name(&self) -> &str;

    /// Returns the files of the torrent in their original torrent ordering.
    fn files(&self) -> Vec<TorrentFile>;

    /// Retrieve the current download statistics of the torrent.
    async fn stats(&self) -> torrents::Result<TorrentStats>;

    /// Read the given byte range of a torrent file.
    /// The engine is responsible for prioritizing the pieces of the requested range.
    ///
    /// # Arguments
    ///
    /// * `file_index` - The index of the file within the torrent.
    /// * `range` - The byte range to read, with an exclusive end.
    async fn read(&self, file_index: usize, range: Range<u64>) -> torrents::Result<ByteStream>;
}

/// The torrent engine which owns the download of torrents.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait TorrentEngine: Debug + Send + Sync {
    /// Look up a torrent which is already known by the engine.
    ///
    /// It returns `None` when the engine doesn't know the given info hash.
    async fn get(&self, info_hash: &str) -> torrents::Result<Option<Arc<dyn TorrentHandle>>>;

    /// Add the given magnet uri to the engine.
    /// The returned future resolves once the metadata of the torrent is known.
    ///
    /// # Arguments
    ///
    /// * `magnet_uri` - The magnet uri of the torrent.
    /// * `destination` - The directory in which the torrent files are stored.
    async fn add(
        &self,
        magnet_uri: &str,
        destination: &Path,
    ) -> torrents::Result<Arc<dyn TorrentHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torrent_stats_display() {
        let stats = TorrentStats {
            progress: 0.5,
            downloaded: 512,
            total_size: 1024,
            finished: false,
        };

        assert_eq!("50.00% (512/1024 bytes)", stats.to_string());
    }

    #[test]
    fn test_torrent_file_display() {
        let file = TorrentFile {
            path: "lorem/ipsum.mp4".to_string(),
            size: 2048,
        };

        assert_eq!("lorem/ipsum.mp4 (2048 bytes)", file.to_string());
    }
}
