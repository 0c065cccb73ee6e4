use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, trace, warn};
use reqwest::header::RANGE;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::core::torrents;
use crate::core::torrents::{
    ByteStream, Error, TorrentEngine, TorrentFile, TorrentHandle, TorrentStats,
};

const TORRENTS_PATH: &str = "torrents";

/// A torrent engine which delegates the torrent downloads to an rqbit compatible
/// engine daemon over its HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTorrentEngine {
    client: Client,
    base_url: Url,
}

impl HttpTorrentEngine {
    /// Create a new engine client for the given daemon base url, e.g. `http://127.0.0.1:3030`.
    pub fn new(base_url: &str) -> torrents::Result<Self> {
        let mut url = Url::parse(base_url).map_err(|_| Error::InvalidUrl(base_url.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(path.as_str());
        }

        Ok(Self {
            client: Client::new(),
            base_url: url,
        })
    }

    /// Returns the base url of the engine daemon.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn create_handle(&self, details: TorrentDetails) -> Arc<dyn TorrentHandle> {
        let id = details
            .id
            .map(|e| e.to_string())
            .unwrap_or_else(|| details.info_hash.clone());
        let files = details
            .files
            .unwrap_or_default()
            .into_iter()
            .map(|file| TorrentFile {
                path: if file.components.is_empty() {
                    file.name
                } else {
                    file.components.join("/")
                },
                size: file.length,
            })
            .collect();

        Arc::new(HttpTorrentHandle {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            id,
            name: details.name.unwrap_or_else(|| details.info_hash.clone()),
            info_hash: details.info_hash.to_ascii_lowercase(),
            files,
        })
    }
}

#[async_trait]
impl TorrentEngine for HttpTorrentEngine {
    async fn get(&self, info_hash: &str) -> torrents::Result<Option<Arc<dyn TorrentHandle>>> {
        let url = join_url(&self.base_url, &format!("{}/{}", TORRENTS_PATH, info_hash))?;
        trace!("Requesting torrent details from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Engine(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Torrent {} is unknown to the engine", info_hash);
            return Ok(None);
        }

        let details = parse_response::<TorrentDetails>(response).await?;
        Ok(Some(self.create_handle(details)))
    }

    async fn add(
        &self,
        magnet_uri: &str,
        destination: &Path,
    ) -> torrents::Result<Arc<dyn TorrentHandle>> {
        let mut url = join_url(&self.base_url, TORRENTS_PATH)?;
        url.query_pairs_mut()
            .append_pair("overwrite", "true")
            .append_pair("output_folder", destination.to_string_lossy().as_ref());

        debug!("Adding torrent {} to the engine", magnet_uri);
        let response = self
            .client
            .post(url)
            .body(magnet_uri.to_string())
            .send()
            .await
            .map_err(|e| Error::Engine(e.to_string()))?;

        let response = parse_response::<AddTorrentResponse>(response).await?;
        let mut details = response.details;
        if details.id.is_none() {
            details.id = response.id;
        }

        Ok(self.create_handle(details))
    }
}

/// A torrent which is owned by the engine daemon.
#[derive(Debug)]
pub struct HttpTorrentHandle {
    client: Client,
    base_url: Url,
    id: String,
    info_hash: String,
    name: String,
    files: Vec<TorrentFile>,
}

#[async_trait]
impl TorrentHandle for HttpTorrentHandle {
    fn info_hash(&self) -> &str {
        self.info_hash.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn files(&self) -> Vec<TorrentFile> {
        self.files.clone()
    }

    async fn stats(&self) -> torrents::Result<TorrentStats> {
        let url = join_url(
            &self.base_url,
            &format!("{}/{}/stats/v1", TORRENTS_PATH, self.id),
        )?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Engine(e.to_string()))?;
        let stats = parse_response::<StatsResponse>(response).await?;
        let progress = if stats.total_bytes == 0 {
            0.0
        } else {
            stats.progress_bytes as f32 / stats.total_bytes as f32
        };

        Ok(TorrentStats {
            progress,
            downloaded: stats.progress_bytes,
            total_size: stats.total_bytes,
            finished: stats.finished,
        })
    }

    async fn read(&self, file_index: usize, range: Range<u64>) -> torrents::Result<ByteStream> {
        let file = self
            .files
            .get(file_index)
            .ok_or(Error::InvalidFileIndex(file_index))?;
        if range.start > range.end || range.end > file.size {
            return Err(Error::InvalidRange(format!("{:?}", range)));
        }
        if range.is_empty() {
            return Ok(Box::pin(futures::stream::empty()));
        }

        let url = join_url(
            &self.base_url,
            &format!("{}/{}/stream/{}", TORRENTS_PATH, self.id, file_index),
        )?;
        trace!("Reading bytes {:?} of {} from {}", range, file.path, url);
        let response = self
            .client
            .get(url)
            .header(RANGE, format!("bytes={}-{}", range.start, range.end - 1))
            .send()
            .await
            .map_err(|e| Error::Engine(e.to_string()))?;

        match response.status() {
            StatusCode::PARTIAL_CONTENT => {}
            StatusCode::OK if range.start == 0 && range.end == file.size => {}
            status => {
                warn!("Engine responded with {} for bytes {:?} of {}", status, range, file.path);
                return Err(Error::Engine(format!("unexpected stream status {}", status)));
            }
        }

        Ok(Box::pin(
            response
                .bytes_stream()
                .map_err(|e| Error::Engine(e.to_string())),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TorrentDetails {
    id: Option<usize>,
    info_hash: String,
    name: Option<String>,
    files: Option<Vec<TorrentDetailsFile>>,
}

#[derive(Debug, Deserialize)]
struct TorrentDetailsFile {
    name: String,
    #[serde(default)]
    components: Vec<String>,
    length: u64,
}

#[derive(Debug, Deserialize)]
struct AddTorrentResponse {
    id: Option<usize>,
    details: TorrentDetails,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    progress_bytes: u64,
    total_bytes: u64,
    #[serde(default)]
    finished: bool,
}

fn join_url(base: &Url, path: &str) -> torrents::Result<Url> {
    base.join(path)
        .map_err(|_| Error::InvalidUrl(format!("{}{}", base, path)))
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> torrents::Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Engine(format!("{}, {}", status, body)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Engine(e.to_string()))?;
    serde_json::from_slice::<T>(&body)
        .map_err(|e| Error::Engine(format!("invalid response body, {}", e)))
}
