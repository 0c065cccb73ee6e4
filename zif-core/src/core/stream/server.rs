use crate::core::stream::{content_type, Error, Range, Result};
use crate::core::torrents::TorrentHandle;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, RANGE};
use axum::http::{HeaderMap, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{http, Router};
use log::{debug, error, trace, warn};
use std::fmt::Debug;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

const ACCEPT_RANGES_TYPE: &str = "bytes";
const PLAIN_TEXT_TYPE: &str = "text/plain";
/// The max time active connections are given to finish after the server has been closed.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(3);

/// The HTTP server serving byte ranges of the files of exactly one torrent.
///
/// Files are addressed by their index within the original torrent file ordering,
/// e.g. `http://localhost:<port>/0`.
#[derive(Debug)]
pub struct StreamServer {
    addr: SocketAddr,
    inner: Arc<InnerStreamServer>,
    cancellation_token: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl StreamServer {
    /// Bind a new stream server for the given torrent on an OS assigned port of the given address.
    pub async fn bind(torrent: Arc<dyn TorrentHandle>, address: IpAddr) -> Result<Self> {
        Self::with_port(torrent, address, 0).await
    }

    /// Try to bind a new stream server for the given torrent on the specified port.
    /// If the port is already in use, an [Error::Bind] will be returned.
    pub async fn with_port(
        torrent: Arc<dyn TorrentHandle>,
        address: IpAddr,
        port: u16,
    ) -> Result<Self> {
        let bind_addr = SocketAddr::new(address, port);
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|e| Error::Bind(bind_addr.to_string(), e))?;
        let addr = listener.local_addr()?;
        let inner = Arc::new(InnerStreamServer { torrent });
        let cancellation_token = CancellationToken::new();

        let router = Router::new()
            .route("/{file_index}", get(Self::do_get).head(Self::do_head))
            .with_state(inner.clone());
        let shutdown_signal = cancellation_token.clone().cancelled_owned();
        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(shutdown_signal)
            .await
            {
                error!("Stream server {} failed, {}", addr, e);
            }
            trace!("Stream server {} main loop ended", addr);
        });

        debug!(
            "Stream server of torrent {} is listening on {}",
            inner.torrent.info_hash(),
            addr
        );
        Ok(Self {
            addr,
            inner,
            cancellation_token,
            task: Mutex::new(Some(task)),
        })
    }

    /// Returns the local address on which the server is listening.
    pub fn addr(&self) -> &SocketAddr {
        &self.addr
    }

    /// Returns the local port on which the server is listening.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Close the server.
    /// The returned future completes once the listener has been released.
    /// It returns [Error::Closed] when the server has already been closed.
    pub async fn close(&self) -> Result<()> {
        let mut task = self.task.lock().await.take().ok_or(Error::Closed)?;
        self.cancellation_token.cancel();

        if time::timeout(CLOSE_TIMEOUT, &mut task).await.is_err() {
            warn!(
                "Stream server {} connections didn't finish within {:?}, aborting them",
                self.addr, CLOSE_TIMEOUT
            );
            task.abort();
            let _ = task.await;
        }
        debug!("Stream server {} has been closed", self.addr);
        Ok(())
    }

    async fn do_get(
        State(state): State<Arc<InnerStreamServer>>,
        Path(file_index): Path<usize>,
        headers: HeaderMap,
    ) -> Response<Body> {
        state.handle_file_request(file_index, &headers, true).await
    }

    async fn do_head(
        State(state): State<Arc<InnerStreamServer>>,
        Path(file_index): Path<usize>,
        headers: HeaderMap,
    ) -> Response<Body> {
        state.handle_file_request(file_index, &headers, false).await
    }
}

impl Drop for StreamServer {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        if let Ok(mut task) = self.task.try_lock() {
            if let Some(task) = task.take() {
                task.abort();
            }
        }
    }
}

#[derive(Debug)]
struct InnerStreamServer {
    torrent: Arc<dyn TorrentHandle>,
}

impl InnerStreamServer {
    async fn handle_file_request(
        &self,
        file_index: usize,
        headers: &HeaderMap,
        include_body: bool,
    ) -> Response<Body> {
        let files = self.torrent.files();
        let file = match files.get(file_index) {
            None => {
                warn!(
                    "Torrent {} has no file with index {}",
                    self.torrent.info_hash(),
                    file_index
                );
                return Self::not_found_response();
            }
            Some(file) => file,
        };

        let (status, bytes) = match Self::extract_range(headers) {
            None => (StatusCode::OK, 0..file.size),
            Some(range) => match range.resolve(file.size) {
                Ok(bytes) => (StatusCode::PARTIAL_CONTENT, bytes),
                Err(e) => {
                    debug!("Unable to serve {}, {}", file.path, e);
                    return Self::request_not_satisfiable_response(file.size);
                }
            },
        };
        trace!(
            "Serving bytes {:?} of {} (index {}) with status {}",
            bytes,
            file.path,
            file_index,
            status
        );

        let mut builder = Response::builder()
            .status(status)
            .header(ACCEPT_RANGES, ACCEPT_RANGES_TYPE)
            .header(CONTENT_TYPE, content_type(file.path.as_str()))
            .header(CONTENT_LENGTH, bytes.end - bytes.start);
        if status == StatusCode::PARTIAL_CONTENT {
            builder = builder.header(
                CONTENT_RANGE,
                format!("bytes {}-{}/{}", bytes.start, bytes.end - 1, file.size),
            );
        }

        if !include_body || bytes.is_empty() {
            return builder
                .body(Body::empty())
                .unwrap_or_else(Self::handle_internal_error);
        }

        match self.torrent.read(file_index, bytes).await {
            Ok(stream) => builder
                .body(Body::from_stream(stream))
                .unwrap_or_else(Self::handle_internal_error),
            Err(e) => {
                error!("Failed to read torrent file {}, {}", file.path, e);
                (StatusCode::INTERNAL_SERVER_ERROR, Body::empty()).into_response()
            }
        }
    }

    /// Try to extract the first range of the range header.
    /// If the header is not present or invalid, `None` will be returned.
    fn extract_range(headers: &HeaderMap) -> Option<Range> {
        let value = headers.get(RANGE)?.to_str().ok()?;

        match Range::parse(value) {
            Ok(ranges) => ranges.into_iter().next(),
            Err(e) => {
                warn!("Range header {} is invalid, {}", value, e);
                None
            }
        }
    }

    fn not_found_response() -> Response<Body> {
        Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap_or_else(Self::handle_internal_error)
    }

    /// The response for when the requested [Range] couldn't be satisfied.
    fn request_not_satisfiable_response(len: u64) -> Response<Body> {
        Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header(CONTENT_TYPE, PLAIN_TEXT_TYPE)
            .header(CONTENT_RANGE, format!("bytes */{}", len))
            .body(Body::empty())
            .unwrap_or_else(Self::handle_internal_error)
    }

    /// Handle an internal error that occurred while building a response.
    fn handle_internal_error(err: http::Error) -> Response<Body> {
        error!("Stream server request failed, {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, Body::empty()).into_response()
    }
}
