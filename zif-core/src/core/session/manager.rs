use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use fx_callback::{Callback, MultiThreadedCallback, Subscription};
use log::{debug, info, trace, warn};
use tokio::sync::Mutex;
use tokio::{fs, select, time};
use tokio_util::sync::CancellationToken;

use crate::core::config::StreamProperties;
use crate::core::session::{
    Error, Result, SessionState, StreamNotification, StreamRequest, StreamSessionEvent,
};
use crate::core::stream::StreamServer;
use crate::core::torrents::{TorrentEngine, TorrentHandle, TorrentStats};

/// The stream session manager coordinates the torrent engine and the stream server
/// of the single active stream.
///
/// Each stream request replaces the previous stream. When requests overlap, the last
/// request wins and the superseded requests resolve with [Error::Cancelled].
#[derive(Debug, Clone)]
pub struct StreamSessionManager {
    inner: Arc<InnerStreamSessionManager>,
}

impl StreamSessionManager {
    /// Create a new stream session manager for the given torrent engine.
    pub fn new(engine: Arc<dyn TorrentEngine>, properties: StreamProperties) -> Self {
        Self {
            inner: Arc::new(InnerStreamSessionManager {
                engine,
                properties,
                session: Default::default(),
                sequence: Default::default(),
                request_token: Default::default(),
                state: Mutex::new(SessionState::Idle),
                callbacks: MultiThreadedCallback::new(),
            }),
        }
    }

    /// Start streaming the torrent of the given magnet uri or info hash.
    ///
    /// Any previously active stream server is closed before the torrent is resolved.
    /// The torrent is only added to the engine when the engine doesn't know it yet.
    ///
    /// # Arguments
    ///
    /// * `identifier` - The magnet uri or bare info hash of the torrent.
    ///
    /// # Returns
    ///
    /// It returns the notification of the torrent being served, or the [Error] of the request.
    pub async fn request_stream(&self, identifier: &str) -> Result<StreamNotification> {
        self.inner.request_stream(identifier).await
    }

    /// Returns the current state of the session.
    pub async fn state(&self) -> SessionState {
        *self.inner.state.lock().await
    }

    /// Returns the notification of the stream which is currently being served, if any.
    pub async fn current(&self) -> Option<StreamNotification> {
        self.inner.session.lock().await.notification.clone()
    }

    /// Returns the download statistics of the current torrent, if any.
    pub async fn stats(&self) -> Option<TorrentStats> {
        let torrent = self.inner.session.lock().await.torrent.clone()?;

        match torrent.stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(
                    "Failed to retrieve stats of torrent {}, {}",
                    torrent.info_hash(),
                    e
                );
                None
            }
        }
    }

    /// Stop the active stream.
    /// This cancels any in-flight stream request and closes the active stream server.
    pub async fn stop(&self) {
        self.inner.stop().await
    }
}

impl Callback<StreamSessionEvent> for StreamSessionManager {
    fn subscribe(&self) -> Subscription<StreamSessionEvent> {
        self.inner.callbacks.subscribe()
    }
}

#[derive(Debug, Default)]
struct StreamSession {
    torrent: Option<Arc<dyn TorrentHandle>>,
    server: Option<StreamServer>,
    notification: Option<StreamNotification>,
}

impl StreamSession {
    /// Close the active server, if any, and wait for its listener to be released.
    /// The torrent of the closed server is no longer the current torrent.
    async fn close_server(&mut self) {
        self.notification = None;
        self.torrent = None;
        if let Some(server) = self.server.take() {
            debug!("Closing stream server on port {}", server.port());
            if let Err(e) = server.close().await {
                warn!("Failed to close stream server {}, {}", server.port(), e);
            }
        }
    }
}

#[derive(Debug)]
struct InnerStreamSessionManager {
    engine: Arc<dyn TorrentEngine>,
    properties: StreamProperties,
    session: Mutex<StreamSession>,
    /// The sequence of the latest stream request
    sequence: AtomicU64,
    /// The cancellation token of the latest stream request
    request_token: Mutex<CancellationToken>,
    state: Mutex<SessionState>,
    callbacks: MultiThreadedCallback<StreamSessionEvent>,
}

impl InnerStreamSessionManager {
    async fn request_stream(&self, identifier: &str) -> Result<StreamNotification> {
        let request = match StreamRequest::parse(identifier) {
            Ok(request) => request,
            Err(e) => {
                // rejected before superseding anything, an in-flight request keeps running
                warn!("Received invalid stream request \"{}\", {}", identifier, e);
                self.callbacks
                    .invoke(StreamSessionEvent::StreamFailed(e.clone()));
                return Err(e);
            }
        };

        let (sequence, token) = self.begin_request().await;
        info!("Starting stream request #{} for {}", sequence, request);
        self.update_state(sequence, SessionState::Resolving).await;
        self.session.lock().await.close_server().await;

        let timeout = self.properties.metadata_timeout();
        let torrent = select! {
            _ = token.cancelled() => {
                debug!("Stream request #{} has been superseded while resolving", sequence);
                return Err(Error::Cancelled);
            },
            result = time::timeout(timeout, self.resolve_torrent(&request)) => match result {
                Ok(Ok(torrent)) => torrent,
                Ok(Err(e)) => return Err(self.fail(sequence, e).await),
                Err(_) => return Err(self.fail(sequence, Error::Timeout(timeout)).await),
            },
        };

        let mut session = self.session.lock().await;
        if !self.is_latest(sequence) {
            debug!("Stream request #{} has been superseded before binding", sequence);
            return Err(Error::Cancelled);
        }

        session.close_server().await;
        self.update_state(sequence, SessionState::Binding).await;
        let server = match StreamServer::bind(torrent.clone(), self.properties.bind_address).await
        {
            Ok(server) => server,
            Err(e) => {
                drop(session);
                return Err(self.fail(sequence, Error::from(e)).await);
            }
        };

        let notification = StreamNotification::new(torrent.as_ref(), server.port());
        session.torrent = Some(torrent);
        session.server = Some(server);
        session.notification = Some(notification.clone());

        if !self.publish_ready(sequence, &notification).await {
            debug!(
                "Stream request #{} has been superseded while binding, server will be replaced",
                sequence
            );
            return Err(Error::Cancelled);
        }

        info!("Torrent {} is being streamed", notification);
        Ok(notification)
    }

    /// Look up the torrent within the engine, or add it when it's unknown to the engine.
    async fn resolve_torrent(&self, request: &StreamRequest) -> Result<Arc<dyn TorrentHandle>> {
        if let Some(torrent) = self.engine.get(request.info_hash()).await? {
            debug!("Reusing known engine torrent {}", request);
            return Ok(torrent);
        }

        let destination = self.properties.download_directory.as_path();
        fs::create_dir_all(destination).await.map_err(|e| {
            Error::Torrent(format!(
                "failed to create download directory {:?}, {}",
                destination, e
            ))
        })?;

        debug!("Adding torrent {} to the engine with destination {:?}", request, destination);
        Ok(self.engine.add(request.magnet_uri(), destination).await?)
    }

    async fn stop(&self) {
        let (sequence, _) = self.begin_request().await;
        debug!("Stopping stream session with request #{}", sequence);

        self.session.lock().await.close_server().await;

        self.update_state(sequence, SessionState::Idle).await;
    }

    /// Start a new request, which cancels the in-flight request.
    /// It returns the sequence and cancellation token of the new request.
    async fn begin_request(&self) -> (u64, CancellationToken) {
        let mut request_token = self.request_token.lock().await;
        let _state = self.state.lock().await;
        request_token.cancel();
        *request_token = CancellationToken::new();

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        (sequence, request_token.clone())
    }

    fn is_latest(&self, sequence: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == sequence
    }

    /// Publish the failure of the given request.
    /// A superseded request is never published and results in [Error::Cancelled].
    async fn fail(&self, sequence: u64, error: Error) -> Error {
        let mut mutex = self.state.lock().await;
        if !self.is_latest(sequence) {
            debug!(
                "Stream request #{} failed after being superseded, {}",
                sequence, error
            );
            return Error::Cancelled;
        }

        warn!("Stream request #{} failed, {}", sequence, error);
        if *mutex != SessionState::Error {
            *mutex = SessionState::Error;
            self.callbacks
                .invoke(StreamSessionEvent::StateChanged(SessionState::Error));
        }
        self.callbacks
            .invoke(StreamSessionEvent::StreamFailed(error.clone()));
        error
    }

    /// Publish the notification of the given request when it's still the latest request.
    /// It returns `false` when the request has been superseded.
    async fn publish_ready(&self, sequence: u64, notification: &StreamNotification) -> bool {
        let mut mutex = self.state.lock().await;
        if !self.is_latest(sequence) {
            return false;
        }

        if *mutex != SessionState::Ready {
            *mutex = SessionState::Ready;
            self.callbacks
                .invoke(StreamSessionEvent::StateChanged(SessionState::Ready));
        }
        self.callbacks
            .invoke(StreamSessionEvent::TorrentReady(notification.clone()));
        true
    }

    async fn update_state(&self, sequence: u64, state: SessionState) {
        let mut mutex = self.state.lock().await;
        if !self.is_latest(sequence) {
            trace!("Ignoring state {} of superseded request #{}", state, sequence);
            return;
        }
        if *mutex == state {
            return;
        }

        *mutex = state;
        debug!("Stream session state changed to {}", state);
        self.callbacks.invoke(StreamSessionEvent::StateChanged(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::torrents::{MockTorrentEngine, MockTorrentHandle, TorrentFile};
    use crate::testing::{InMemoryEngine, InMemoryTorrent};
    use crate::{init_logger, recv_timeout};

    use reqwest::Client;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::net::TcpStream;
    use tokio::sync::mpsc::unbounded_channel;

    const INFO_HASH_A: &str = "eadaf0efea39406914414d359e0ea16416409bd7";
    const INFO_HASH_B: &str = "6b0cd35c4a6b72463bd5e0a13e9bce4a8d1ca6a5";
    const MAGNET_A: &str =
        "magnet:?xt=urn:btih:EADAF0EFEA39406914414D359E0EA16416409BD7&dn=Lorem";
    const MAGNET_B: &str = "magnet:?xt=urn:btih:6b0cd35c4a6b72463bd5e0a13e9bce4a8d1ca6a5&dn=Ipsum";

    fn torrent_a() -> InMemoryTorrent {
        InMemoryTorrent::new(INFO_HASH_A, "Lorem")
            .with_file("Lorem/lorem.nfo", "release notes")
            .with_file("Lorem/lorem.mkv", "lorem video content")
    }

    fn torrent_b() -> InMemoryTorrent {
        InMemoryTorrent::new(INFO_HASH_B, "Ipsum").with_file("Ipsum/ipsum.mp4", "ipsum video")
    }

    fn create_properties(download_directory: PathBuf) -> StreamProperties {
        StreamProperties {
            metadata_timeout_secs: 5,
            download_directory,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }

    async fn fetch(notification: &StreamNotification, path: &str) -> String {
        let url = notification
            .playback_url(path)
            .expect("expected a playback url");
        // localhost might resolve to ipv6 first, while the server is bound to the ipv4 loopback
        let url = format!("http://127.0.0.1:{}{}", notification.port, url.path());
        Client::new()
            .get(url)
            .send()
            .await
            .expect("expected a valid response")
            .text()
            .await
            .expect("expected a text body")
    }

    async fn is_listening(port: u16) -> bool {
        TcpStream::connect((Ipv4Addr::LOCALHOST, port)).await.is_ok()
    }

    /// Collect the events which are published until the receiver stays silent.
    async fn drain(receiver: &mut Subscription<StreamSessionEvent>) -> Vec<StreamSessionEvent> {
        let mut events = vec![];
        while let Ok(Ok(event)) = time::timeout(Duration::from_millis(200), receiver.recv()).await
        {
            events.push((*event).clone());
        }
        events
    }

    #[tokio::test]
    async fn test_request_stream() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(InMemoryEngine::default().with_torrent(torrent_a()));
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let mut receiver = manager.subscribe();

        let result = manager
            .request_stream(MAGNET_A)
            .await
            .expect("expected the stream to have started");

        assert_eq!(INFO_HASH_A, result.info_hash);
        assert_ne!(0, result.port);
        assert_eq!(
            vec![
                TorrentFile {
                    path: "Lorem/lorem.nfo".to_string(),
                    size: 13
                },
                TorrentFile {
                    path: "Lorem/lorem.mkv".to_string(),
                    size: 19
                },
            ],
            result.files
        );
        assert_eq!("lorem video content", fetch(&result, "Lorem/lorem.mkv").await);
        assert_eq!(SessionState::Ready, manager.state().await);
        assert_eq!(Some(result.clone()), manager.current().await);

        let mut states = vec![];
        loop {
            let event = recv_timeout!(&mut receiver, Duration::from_millis(500));
            match &*event {
                StreamSessionEvent::StateChanged(state) => states.push(*state),
                StreamSessionEvent::TorrentReady(notification) => {
                    assert_eq!(&result, notification);
                    break;
                }
                StreamSessionEvent::StreamFailed(e) => panic!("unexpected failure {}", e),
            }
        }
        assert_eq!(
            vec![
                SessionState::Resolving,
                SessionState::Binding,
                SessionState::Ready
            ],
            states
        );
        let remaining = drain(&mut receiver).await;
        assert_eq!(
            Vec::<StreamSessionEvent>::new(),
            remaining,
            "expected the torrent to be announced only once"
        );
    }

    #[tokio::test]
    async fn test_request_stream_replaces_previous_server() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_torrent(torrent_b()),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );

        let stream_a = manager.request_stream(MAGNET_A).await.unwrap();
        assert!(is_listening(stream_a.port).await, "expected stream A to be served");
        let mut receiver = manager.subscribe();

        let stream_b = manager.request_stream(MAGNET_B).await.unwrap();

        assert!(
            !is_listening(stream_a.port).await,
            "expected the server of stream A to have been closed"
        );
        assert_eq!("ipsum video", fetch(&stream_b, "Ipsum/ipsum.mp4").await);
        assert_eq!(Some(stream_b.clone()), manager.current().await);
        assert_eq!(2, engine.added());
        let ready: Vec<_> = drain(&mut receiver)
            .await
            .into_iter()
            .filter_map(|event| match event {
                StreamSessionEvent::TorrentReady(notification) => Some(notification),
                _ => None,
            })
            .collect();
        assert_eq!(vec![stream_b], ready);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_request_stream_closes_previous_server_before_binding() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_torrent(torrent_b())
                .with_delay(INFO_HASH_B, Duration::from_millis(200)),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let stream_a = manager.request_stream(MAGNET_A).await.unwrap();
        let (tx, mut rx) = unbounded_channel();
        let mut callback = manager.subscribe();
        let port_a = stream_a.port;
        tokio::spawn(async move {
            while let Ok(event) = callback.recv().await {
                if let StreamSessionEvent::StateChanged(SessionState::Binding) = &*event {
                    let _ = tx.send(is_listening(port_a).await);
                }
            }
        });

        let stream_b = manager.request_stream(MAGNET_B).await.unwrap();

        let a_listening_while_binding = recv_timeout!(&mut rx, Duration::from_millis(500));
        assert!(
            !a_listening_while_binding,
            "expected the server of stream A to be closed before binding stream B"
        );
        assert_ne!(stream_a.port, stream_b.port);
    }

    #[tokio::test]
    async fn test_request_stream_clears_stats_of_replaced_torrent() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_torrent(torrent_b())
                .with_delay(INFO_HASH_B, Duration::from_secs(3)),
        );
        let mut properties = create_properties(temp_dir.path().to_path_buf());
        properties.metadata_timeout_secs = 1;
        let manager = StreamSessionManager::new(engine.clone(), properties);
        manager.request_stream(MAGNET_A).await.unwrap();
        assert!(manager.stats().await.is_some(), "expected stats of torrent A");

        let request = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.request_stream(MAGNET_B).await })
        };
        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(SessionState::Resolving, manager.state().await);
        assert_eq!(None, manager.stats().await);

        let result = request.await.unwrap();
        assert_eq!(Err(Error::Timeout(Duration::from_secs(1))), result);
        assert_eq!(None, manager.current().await);
        assert_eq!(None, manager.stats().await);
    }

    #[tokio::test]
    async fn test_request_stream_same_magnet_adds_torrent_once() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(InMemoryEngine::default().with_torrent(torrent_a()));
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );

        let first = manager.request_stream(MAGNET_A).await.unwrap();
        let second = manager.request_stream(INFO_HASH_A).await.unwrap();

        assert_eq!(1, engine.added(), "expected the torrent to be added once");
        assert!(
            !is_listening(first.port).await,
            "expected the first server to have been closed"
        );
        assert!(is_listening(second.port).await);
        assert_eq!("release notes", fetch(&second, "Lorem/lorem.nfo").await);
    }

    #[tokio::test]
    async fn test_request_stream_last_request_wins() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_torrent(torrent_b())
                .with_delay(INFO_HASH_A, Duration::from_millis(500)),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let mut receiver = manager.subscribe();

        let request_a = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.request_stream(MAGNET_A).await })
        };
        time::sleep(Duration::from_millis(50)).await;
        let stream_b = manager.request_stream(MAGNET_B).await.unwrap();
        let result_a = request_a.await.unwrap();

        assert_eq!(Err(Error::Cancelled), result_a);
        assert_eq!(Some(stream_b.clone()), manager.current().await);
        assert_eq!(SessionState::Ready, manager.state().await);

        time::sleep(Duration::from_millis(600)).await;
        let mut notifications = vec![];
        while let Ok(event) = receiver.try_recv() {
            match &*event {
                StreamSessionEvent::TorrentReady(e) => notifications.push(e.clone()),
                StreamSessionEvent::StreamFailed(e) => panic!("unexpected failure {}", e),
                _ => {}
            }
        }
        assert_eq!(vec![stream_b], notifications);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_request_stream_concurrent_requests_leave_single_server() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_torrent(torrent_b()),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );

        let requests: Vec<_> = [MAGNET_A, MAGNET_B, MAGNET_A, MAGNET_B]
            .into_iter()
            .map(|magnet| {
                let manager = manager.clone();
                tokio::spawn(async move { manager.request_stream(magnet).await })
            })
            .collect();
        let mut results = vec![];
        for request in requests {
            results.push(request.await.unwrap());
        }

        let current = manager
            .current()
            .await
            .expect("expected a stream to be active");
        assert!(is_listening(current.port).await, "expected the current server to be alive");
        for result in results {
            match result {
                Ok(notification) if notification.port != current.port => assert!(
                    !is_listening(notification.port).await,
                    "expected the superseded server on port {} to be closed",
                    notification.port
                ),
                Ok(_) | Err(Error::Cancelled) => {}
                Err(e) => panic!("unexpected stream error {}", e),
            }
        }
        assert_eq!(SessionState::Ready, manager.state().await);
    }

    #[tokio::test]
    async fn test_request_stream_timeout() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_delay(INFO_HASH_A, Duration::from_secs(30)),
        );
        let mut properties = create_properties(temp_dir.path().to_path_buf());
        properties.metadata_timeout_secs = 1;
        let manager = StreamSessionManager::new(engine.clone(), properties);
        let mut receiver = manager.subscribe();

        let result = manager.request_stream(MAGNET_A).await;

        assert_eq!(Err(Error::Timeout(Duration::from_secs(1))), result);
        assert_eq!(SessionState::Error, manager.state().await);
        assert_eq!(None, manager.current().await);
        loop {
            let event = recv_timeout!(&mut receiver, Duration::from_millis(500));
            if let StreamSessionEvent::StreamFailed(e) = &*event {
                assert_eq!(&Error::Timeout(Duration::from_secs(1)), e);
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_request_stream_invalid_request() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let mut engine = MockTorrentEngine::new();
        engine.expect_get().never();
        engine.expect_add().never();
        let manager = StreamSessionManager::new(
            Arc::new(engine),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let mut receiver = manager.subscribe();

        let result = manager.request_stream("lorem ipsum").await;

        assert_eq!(
            Err(Error::InvalidRequest(
                "info hash \"lorem ipsum\" is invalid".to_string()
            )),
            result
        );
        assert_eq!(SessionState::Idle, manager.state().await);
        let event = recv_timeout!(&mut receiver, Duration::from_millis(500));
        assert_eq!(
            StreamSessionEvent::StreamFailed(Error::InvalidRequest(
                "info hash \"lorem ipsum\" is invalid".to_string()
            )),
            *event
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_request_stream_invalid_request_keeps_in_flight_request() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_delay(INFO_HASH_A, Duration::from_millis(300)),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let mut receiver = manager.subscribe();
        let in_flight = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.request_stream(MAGNET_A).await })
        };
        time::sleep(Duration::from_millis(50)).await;

        let result = manager.request_stream("lorem ipsum").await;
        assert!(
            matches!(result, Err(Error::InvalidRequest(_))),
            "expected an invalid request, got {:?} instead",
            result
        );

        let stream_a = in_flight
            .await
            .unwrap()
            .expect("expected the in-flight request to complete");
        assert_eq!(Some(stream_a.clone()), manager.current().await);
        let events: Vec<_> = drain(&mut receiver)
            .await
            .into_iter()
            .filter(|e| !matches!(e, StreamSessionEvent::StateChanged(_)))
            .collect();
        assert_eq!(
            vec![
                StreamSessionEvent::StreamFailed(Error::InvalidRequest(
                    "info hash \"lorem ipsum\" is invalid".to_string()
                )),
                StreamSessionEvent::TorrentReady(stream_a),
            ],
            events
        );
    }

    #[tokio::test]
    async fn test_request_stream_engine_error() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let download_directory = temp_dir.path().join("downloads");
        let mut engine = MockTorrentEngine::new();
        engine.expect_get().times(1).returning(|_| Ok(None));
        engine.expect_add().times(1).returning(|_, _| {
            Err(crate::core::torrents::Error::Engine(
                "metadata resolving failed".to_string(),
            ))
        });
        let manager = StreamSessionManager::new(
            Arc::new(engine),
            create_properties(download_directory.clone()),
        );

        let result = manager.request_stream(MAGNET_A).await;

        assert_eq!(
            Err(Error::Torrent(
                "the torrent engine returned an error, metadata resolving failed".to_string()
            )),
            result
        );
        assert!(
            download_directory.exists(),
            "expected the download directory to have been created"
        );
        assert_eq!(SessionState::Error, manager.state().await);
    }

    #[tokio::test]
    async fn test_request_stream_reuses_engine_torrent() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let mut torrent = MockTorrentHandle::new();
        torrent.expect_info_hash().return_const(INFO_HASH_A.to_string());
        torrent.expect_name().return_const("Lorem".to_string());
        torrent.expect_files().returning(|| {
            vec![TorrentFile {
                path: "lorem.mp4".to_string(),
                size: 1024,
            }]
        });
        let torrent = Arc::new(torrent) as Arc<dyn TorrentHandle>;
        let mut engine = MockTorrentEngine::new();
        engine
            .expect_get()
            .withf(|info_hash| info_hash == INFO_HASH_A)
            .times(1)
            .returning(move |_| Ok(Some(torrent.clone())));
        engine.expect_add().never();
        let manager = StreamSessionManager::new(
            Arc::new(engine),
            create_properties(temp_dir.path().to_path_buf()),
        );

        let result = manager.request_stream(INFO_HASH_A).await.unwrap();

        assert_eq!(INFO_HASH_A, result.info_hash);
        assert_eq!(
            Some("http://localhost:".to_string() + &result.port.to_string() + "/0"),
            result.playback_url("lorem.mp4").map(|e| e.to_string())
        );
    }

    #[tokio::test]
    async fn test_request_stream_bind_error() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(InMemoryEngine::default().with_torrent(torrent_a()));
        let mut properties = create_properties(temp_dir.path().to_path_buf());
        // documentation address which is never assigned to a local interface
        properties.bind_address = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        let manager = StreamSessionManager::new(engine.clone(), properties);

        let result = manager.request_stream(MAGNET_A).await;

        match result {
            Err(Error::Server(_)) => {}
            _ => panic!("expected Error::Server, got {:?} instead", result),
        }
        assert_eq!(SessionState::Error, manager.state().await);
        assert_eq!(None, manager.current().await);
    }

    #[tokio::test]
    async fn test_stop() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(InMemoryEngine::default().with_torrent(torrent_a()));
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        let stream = manager.request_stream(MAGNET_A).await.unwrap();

        manager.stop().await;

        assert!(!is_listening(stream.port).await, "expected the server to be closed");
        assert_eq!(SessionState::Idle, manager.state().await);
        assert_eq!(None, manager.current().await);
        assert_eq!(None, manager.stats().await);
    }

    #[tokio::test]
    async fn test_stop_cancels_in_flight_request() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(
            InMemoryEngine::default()
                .with_torrent(torrent_a())
                .with_delay(INFO_HASH_A, Duration::from_secs(30)),
        );
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );

        let request = {
            let manager = manager.clone();
            tokio::spawn(async move { manager.request_stream(MAGNET_A).await })
        };
        time::sleep(Duration::from_millis(50)).await;
        manager.stop().await;

        let result = time::timeout(Duration::from_millis(500), request)
            .await
            .expect("expected the request to be cancelled")
            .unwrap();
        assert_eq!(Err(Error::Cancelled), result);
        assert_eq!(SessionState::Idle, manager.state().await);
    }

    #[tokio::test]
    async fn test_stats() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(InMemoryEngine::default().with_torrent(torrent_b()));
        let manager = StreamSessionManager::new(
            engine.clone(),
            create_properties(temp_dir.path().to_path_buf()),
        );
        assert_eq!(None, manager.stats().await);

        manager.request_stream(MAGNET_B).await.unwrap();
        let result = manager.stats().await;

        assert_eq!(
            Some(TorrentStats {
                progress: 1.0,
                downloaded: 11,
                total_size: 11,
                finished: true,
            }),
            result
        );
    }
}
