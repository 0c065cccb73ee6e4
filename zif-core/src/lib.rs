/// The current version of the Zif stream coordinator.
pub const VERSION: &str = "0.3.0";

pub mod core;

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use crate::core::torrents;
    use crate::core::torrents::{
        ByteStream, Magnet, TorrentEngine, TorrentFile, TorrentHandle, TorrentStats,
    };

    use async_trait::async_trait;
    use bytes::Bytes;
    use log::LevelFilter;
    use log4rs::append::console::ConsoleAppender;
    use log4rs::config::{Appender, Logger, Root};
    use log4rs::encode::pattern::PatternEncoder;
    use log4rs::Config;
    use std::collections::HashMap;
    use std::ops::Range;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, Once};
    use std::time::Duration;
    use tokio::select;
    use tokio::sync::mpsc::UnboundedReceiver;

    static INIT: Once = Once::new();

    /// Initializes the logger with the specified log level.
    #[macro_export]
    macro_rules! init_logger {
        ($level:expr) => {
            $crate::testing::init_logger_level($level)
        };
        () => {
            $crate::testing::init_logger_level(log::LevelFilter::Trace)
        };
    }

    /// Initializes the logger with the specified log level.
    pub fn init_logger_level(level: LevelFilter) {
        INIT.call_once(|| {
            log4rs::init_config(Config::builder()
                .appender(Appender::builder().build("stdout", Box::new(ConsoleAppender::builder()
                    .encoder(Box::new(PatternEncoder::new("\x1B[37m{d(%Y-%m-%d %H:%M:%S%.3f)}\x1B[0m {h({l:>5.5})} \x1B[35m{I:>6.6}\x1B[0m \x1B[37m---\x1B[0m \x1B[37m[{T:>15.15}]\x1B[0m \x1B[36m{t:<60.60}\x1B[0m \x1B[37m:\x1B[0m {m}{n}")))
                    .build())))
                .logger(Logger::builder().build("fx_callback", LevelFilter::Info))
                .logger(Logger::builder().build("h2", LevelFilter::Info))
                .logger(Logger::builder().build("httpmock::server", LevelFilter::Debug))
                .logger(Logger::builder().build("hyper", LevelFilter::Info))
                .logger(Logger::builder().build("hyper_util", LevelFilter::Info))
                .logger(Logger::builder().build("mio", LevelFilter::Info))
                .logger(Logger::builder().build("reqwest", LevelFilter::Info))
                .logger(Logger::builder().build("tracing", LevelFilter::Info))
                .logger(Logger::builder().build("want", LevelFilter::Info))
                .build(Root::builder().appender("stdout").build(level))
                .unwrap())
                .unwrap();
        })
    }

    /// A torrent which keeps the content of all its files in memory.
    /// It behaves like a fully downloaded torrent of the engine.
    #[derive(Debug, Clone)]
    pub struct InMemoryTorrent {
        info_hash: String,
        name: String,
        files: Vec<(TorrentFile, Bytes)>,
    }

    impl InMemoryTorrent {
        pub fn new(info_hash: &str, name: &str) -> Self {
            Self {
                info_hash: info_hash.to_string(),
                name: name.to_string(),
                files: vec![],
            }
        }

        /// Append a file to the torrent, the file index is the order in which files are added.
        pub fn with_file(mut self, path: &str, content: impl Into<Bytes>) -> Self {
            let content = content.into();
            self.files.push((
                TorrentFile {
                    path: path.to_string(),
                    size: content.len() as u64,
                },
                content,
            ));
            self
        }
    }

    #[async_trait]
    impl TorrentHandle for InMemoryTorrent {
        fn info_hash(&self) -> &str {
            self.info_hash.as_str()
        }

        fn name(&self) -> &str {
            self.name.as_str()
        }

        fn files(&self) -> Vec<TorrentFile> {
            self.files.iter().map(|(file, _)| file.clone()).collect()
        }

        async fn stats(&self) -> torrents::Result<TorrentStats> {
            let total_size = self.files.iter().map(|(file, _)| file.size).sum();
            Ok(TorrentStats {
                progress: 1.0,
                downloaded: total_size,
                total_size,
                finished: true,
            })
        }

        async fn read(&self, file_index: usize, range: Range<u64>) -> torrents::Result<ByteStream> {
            let (_, content) = self
                .files
                .get(file_index)
                .ok_or(torrents::Error::InvalidFileIndex(file_index))?;
            if range.start > range.end || range.end > content.len() as u64 {
                return Err(torrents::Error::InvalidRange(format!("{:?}", range)));
            }

            let chunk = content.slice(range.start as usize..range.end as usize);
            Ok(Box::pin(futures::stream::iter(vec![Ok(chunk)])))
        }
    }

    /// A torrent engine which resolves magnet uris from a fixed catalog of [InMemoryTorrent] items.
    #[derive(Debug, Default)]
    pub struct InMemoryEngine {
        catalog: HashMap<String, InMemoryTorrent>,
        delays: HashMap<String, Duration>,
        torrents: Mutex<HashMap<String, Arc<dyn TorrentHandle>>>,
        added: AtomicUsize,
    }

    impl InMemoryEngine {
        /// Make the given torrent available to be added to the engine.
        pub fn with_torrent(mut self, torrent: InMemoryTorrent) -> Self {
            self.catalog.insert(torrent.info_hash.clone(), torrent);
            self
        }

        /// Delay the metadata resolving of the given info hash.
        pub fn with_delay(mut self, info_hash: &str, delay: Duration) -> Self {
            self.delays.insert(info_hash.to_string(), delay);
            self
        }

        /// Returns the number of times a torrent has been added to the engine.
        pub fn added(&self) -> usize {
            self.added.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TorrentEngine for InMemoryEngine {
        async fn get(&self, info_hash: &str) -> torrents::Result<Option<Arc<dyn TorrentHandle>>> {
            Ok(self.torrents.lock().unwrap().get(info_hash).cloned())
        }

        async fn add(
            &self,
            magnet_uri: &str,
            _destination: &Path,
        ) -> torrents::Result<Arc<dyn TorrentHandle>> {
            self.added.fetch_add(1, Ordering::SeqCst);
            let info_hash = Magnet::parse_identifier(magnet_uri)
                .map_err(|_| torrents::Error::InvalidUrl(magnet_uri.to_string()))?
                .info_hash;

            if let Some(delay) = self.delays.get(&info_hash) {
                tokio::time::sleep(*delay).await;
            }

            let torrent: Arc<dyn TorrentHandle> = Arc::new(
                self.catalog
                    .get(&info_hash)
                    .cloned()
                    .ok_or_else(|| torrents::Error::NotFound(info_hash.clone()))?,
            );
            self.torrents
                .lock()
                .unwrap()
                .insert(info_hash, torrent.clone());
            Ok(torrent)
        }
    }

    /// Receive a message from the given receiver, or panic if the timeout is reached.
    #[macro_export]
    macro_rules! recv_timeout {
        ($receiver:expr, $timeout:expr) => {
            $crate::testing::recv_timeout($receiver, $timeout, "expected to receive an instance")
                .await
        };
        ($receiver:expr, $timeout:expr, $message:expr) => {
            $crate::testing::recv_timeout($receiver, $timeout, $message).await
        };
    }

    /// A receiver which can be used with [recv_timeout].
    pub trait TestReceiver<T> {
        /// Receive the next message, or `None` when the channel has been closed.
        fn recv(&mut self) -> impl std::future::Future<Output = Option<T>> + Send;
    }

    impl<T: Send> TestReceiver<T> for UnboundedReceiver<T> {
        async fn recv(&mut self) -> Option<T> {
            UnboundedReceiver::recv(self).await
        }
    }

    impl<T: Clone + Send> TestReceiver<T> for tokio::sync::broadcast::Receiver<T> {
        async fn recv(&mut self) -> Option<T> {
            tokio::sync::broadcast::Receiver::recv(self).await.ok()
        }
    }

    /// Receive a message from the given receiver, or panic if the timeout is reached.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiver to receive the message from.
    /// * `timeout` - The timeout to wait for the message.
    /// * `message` - The message to print if the timeout is reached.
    pub async fn recv_timeout<T, R: TestReceiver<T>>(
        receiver: &mut R,
        timeout: Duration,
        message: &str,
    ) -> T {
        select! {
            _ = tokio::time::sleep(timeout) => panic!("receiver timed-out after {}ms, {}", timeout.as_millis(), message),
            result = receiver.recv() => result.expect(message)
        }
    }
}
