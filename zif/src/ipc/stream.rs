use crate::ipc::mappings::{torrent_failed_event, torrent_ready_event};
use crate::ipc::proto::message::{response, FxMessage};
use crate::ipc::proto::stream;
use crate::ipc::{Error, IpcChannel, MessageHandler};
use async_trait::async_trait;
use derive_more::Display;
use fx_callback::Callback;
use log::{debug, trace, warn};
use protobuf::{EnumOrUnknown, Message, MessageField};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::select;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use zif_core::core::session::{self, StreamSessionEvent, StreamSessionManager};

/// The message handler of the stream bridge.
/// It forwards stream requests to the [StreamSessionManager] and pushes the torrent events
/// to each active subscription of the presentation layer.
#[derive(Debug, Display, Clone)]
#[display("stream")]
pub struct StreamMessageHandler {
    inner: Arc<InnerStreamMessageHandler>,
}

impl StreamMessageHandler {
    pub fn new(manager: StreamSessionManager, channel: IpcChannel) -> Self {
        Self {
            inner: Arc::new(InnerStreamMessageHandler {
                manager,
                channel,
                subscription_id: Default::default(),
                subscriptions: Default::default(),
                cancellation_token: Default::default(),
            }),
        }
    }

    /// Returns the number of active torrent event subscriptions.
    pub async fn subscriptions(&self) -> usize {
        self.inner.subscriptions.lock().await.len()
    }
}

#[async_trait]
impl MessageHandler for StreamMessageHandler {
    fn name(&self) -> &str {
        "stream"
    }

    fn is_supported(&self, message_type: &str) -> bool {
        matches!(
            message_type,
            stream::StreamMagnetRequest::NAME
                | stream::StopStreamRequest::NAME
                | stream::StreamStateRequest::NAME
                | stream::SubscribeTorrentEventsRequest::NAME
                | stream::UnsubscribeTorrentEventsRequest::NAME
        )
    }

    async fn process(&self, message: FxMessage, channel: &IpcChannel) -> crate::ipc::Result<()> {
        match message.message_type() {
            stream::StreamMagnetRequest::NAME => {
                let request = stream::StreamMagnetRequest::parse_from_bytes(&message.payload)?;
                let response = self.inner.stream_magnet(request.magnet_uri.as_str()).await;

                channel
                    .send_reply(&message, response, stream::StreamMagnetResponse::NAME)
                    .await?;
            }
            stream::StopStreamRequest::NAME => {
                self.inner.manager.stop().await;

                channel
                    .send_reply(
                        &message,
                        stream::StopStreamResponse {
                            result: response::Result::OK.into(),
                            special_fields: Default::default(),
                        },
                        stream::StopStreamResponse::NAME,
                    )
                    .await?;
            }
            stream::StreamStateRequest::NAME => {
                let response = self.inner.stream_state().await;

                channel
                    .send_reply(&message, response, stream::StreamStateResponse::NAME)
                    .await?;
            }
            stream::SubscribeTorrentEventsRequest::NAME => {
                let subscription_id = self.inner.subscribe().await;

                channel
                    .send_reply(
                        &message,
                        stream::SubscribeTorrentEventsResponse {
                            subscription_id,
                            special_fields: Default::default(),
                        },
                        stream::SubscribeTorrentEventsResponse::NAME,
                    )
                    .await?;
            }
            stream::UnsubscribeTorrentEventsRequest::NAME => {
                let request =
                    stream::UnsubscribeTorrentEventsRequest::parse_from_bytes(&message.payload)?;
                let result = match self.inner.unsubscribe(request.subscription_id).await {
                    Ok(_) => response::Result::OK,
                    Err(e) => {
                        warn!("Failed to unsubscribe from torrent events, {}", e);
                        response::Result::ERROR
                    }
                };

                channel
                    .send_reply(
                        &message,
                        stream::UnsubscribeTorrentEventsResponse {
                            result: result.into(),
                            special_fields: Default::default(),
                        },
                        stream::UnsubscribeTorrentEventsResponse::NAME,
                    )
                    .await?;
            }
            _ => {
                return Err(Error::UnsupportedMessage(
                    message.message_type().to_string(),
                ))
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
struct InnerStreamMessageHandler {
    manager: StreamSessionManager,
    channel: IpcChannel,
    subscription_id: AtomicU32,
    subscriptions: Mutex<HashMap<u32, CancellationToken>>,
    cancellation_token: CancellationToken,
}

impl InnerStreamMessageHandler {
    async fn stream_magnet(&self, magnet_uri: &str) -> stream::StreamMagnetResponse {
        match self.manager.request_stream(magnet_uri).await {
            Ok(notification) => stream::StreamMagnetResponse {
                result: response::Result::OK.into(),
                notification: MessageField::some((&notification).into()),
                error: MessageField::none(),
                special_fields: Default::default(),
            },
            Err(e) => {
                if e != session::Error::Cancelled {
                    debug!("Stream request of {} failed, {}", magnet_uri, e);
                }

                stream::StreamMagnetResponse {
                    result: response::Result::ERROR.into(),
                    notification: MessageField::none(),
                    error: MessageField::some((&e).into()),
                    special_fields: Default::default(),
                }
            }
        }
    }

    async fn stream_state(&self) -> stream::StreamStateResponse {
        let state = self.manager.state().await;
        let notification = self.manager.current().await;
        let stats = self.manager.stats().await;

        stream::StreamStateResponse {
            state: EnumOrUnknown::from(stream::stream::State::from(state)),
            notification: notification
                .as_ref()
                .map(|e| MessageField::some(e.into()))
                .unwrap_or_default(),
            stats: stats
                .as_ref()
                .map(|e| MessageField::some(e.into()))
                .unwrap_or_default(),
            special_fields: Default::default(),
        }
    }

    /// Create a new torrent event subscription which pushes the events to the channel
    /// until it's unsubscribed.
    async fn subscribe(&self) -> u32 {
        let subscription_id = self.subscription_id.fetch_add(1, Ordering::SeqCst) + 1;
        let cancellation_token = self.cancellation_token.child_token();
        let mut receiver = self.manager.subscribe();
        let channel = self.channel.clone();

        self.subscriptions
            .lock()
            .await
            .insert(subscription_id, cancellation_token.clone());

        tokio::spawn(async move {
            loop {
                select! {
                    _ = cancellation_token.cancelled() => break,
                    event = receiver.recv() => match event {
                        Ok(event) => Self::handle_event(subscription_id, &event, &channel).await,
                        Err(_) => break,
                    },
                }
            }
            trace!("Torrent event subscription {} has ended", subscription_id);
        });

        debug!("Created torrent event subscription {}", subscription_id);
        subscription_id
    }

    async fn unsubscribe(&self, subscription_id: u32) -> crate::ipc::Result<()> {
        let token = self
            .subscriptions
            .lock()
            .await
            .remove(&subscription_id)
            .ok_or(Error::UnknownSubscription(subscription_id))?;

        token.cancel();
        debug!("Removed torrent event subscription {}", subscription_id);
        Ok(())
    }

    async fn handle_event(subscription_id: u32, event: &StreamSessionEvent, channel: &IpcChannel) {
        let torrent_event = match event {
            StreamSessionEvent::TorrentReady(notification) => {
                torrent_ready_event(subscription_id, notification)
            }
            StreamSessionEvent::StreamFailed(session::Error::Cancelled) => return,
            StreamSessionEvent::StreamFailed(e) => torrent_failed_event(subscription_id, e),
            StreamSessionEvent::StateChanged(state) => {
                trace!("Stream session state changed to {}", state);
                return;
            }
        };

        if let Err(e) = channel
            .send(torrent_event, stream::TorrentEvent::NAME)
            .await
        {
            warn!(
                "Failed to send torrent event of subscription {}, {}",
                subscription_id, e
            );
        }
    }
}

impl Drop for InnerStreamMessageHandler {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::test::{create_channel_pair, request, within};

    use std::net::{IpAddr, Ipv4Addr};
    use std::path::Path;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::time;
    use zif_core::core::config::StreamProperties;
    use zif_core::init_logger;
    use zif_core::testing::{InMemoryEngine, InMemoryTorrent};

    const INFO_HASH: &str = "eadaf0efea39406914414d359e0ea16416409bd7";
    const MAGNET_URI: &str =
        "magnet:?xt=urn:btih:eadaf0efea39406914414d359e0ea16416409bd7&dn=Lorem";

    fn create_manager(download_directory: &Path) -> StreamSessionManager {
        let engine = InMemoryEngine::default().with_torrent(
            InMemoryTorrent::new(INFO_HASH, "Lorem")
                .with_file("Lorem/lorem.nfo", "release notes")
                .with_file("Lorem/lorem.mkv", "lorem video"),
        );

        StreamSessionManager::new(
            Arc::new(engine),
            StreamProperties {
                metadata_timeout_secs: 5,
                download_directory: download_directory.to_path_buf(),
                bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            },
        )
    }

    #[tokio::test]
    async fn test_stream_magnet_request() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let handler = StreamMessageHandler::new(create_manager(temp_dir.path()), outgoing.clone());

        let result: stream::StreamMagnetResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamMagnetRequest {
                magnet_uri: MAGNET_URI.to_string(),
                special_fields: Default::default(),
            },
        )
        .await;

        assert_eq!(EnumOrUnknown::from(response::Result::OK), result.result);
        assert_eq!(INFO_HASH, result.notification.info_hash);
        assert_ne!(0, result.notification.port);
        assert_eq!(
            vec!["Lorem/lorem.nfo", "Lorem/lorem.mkv"],
            result
                .notification
                .files
                .iter()
                .map(|e| e.path.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_stream_magnet_request_invalid() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let handler = StreamMessageHandler::new(create_manager(temp_dir.path()), outgoing.clone());

        let result: stream::StreamMagnetResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamMagnetRequest {
                magnet_uri: "magnet:?dn=Lorem".to_string(),
                special_fields: Default::default(),
            },
        )
        .await;

        assert_eq!(EnumOrUnknown::from(response::Result::ERROR), result.result);
        assert_eq!(
            EnumOrUnknown::from(stream::stream::error::Type::INVALID_REQUEST),
            result.error.type_
        );
    }

    #[tokio::test]
    async fn test_torrent_event_subscription() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let handler = StreamMessageHandler::new(create_manager(temp_dir.path()), outgoing.clone());

        let subscription: stream::SubscribeTorrentEventsResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::SubscribeTorrentEventsRequest::new(),
        )
        .await;
        assert_eq!(1, handler.subscriptions().await);

        let response: stream::StreamMagnetResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamMagnetRequest {
                magnet_uri: INFO_HASH.to_string(),
                special_fields: Default::default(),
            },
        )
        .await;

        let message = within(Duration::from_millis(500), incoming.recv())
            .await
            .expect("expected to have received a torrent event");
        assert_eq!(stream::TorrentEvent::NAME, message.message_type());
        let event = stream::TorrentEvent::parse_from_bytes(&message.payload).unwrap();
        assert_eq!(subscription.subscription_id, event.subscription_id);
        assert_eq!(
            EnumOrUnknown::from(stream::torrent_event::Type::READY),
            event.type_
        );
        assert_eq!(response.notification, event.notification);
    }

    #[tokio::test]
    async fn test_unsubscribe_torrent_events() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let handler = StreamMessageHandler::new(create_manager(temp_dir.path()), outgoing.clone());

        let subscription: stream::SubscribeTorrentEventsResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::SubscribeTorrentEventsRequest::new(),
        )
        .await;
        let result: stream::UnsubscribeTorrentEventsResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::UnsubscribeTorrentEventsRequest {
                subscription_id: subscription.subscription_id,
                special_fields: Default::default(),
            },
        )
        .await;
        assert_eq!(EnumOrUnknown::from(response::Result::OK), result.result);
        assert_eq!(0, handler.subscriptions().await);

        let _: stream::StreamMagnetResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamMagnetRequest {
                magnet_uri: MAGNET_URI.to_string(),
                special_fields: Default::default(),
            },
        )
        .await;

        let result = time::timeout(Duration::from_millis(200), incoming.recv()).await;
        assert!(
            result.is_err(),
            "expected no torrent event to have been received, got {:?} instead",
            result
        );
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_subscription() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let handler = StreamMessageHandler::new(create_manager(temp_dir.path()), outgoing.clone());

        let result: stream::UnsubscribeTorrentEventsResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::UnsubscribeTorrentEventsRequest {
                subscription_id: 42,
                special_fields: Default::default(),
            },
        )
        .await;

        assert_eq!(EnumOrUnknown::from(response::Result::ERROR), result.result);
    }

    #[tokio::test]
    async fn test_stop_stream_request() {
        init_logger!();
        let temp_dir = tempdir().unwrap();
        let (incoming, outgoing) = create_channel_pair().await;
        let manager = create_manager(temp_dir.path());
        let handler = StreamMessageHandler::new(manager.clone(), outgoing.clone());
        manager.request_stream(MAGNET_URI).await.unwrap();

        let state: stream::StreamStateResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamStateRequest::new(),
        )
        .await;
        assert_eq!(
            EnumOrUnknown::from(stream::stream::State::READY),
            state.state
        );
        assert_eq!(INFO_HASH, state.notification.info_hash);
        assert!(state.stats.finished, "expected the torrent to be finished");

        let result: stream::StopStreamResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StopStreamRequest::new(),
        )
        .await;
        assert_eq!(EnumOrUnknown::from(response::Result::OK), result.result);

        let state: stream::StreamStateResponse = request(
            &incoming,
            &outgoing,
            &handler,
            stream::StreamStateRequest::new(),
        )
        .await;
        assert_eq!(EnumOrUnknown::from(stream::stream::State::IDLE), state.state);
        assert!(state.notification.is_none());
    }
}
