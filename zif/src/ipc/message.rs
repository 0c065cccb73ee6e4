use crate::ipc::channel::IpcChannel;
use crate::ipc::errors::{Error, Result};
use crate::ipc::proto::application::ApplicationTerminationRequest;
use crate::ipc::proto::message::FxMessage;
use async_trait::async_trait;
use log::{debug, error, trace, warn};
use protobuf::Message;
use std::fmt::{Debug, Display};
use std::sync::Arc;
use tokio::select;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// A message handler is able to process a received [FxMessage].
#[async_trait]
pub trait MessageHandler: Debug + Display + Send + Sync {
    /// Returns the name of the handler.
    fn name(&self) -> &str;

    /// Check if this handler is able to process the given message type.
    fn is_supported(&self, message_type: &str) -> bool;

    /// Process the given supported message.
    ///
    /// # Arguments
    ///
    /// * `message` - The received message.
    /// * `channel` - The channel on which the message was received.
    async fn process(&self, message: FxMessage, channel: &IpcChannel) -> Result<()>;
}

/// The processor which dispatches each message of the channel to the handler supporting it.
/// Messages are processed concurrently, a long-running stream request never blocks other messages.
#[derive(Debug)]
pub struct IpcChannelProcessor {
    inner: Arc<InnerProcessor>,
}

impl IpcChannelProcessor {
    pub fn new(channel: IpcChannel, handlers: Vec<Box<dyn MessageHandler>>) -> Self {
        let inner = Arc::new(InnerProcessor {
            channel,
            handlers,
            cancellation_token: Default::default(),
        });

        let inner_main = inner.clone();
        tokio::spawn(async move {
            inner_main.start().await;
        });

        Self { inner }
    }

    /// Get a future which resolves when the processor is stopped.
    /// The future might immediately resolve if the processor has already stopped.
    pub fn stopped(&self) -> WaitForCancellationFuture<'_> {
        self.inner.cancellation_token.cancelled()
    }

    /// Stop the processor from processing any new messages.
    pub fn stop(&self) {
        self.inner.cancellation_token.cancel();
        self.inner.channel.close();
    }
}

#[derive(Debug)]
struct InnerProcessor {
    channel: IpcChannel,
    handlers: Vec<Box<dyn MessageHandler>>,
    cancellation_token: CancellationToken,
}

impl InnerProcessor {
    async fn start(self: &Arc<Self>) {
        loop {
            select! {
                _ = self.cancellation_token.cancelled() => break,
                message = self.channel.recv() => match message {
                    Some(message) => self.spawn_process(message),
                    None => break,
                },
            }
        }
        self.cancellation_token.cancel();
        self.channel.close();
        debug!("IPC channel processor main loop ended");
    }

    fn spawn_process(self: &Arc<Self>, message: FxMessage) {
        let processor = self.clone();
        tokio::spawn(async move {
            if let Err(e) = processor.handle_message(message).await {
                warn!("IPC channel processor failed to process message, {}", e);
            }
        });
    }

    async fn handle_message(&self, message: FxMessage) -> Result<()> {
        let message_type = message.message_type();
        trace!("IPC channel processor is handling message \"{}\"", message_type);
        if message_type == ApplicationTerminationRequest::NAME {
            debug!("IPC channel processor received termination request");
            self.cancellation_token.cancel();
            return Ok(());
        } else if message_type.is_empty() {
            return Err(Error::MissingMessageType);
        }

        let handler = self
            .handlers
            .iter()
            .find(|e| e.is_supported(message_type))
            .ok_or_else(|| Error::UnsupportedMessage(message_type.to_string()))?;

        if let Err(e) = handler.process(message, &self.channel).await {
            error!("Message handler {} encountered an error, {}", handler, e);
        }

        Ok(())
    }
}

impl FxMessage {
    pub fn message_type(&self) -> &str {
        self.type_.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::proto::application::GetApplicationVersionRequest;
    use crate::ipc::test::{create_channel_pair, within, MockMessageHandler};

    use std::time::Duration;
    use tokio::sync::mpsc::unbounded_channel;
    use zif_core::init_logger;
    use zif_core::recv_timeout;

    #[test]
    fn test_message_type() {
        let message_type = GetApplicationVersionRequest::NAME;
        let mut message = FxMessage::new();
        message.type_ = message_type.to_string();

        let result = message.message_type();

        assert_eq!(message_type, result);
    }

    #[tokio::test]
    async fn test_processor_dispatch_message() {
        init_logger!();
        let (tx, mut rx) = unbounded_channel();
        let (incoming, outgoing) = create_channel_pair().await;
        let mut handler = MockMessageHandler::new();
        handler
            .expect_is_supported()
            .returning(|message_type| message_type == GetApplicationVersionRequest::NAME);
        handler.expect_process().times(1).returning(move |message, _| {
            tx.send(message).unwrap();
            Ok(())
        });
        let _processor = IpcChannelProcessor::new(outgoing, vec![Box::new(handler)]);

        incoming
            .send(
                GetApplicationVersionRequest::new(),
                GetApplicationVersionRequest::NAME,
            )
            .await
            .unwrap();

        let result = recv_timeout!(&mut rx, Duration::from_millis(500));
        assert_eq!(GetApplicationVersionRequest::NAME, result.message_type());
    }

    #[tokio::test]
    async fn test_processor_termination_request() {
        init_logger!();
        let (incoming, outgoing) = create_channel_pair().await;
        let processor = IpcChannelProcessor::new(outgoing, vec![]);

        incoming
            .send(
                ApplicationTerminationRequest::new(),
                ApplicationTerminationRequest::NAME,
            )
            .await
            .unwrap();

        within(Duration::from_millis(500), processor.stopped()).await;
    }

    #[tokio::test]
    async fn test_processor_stopped_when_channel_closes() {
        init_logger!();
        let (incoming, outgoing) = create_channel_pair().await;
        let processor = IpcChannelProcessor::new(outgoing, vec![]);

        incoming.close();
        drop(incoming);

        within(Duration::from_millis(500), processor.stopped()).await;
    }

    #[tokio::test]
    async fn test_processor_unsupported_message() {
        init_logger!();
        let (_incoming, outgoing) = create_channel_pair().await;
        let processor = IpcChannelProcessor::new(outgoing, vec![]);
        let mut message = FxMessage::new();
        message.type_ = "LoremRequest".to_string();

        let result = processor.inner.handle_message(message).await;

        assert_eq!(
            Err(Error::UnsupportedMessage("LoremRequest".to_string())),
            result
        );
    }
}
