use crate::ipc::proto::application::{GetApplicationVersionRequest, GetApplicationVersionResponse};
use crate::ipc::proto::message::FxMessage;
use crate::ipc::{Error, IpcChannel, MessageHandler, Result};
use async_trait::async_trait;
use derive_more::Display;
use protobuf::Message;

/// Answers the presentation layer with the version of the running bridge,
/// which allows it to detect an outdated bridge binary.
#[derive(Debug, Display)]
#[display("application handler ({})", version)]
pub struct ApplicationMessageHandler {
    version: String,
}

impl ApplicationMessageHandler {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[async_trait]
impl MessageHandler for ApplicationMessageHandler {
    fn name(&self) -> &str {
        "application"
    }

    fn is_supported(&self, message_type: &str) -> bool {
        message_type == GetApplicationVersionRequest::NAME
    }

    async fn process(&self, message: FxMessage, channel: &IpcChannel) -> Result<()> {
        if message.message_type() != GetApplicationVersionRequest::NAME {
            return Err(Error::UnsupportedMessage(message.message_type().to_string()));
        }

        let mut response = GetApplicationVersionResponse::new();
        response.version = self.version.clone();
        channel
            .send_reply(&message, response, GetApplicationVersionResponse::NAME)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::test::{create_channel_pair, request};

    use zif_core::init_logger;

    #[tokio::test]
    async fn test_process_get_application_version() {
        init_logger!();
        let (presentation, bridge) = create_channel_pair().await;
        let handler = ApplicationMessageHandler::new("2.1.0");

        let result: GetApplicationVersionResponse = request(
            &presentation,
            &bridge,
            &handler,
            GetApplicationVersionRequest::new(),
        )
        .await;

        assert_eq!("2.1.0", result.version);
    }

    #[tokio::test]
    async fn test_process_unsupported_message() {
        init_logger!();
        let (_presentation, bridge) = create_channel_pair().await;
        let handler = ApplicationMessageHandler::new("2.1.0");
        let mut message = FxMessage::new();
        message.type_ = "StreamMagnetRequest".to_string();

        let result = handler.process(message, &bridge).await;

        assert_eq!(
            Err(Error::UnsupportedMessage("StreamMagnetRequest".to_string())),
            result
        );
        assert!(!handler.is_supported("StreamMagnetRequest"));
    }
}
