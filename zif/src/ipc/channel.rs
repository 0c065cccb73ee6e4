use crate::ipc::errors::{Error, Result};
use crate::ipc::proto::message::FxMessage;
use byteorder::{BigEndian, ByteOrder};
use log::{debug, error, trace, warn};
use protobuf::Message;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{split, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::{oneshot, Mutex};
use tokio::{select, time};
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// The byte length of the frame header which holds the message length.
const FRAME_HEADER_LEN: usize = 4;

/// The duplex byte stream over which the IPC messages are exchanged.
/// This is the local socket of the presentation layer, or any other stream such as TCP.
pub trait IpcStream: AsyncRead + AsyncWrite + Send + Unpin + 'static {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin + 'static> IpcStream for T {}

type BoxedStream = Box<dyn IpcStream>;

/// An IPC channel used for communication with the presentation layer process.
///
/// Each message is framed by its length as a 4 byte big endian prefix,
/// followed by the protobuf encoded [FxMessage].
#[derive(Debug, Clone)]
pub struct IpcChannel {
    inner: Arc<InnerIpcChannel>,
}

impl IpcChannel {
    pub fn new(stream: impl IpcStream, timeout: Duration) -> Self {
        let (reader, writer) = split(Box::new(stream) as BoxedStream);
        let (reader_sender, reader_receiver) = unbounded_channel();
        let (incoming_sender, incoming_receiver) = unbounded_channel();

        let inner = Arc::new(InnerIpcChannel {
            sequence_id: Default::default(),
            writer: Mutex::new(writer),
            incoming_sender,
            incoming: Mutex::new(incoming_receiver),
            pending_requests: Default::default(),
            timeout,
            cancellation_token: Default::default(),
        });

        let inner_main = inner.clone();
        tokio::spawn(async move {
            inner_main.start(reader_receiver).await;
        });

        let mut reader = IpcChannelReader {
            reader,
            sender: reader_sender,
            timeout,
            cancellation_token: inner.cancellation_token.clone(),
        };
        tokio::spawn(async move {
            reader.start().await;
        });

        Self { inner }
    }

    /// Try to receive a new message from the channel.
    /// Replies to messages sent through [IpcChannel::get] are never returned by this fn.
    ///
    /// # Returns
    ///
    /// It returns a message when received, else [None] when the channel is closed.
    pub async fn recv(&self) -> Option<FxMessage> {
        let mut incoming = self.inner.incoming.lock().await;
        select! {
            biased;
            _ = self.inner.cancellation_token.cancelled() => None,
            message = incoming.recv() => message,
        }
    }

    /// Send the given message and create a receiver which resolves with the reply to the message.
    ///
    /// # Returns
    ///
    /// It returns a receiver for the reply, else the error that occurred while sending the message.
    pub async fn get(
        &self,
        message: impl Message,
        message_type: &str,
    ) -> Result<oneshot::Receiver<FxMessage>> {
        self.inner.get(message, message_type).await
    }

    /// Send the given message to the channel.
    pub async fn send(&self, message: impl Message, message_type: &str) -> Result<()> {
        self.inner.send_message(message, message_type, None).await
    }

    /// Reply to a request message with a response.
    /// This will link the response to the request and send it to the channel.
    pub async fn send_reply(
        &self,
        request: &FxMessage,
        message: impl Message,
        message_type: &str,
    ) -> Result<()> {
        self.inner
            .send_message(message, message_type, Some(request.sequence_id))
            .await
    }

    /// Close the IPC channel.
    pub fn close(&self) {
        trace!("IPC channel is being closed");
        self.inner.cancellation_token.cancel();
    }

    /// Get a future which resolves when the channel is closed.
    /// The future might immediately resolve if the channel is already closed.
    pub fn closed(&self) -> WaitForCancellationFuture<'_> {
        self.inner.cancellation_token.cancelled()
    }
}

struct InnerIpcChannel {
    sequence_id: AtomicU32,
    writer: Mutex<WriteHalf<BoxedStream>>,
    incoming_sender: UnboundedSender<FxMessage>,
    incoming: Mutex<UnboundedReceiver<FxMessage>>,
    pending_requests: Mutex<HashMap<u32, oneshot::Sender<FxMessage>>>,
    timeout: Duration,
    cancellation_token: CancellationToken,
}

impl InnerIpcChannel {
    async fn start(&self, mut reader_receiver: UnboundedReceiver<FxMessage>) {
        loop {
            select! {
                _ = self.cancellation_token.cancelled() => break,
                message = reader_receiver.recv() => match message {
                    Some(message) => self.handle_message(message).await,
                    None => break,
                },
            }
        }
        self.cancellation_token.cancel();
        self.pending_requests.lock().await.clear();
        debug!("IPC channel main loop ended");
    }

    async fn handle_message(&self, message: FxMessage) {
        match message.reply_to {
            None => {
                if self.incoming_sender.send(message).is_err() {
                    warn!("IPC channel failed to buffer message, receiver has been closed");
                }
            }
            Some(reply_id) => match self.pending_requests.lock().await.remove(&reply_id) {
                None => {
                    warn!(
                        "IPC channel failed to process message, unknown reply id {}",
                        reply_id
                    );
                }
                Some(sender) => {
                    if sender.send(message).is_err() {
                        debug!("IPC channel reply {} is no longer awaited", reply_id);
                    }
                }
            },
        }
    }

    async fn get(
        &self,
        message: impl Message,
        message_type: &str,
    ) -> Result<oneshot::Receiver<FxMessage>> {
        let sequence_id = self.next_sequence_id();
        let (sender, receiver) = oneshot::channel();

        self.pending_requests
            .lock()
            .await
            .insert(sequence_id, sender);

        if let Err(e) = self
            .send_payload(sequence_id, message.write_to_bytes()?, message_type, None)
            .await
        {
            self.pending_requests.lock().await.remove(&sequence_id);
            return Err(e);
        }

        Ok(receiver)
    }

    async fn send_message(
        &self,
        message: impl Message,
        message_type: &str,
        reply_to: Option<u32>,
    ) -> Result<()> {
        let sequence_id = self.next_sequence_id();
        self.send_payload(sequence_id, message.write_to_bytes()?, message_type, reply_to)
            .await
    }

    /// Try to write the given message payload as a single frame to the channel.
    async fn send_payload(
        &self,
        sequence_id: u32,
        payload: Vec<u8>,
        message_type: &str,
        reply_to: Option<u32>,
    ) -> Result<()> {
        if self.cancellation_token.is_cancelled() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "channel has been closed",
            )));
        }
        if reply_to.is_some() && message_type.ends_with("Request") {
            warn!(
                "IPC channel detected potential incorrect response type \"{}\"",
                message_type
            );
        }

        let message = FxMessage {
            type_: message_type.to_string(),
            sequence_id,
            reply_to,
            payload,
            special_fields: Default::default(),
        };
        let bytes = message.write_to_bytes()?;
        let mut header = [0u8; FRAME_HEADER_LEN];
        BigEndian::write_u32(&mut header, bytes.len() as u32);

        trace!(
            "IPC channel is trying to write message \"{}\" ({} bytes)",
            message_type,
            bytes.len()
        );
        let start_time = Instant::now();
        let mut writer = self.writer.lock().await;
        select! {
            _ = time::sleep(self.timeout) => Err(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "writer timed out sending payload"))),
            result = Self::write_frame(&mut writer, &header, &bytes) => result,
        }?;
        debug!(
            "IPC channel wrote message \"{}\" ({} bytes) in {}ms",
            message_type,
            bytes.len(),
            start_time.elapsed().as_millis()
        );
        Ok(())
    }

    async fn write_frame(
        writer: &mut WriteHalf<BoxedStream>,
        header: &[u8],
        bytes: &[u8],
    ) -> Result<()> {
        writer.write_all(header).await?;
        writer.write_all(bytes).await?;
        writer.flush().await?;
        Ok(())
    }

    fn next_sequence_id(&self) -> u32 {
        self.sequence_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Debug for InnerIpcChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InnerIpcChannel")
            .field("sequence_id", &self.sequence_id)
            .field("timeout", &self.timeout)
            .field("cancellation_token", &self.cancellation_token)
            .finish()
    }
}

struct IpcChannelReader {
    reader: ReadHalf<BoxedStream>,
    sender: UnboundedSender<FxMessage>,
    timeout: Duration,
    cancellation_token: CancellationToken,
}

impl IpcChannelReader {
    async fn start(&mut self) {
        loop {
            let mut header = [0u8; FRAME_HEADER_LEN];

            select! {
                _ = self.cancellation_token.cancelled() => break,
                read_result = self.reader.read_exact(&mut header) => {
                    match read_result {
                        Ok(_) => {
                            if let Err(e) = self.read_frame(&header).await {
                                error!("IPC channel reader failed to handle message, {}", e);
                                break;
                            }
                        },
                        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                            trace!("IPC channel reader received EOF");
                            break;
                        },
                        Err(e) => {
                            error!("IPC channel reader encountered an error, {}", e);
                            break;
                        }
                    }
                },
            }
        }
        self.cancellation_token.cancel();
        debug!("IPC channel reader main loop ended");
    }

    async fn read_frame(&mut self, header: &[u8]) -> Result<()> {
        if header.len() != FRAME_HEADER_LEN {
            return Err(Error::InvalidLength);
        }

        let start_time = Instant::now();
        let len = BigEndian::read_u32(header) as usize;
        let mut buffer = vec![0u8; len];

        trace!("IPC channel reader is reading message (size {})", len);
        select! {
            _ = time::sleep(self.timeout) => Err(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "timed out while reading message payload"))),
            result = self.reader.read_exact(&mut buffer) => result.map_err(Error::from),
        }?;

        let message = FxMessage::parse_from_bytes(&buffer)?;
        debug!(
            "IPC channel read message \"{}\" ({} bytes) in {}ms",
            message.type_,
            buffer.len(),
            start_time.elapsed().as_millis()
        );
        if let Err(e) = self.sender.send(message) {
            warn!(
                "IPC channel reader failed to send payload for processing, {}",
                e
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ipc::proto::application::{
        GetApplicationVersionRequest, GetApplicationVersionResponse,
    };
    use crate::ipc::test::{create_channel_pair, within};

    use tokio::io::duplex;
    use zif_core::init_logger;

    #[tokio::test]
    async fn test_ipc_channel_get() {
        init_logger!();
        let (incoming, outgoing) = create_channel_pair().await;

        let receiver = incoming
            .get(
                GetApplicationVersionRequest::default(),
                GetApplicationVersionRequest::NAME,
            )
            .await
            .unwrap();
        let message = within(Duration::from_millis(200), outgoing.recv())
            .await
            .expect("expected to receive a message");
        assert_eq!(GetApplicationVersionRequest::NAME, message.type_.as_str());

        let result = outgoing
            .send_reply(
                &message,
                GetApplicationVersionResponse {
                    version: "1.0.0".to_string(),
                    special_fields: Default::default(),
                },
                GetApplicationVersionResponse::NAME,
            )
            .await;
        assert_eq!(Ok(()), result, "expected the response to have been sent");

        let result = within(Duration::from_millis(200), receiver)
            .await
            .expect("expected to receive a response");
        let response = GetApplicationVersionResponse::parse_from_bytes(&result.payload).unwrap();
        assert_eq!(GetApplicationVersionResponse::NAME, result.type_.as_str());
        assert_eq!("1.0.0", response.version);
    }

    #[tokio::test]
    async fn test_ipc_channel_frame_format() {
        init_logger!();
        let (client, mut server) = duplex(1024);
        let channel = IpcChannel::new(client, Duration::from_secs(1));

        channel
            .send(
                GetApplicationVersionRequest::default(),
                GetApplicationVersionRequest::NAME,
            )
            .await
            .unwrap();

        let mut header = [0u8; FRAME_HEADER_LEN];
        server.read_exact(&mut header).await.unwrap();
        let mut buffer = vec![0u8; BigEndian::read_u32(&header) as usize];
        server.read_exact(&mut buffer).await.unwrap();
        let result = FxMessage::parse_from_bytes(&buffer).unwrap();

        assert_eq!(GetApplicationVersionRequest::NAME, result.type_.as_str());
        assert_eq!(None, result.reply_to);
    }

    #[tokio::test]
    async fn test_ipc_channel_closed_on_eof() {
        init_logger!();
        let (client, server) = duplex(1024);
        let channel = IpcChannel::new(client, Duration::from_secs(1));

        drop(server);

        within(Duration::from_millis(500), channel.closed()).await;
        assert_eq!(None, channel.recv().await);
    }

    #[tokio::test]
    async fn test_ipc_channel_send_after_close() {
        init_logger!();
        let (incoming, _outgoing) = create_channel_pair().await;

        incoming.close();
        let result = incoming
            .send(
                GetApplicationVersionRequest::default(),
                GetApplicationVersionRequest::NAME,
            )
            .await;

        assert_eq!(
            Err(Error::Io(io::Error::from(io::ErrorKind::NotConnected))),
            result
        );
    }
}
