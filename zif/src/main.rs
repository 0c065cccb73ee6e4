use crate::ipc::{
    ApplicationMessageHandler, IpcChannel, IpcChannelProcessor, IpcStream, MessageHandler,
    StreamMessageHandler,
};
use crate::zif::{Zif, ZifArgs};
use clap::Parser;
use interprocess::local_socket::tokio::prelude::LocalSocketStream;
use interprocess::local_socket::traits::tokio::Stream;
use interprocess::local_socket::{
    GenericFilePath, GenericNamespaced, Name, NameType, ToFsName, ToNsName,
};
use log::{error, info};
use std::io;
use std::time::{Duration, Instant};
use tokio::select;

mod ipc;
mod zif;

/// The max time a single IPC frame may take to be written or read.
const IPC_TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = ZifArgs::parse();
    let socket = args.socket.clone();

    let start_time = Instant::now();
    let zif = Zif::new(args).map_err(|e| {
        eprintln!("Failed to start zif, {}", e);
        io::Error::other(e)
    })?;
    let time_taken = start_time.elapsed();
    info!(
        "Created new zif instance in {}.{:03} seconds",
        time_taken.as_secs(),
        time_taken.subsec_millis()
    );

    let conn = match connect(socket.as_str()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to the presentation layer at {}, {}", socket, e);
            return Err(e);
        }
    };

    start(conn, zif).await
}

async fn connect(socket: &str) -> io::Result<LocalSocketStream> {
    LocalSocketStream::connect(socket_name(socket)?).await
}

/// Resolve the local socket name of the presentation layer.
fn socket_name(socket: &str) -> io::Result<Name<'_>> {
    if GenericNamespaced::is_supported() {
        socket
            .trim_start_matches("/tmp/")
            .to_ns_name::<GenericNamespaced>()
    } else {
        socket.to_fs_name::<GenericFilePath>()
    }
}

/// Start the stream bridge of the given instance on the given connection.
/// This future keeps running until the bridge is terminated or the connection is closed.
async fn start(conn: impl IpcStream, zif: Zif) -> io::Result<()> {
    let channel = IpcChannel::new(conn, IPC_TIMEOUT);
    let handlers: Vec<Box<dyn MessageHandler>> = vec![
        Box::new(ApplicationMessageHandler::new(zif_core::VERSION)),
        Box::new(StreamMessageHandler::new(
            zif.manager().clone(),
            channel.clone(),
        )),
    ];
    let processor = IpcChannelProcessor::new(channel, handlers);

    select! {
        _ = tokio::signal::ctrl_c() => processor.stop(),
        _ = processor.stopped() => (),
    }

    zif.shutdown().await;
    Ok(())
}
