use crate::ipc::proto::stream;
use protobuf::MessageField;
use zif_core::core::session::{Error, SessionState, StreamNotification};
use zif_core::core::torrents::{TorrentFile, TorrentStats};

impl From<&TorrentFile> for stream::stream::File {
    fn from(value: &TorrentFile) -> Self {
        Self {
            path: value.path.clone(),
            size: value.size,
            special_fields: Default::default(),
        }
    }
}

impl From<&StreamNotification> for stream::stream::Notification {
    fn from(value: &StreamNotification) -> Self {
        Self {
            info_hash: value.info_hash.clone(),
            name: value.name.clone(),
            files: value.files.iter().map(stream::stream::File::from).collect(),
            port: value.port as u32,
            special_fields: Default::default(),
        }
    }
}

impl From<SessionState> for stream::stream::State {
    fn from(value: SessionState) -> Self {
        match value {
            SessionState::Idle => Self::IDLE,
            SessionState::Resolving => Self::RESOLVING,
            SessionState::Binding => Self::BINDING,
            SessionState::Ready => Self::READY,
            SessionState::Error => Self::ERROR,
        }
    }
}

impl From<&TorrentStats> for stream::stream::Stats {
    fn from(value: &TorrentStats) -> Self {
        Self {
            progress: value.progress,
            downloaded: value.downloaded,
            total_size: value.total_size,
            finished: value.finished,
            special_fields: Default::default(),
        }
    }
}

impl From<&Error> for stream::stream::Error {
    fn from(value: &Error) -> Self {
        let type_ = match value {
            Error::InvalidRequest(_) => stream::stream::error::Type::INVALID_REQUEST,
            Error::Timeout(_) => stream::stream::error::Type::TIMEOUT,
            Error::Server(_) => stream::stream::error::Type::SERVER,
            Error::Torrent(_) => stream::stream::error::Type::TORRENT,
            Error::Cancelled => stream::stream::error::Type::CANCELLED,
        };

        Self {
            type_: type_.into(),
            message: value.to_string(),
            special_fields: Default::default(),
        }
    }
}

/// Create the torrent event which is pushed to the given subscription.
pub fn torrent_ready_event(
    subscription_id: u32,
    notification: &StreamNotification,
) -> stream::TorrentEvent {
    stream::TorrentEvent {
        subscription_id,
        type_: stream::torrent_event::Type::READY.into(),
        notification: MessageField::some(notification.into()),
        error: MessageField::none(),
        special_fields: Default::default(),
    }
}

/// Create the failed torrent event which is pushed to the given subscription.
pub fn torrent_failed_event(subscription_id: u32, error: &Error) -> stream::TorrentEvent {
    stream::TorrentEvent {
        subscription_id,
        type_: stream::torrent_event::Type::FAILED.into(),
        notification: MessageField::none(),
        error: MessageField::some(error.into()),
        special_fields: Default::default(),
    }
}
