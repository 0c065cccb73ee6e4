use std::{io, result};
use thiserror::Error;

/// The result type of the stream module.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while serving torrent files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the stream server couldn't be bound to {0}, {1}")]
    Bind(String, io::Error),
    #[error("the stream server has already been closed")]
    Closed,
    #[error("invalid stream range")]
    InvalidRange,
    #[error("stream range {0} cannot be satisfied for {1} bytes")]
    NotSatisfiable(String, u64),
    #[error("stream parsing error occurred, {0}")]
    Parse(String),
    #[error("an io error occurred, {0}")]
    Io(io::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bind(a, _), Self::Bind(b, _)) => a == b,
            (Self::Closed, Self::Closed) => true,
            (Self::InvalidRange, Self::InvalidRange) => true,
            (Self::NotSatisfiable(a, a_len), Self::NotSatisfiable(b, b_len)) => {
                a == b && a_len == b_len
            }
            (Self::Parse(_), Self::Parse(_)) => true,
            (Self::Io(_), Self::Io(_)) => true,
            _ => false,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_eq() {
        assert_eq!(
            Error::Bind("127.0.0.1:0".to_string(), new_io_error()),
            Error::Bind("127.0.0.1:0".to_string(), new_io_error())
        );
        assert_eq!(Error::Closed, Error::Closed);
        assert_eq!(Error::InvalidRange, Error::InvalidRange);
        assert_eq!(
            Error::NotSatisfiable("10-".to_string(), 5),
            Error::NotSatisfiable("10-".to_string(), 5)
        );
        assert_eq!(Error::Io(new_io_error()), Error::Io(new_io_error()));
        assert_ne!(
            Error::NotSatisfiable("10-".to_string(), 5),
            Error::NotSatisfiable("10-".to_string(), 20)
        );
        assert_ne!(Error::Closed, Error::InvalidRange);
    }

    #[test]
    fn test_from_io_error() {
        let result = Error::from(new_io_error());
        assert_eq!(Error::Io(new_io_error()), result);
    }

    fn new_io_error() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "Foo")
    }
}
