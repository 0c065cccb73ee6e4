pub mod config;
pub mod session;
pub mod stream;
pub mod torrents;
