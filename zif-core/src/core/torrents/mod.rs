pub use engine::*;
pub use errors::*;
pub use http::*;
pub use magnet::*;

mod engine;
mod errors;
mod http;
mod magnet;
