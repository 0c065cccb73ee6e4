pub use application::*;
pub use channel::*;
pub use errors::*;
pub use message::*;
pub use stream::*;

mod application;
mod channel;
mod errors;
mod mappings;
mod message;
mod proto;
mod stream;
