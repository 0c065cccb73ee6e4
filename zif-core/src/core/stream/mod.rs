pub use errors::*;
pub use media_type::*;
pub use range::*;
pub use server::*;

mod errors;
mod media_type;
mod range;
mod server;
