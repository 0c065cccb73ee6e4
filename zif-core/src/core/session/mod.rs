pub use errors::*;
pub use manager::*;
pub use model::*;

mod errors;
mod manager;
mod model;
