pub use stream::*;

mod stream;
