mod error;
mod read;

pub use error::{Error, ErrorKind, Result};
pub use read::Read;
