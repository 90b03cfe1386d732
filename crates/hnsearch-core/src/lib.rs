pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod stories;

pub use error::{FetchError, StorageError};
pub use session::SearchSession;
