pub mod error_handler;
pub mod misc;

pub use error_handler::{ConfigError, NotifyError, StoreError};
pub use misc::*;
