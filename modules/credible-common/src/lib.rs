pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{CredibleError, SearchError};
pub use types::*;
