pub mod config;
pub mod error;
pub mod traits;

pub use config::TrackConfig;
pub use error::{Result, TrackError};
pub use traits::Validate;
