pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use api::ApiUrl;
pub use config::ApiConfig;
pub use error::ConfigError;
pub use utils::{build_url, normalize_path};
