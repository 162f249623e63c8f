// URL handling utilities
pub mod url_builder;

pub use url_builder::{build_url, normalize_path};
