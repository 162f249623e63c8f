// API addressing
pub mod client;

pub use client::ApiUrl;
