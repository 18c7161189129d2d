// API client library for the wellbeing dashboard
//
// This crate provides the request layer and the named API operations used
// by the browser-based frontend.

pub mod api;
pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use api::Api;
pub use errors::ApiError;
pub use http_client::HttpClient;
