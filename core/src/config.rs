// Client configuration

use crate::url::ApiBase;
use std::env;

/// Environment variable holding the API base URL
pub const API_BASE_ENV: &str = "API_BASE_URL";

/// Configuration injected into the API client at construction time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load the base URL.
    ///
    /// Order: `API_BASE_URL` at run time, then the value captured at build
    /// time (the only source inside the browser), then empty.
    pub fn from_env() -> Self {
        let base_url = env::var(API_BASE_ENV)
            .ok()
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .unwrap_or_default();
        Self { base_url }
    }

    pub fn api_base(&self) -> ApiBase {
        ApiBase::new(self.base_url.clone())
    }

    /// Use `origin` as the base when none is configured.
    ///
    /// HTTP clients need absolute URLs, so same-origin calls are made
    /// against the page origin.
    pub fn or_origin(self, origin: &str) -> Self {
        if self.api_base().is_same_origin() {
            Self::new(origin)
        } else {
            self
        }
    }
}
