// Shared API client for components

use crate::browser;
use std::ops::Deref;
use std::rc::Rc;
use wellbeing_api_client::Api;
use wellbeing_core::ApiConfig;
use yew::prelude::*;

/// API client shared through a `ContextProvider`
#[derive(Debug, Clone)]
pub struct ApiHandle(Rc<Api>);

impl ApiHandle {
    pub fn new(api: Api) -> Self {
        Self(Rc::new(api))
    }

    /// Client configured from the environment.
    ///
    /// Without a configured base URL requests go to the page origin.
    pub fn from_env() -> Self {
        let config = ApiConfig::from_env();
        let config = match browser::page_origin() {
            Some(origin) => config.or_origin(&origin),
            None => config,
        };
        tracing::debug!(base = config.base_url.as_str(), "api client configured");
        Self::new(Api::new(&config))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = Api;

    fn deref(&self) -> &Api {
        &self.0
    }
}

/// API client from context, or a fresh one when rendered outside `App`
#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>().unwrap_or_else(ApiHandle::from_env)
}
