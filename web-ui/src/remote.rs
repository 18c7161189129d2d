// State of a single API call as seen by a component

use crate::messages::{message_from_error, Message};
use serde_json::Value;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use wellbeing_api_client::ApiError;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Loaded(Value),
    Failed(Message),
}

impl RequestState {
    pub fn from_result(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => RequestState::Loaded(value),
            Err(e) => {
                tracing::warn!("API call failed: {}", e);
                RequestState::Failed(message_from_error(&e))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            RequestState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Mark `state` as loading, run `call` and store its outcome
pub fn run_request<F>(state: UseStateHandle<RequestState>, call: F)
where
    F: Future<Output = Result<Value, ApiError>> + 'static,
{
    state.set(RequestState::Loading);
    spawn_local(async move {
        state.set(RequestState::from_result(call.await));
    });
}
