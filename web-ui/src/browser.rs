// Browser history and document glue

use crate::errors::UiError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::Browser("window is not available".to_string()))
}

/// Current path, query and fragment; "/" when unavailable
pub fn current_location() -> String {
    let location = window().map(|w| w.location()).and_then(|location| {
        let path = location.pathname()?;
        let search = location.search()?;
        let hash = location.hash()?;
        Ok(format!("{}{}{}", path, search, hash))
    });

    match location {
        Ok(location) => location,
        Err(e) => {
            tracing::error!("failed to read location: {}", e);
            "/".to_string()
        }
    }
}

/// Origin of the current page, e.g. "https://example.com"
pub fn page_origin() -> Option<String> {
    match window().and_then(|w| Ok(w.location().origin()?)) {
        Ok(origin) => Some(origin),
        Err(e) => {
            tracing::error!("failed to read origin: {}", e);
            None
        }
    }
}

/// Push a history entry for `path`
pub fn push_history(path: &str) {
    let result = window().and_then(|w| {
        w.history()?
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))?;
        Ok(())
    });

    if let Err(e) = result {
        tracing::error!(path, "failed to push history: {}", e);
    }
}

/// Set the document title
pub fn set_document_title(title: &str) {
    match window().map(|w| w.document()) {
        Ok(Some(document)) => document.set_title(title),
        Ok(None) => tracing::error!("document is not available"),
        Err(e) => tracing::error!("failed to set title: {}", e),
    }
}

/// `popstate` subscription, removed on drop
pub struct PopStateListener {
    closure: Closure<dyn FnMut()>,
}

impl PopStateListener {
    pub fn register(on_change: impl FnMut() + 'static) -> Result<Self, UiError> {
        let closure = Closure::<dyn FnMut()>::new(on_change);
        window()?
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        Ok(Self { closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
