// Web UI library for the wellbeing dashboard
//
// This crate provides the Yew application shell, the route table and the
// page components of the frontend.

use yew::prelude::*;

pub mod browser;
pub mod components;
pub mod context;
pub mod errors;
pub mod files;
pub mod messages;
pub mod pages;
pub mod remote;
pub mod router;

// Re-export components
pub use components::*;
pub use context::{use_api, ApiHandle};
pub use router::{PageBinding, Resolution, RouteTable};

/// Main application component（ルーティングとAPIクライアントの提供）
#[function_component(App)]
pub fn app() -> Html {
    let api = use_memo((), |_| ApiHandle::from_env());
    let table = use_memo((), |_| RouteTable::new());
    let location = use_state(browser::current_location);

    // Back/forward buttons
    {
        let set_location = location.setter();
        use_effect_with((), move |_| {
            let listener = browser::PopStateListener::register(move || {
                set_location.set(browser::current_location());
            });
            if let Err(e) = &listener {
                tracing::error!("failed to listen for popstate: {}", e);
            }
            move || drop(listener)
        });
    }

    let resolution = table.resolve(&location);

    {
        let route = resolution.route;
        use_effect_with((*location).clone(), move |location| {
            tracing::debug!(location = location.as_str(), route = ?route, "navigated");
            if let Some(title) = route.and_then(|route| route.title()) {
                browser::set_document_title(title);
            }
            || ()
        });
    }

    let on_navigate = {
        let location = location.clone();
        Callback::from(move |path: String| {
            if *location != path {
                browser::push_history(&path);
                location.set(path);
            }
        })
    };

    html! {
        <ContextProvider<ApiHandle> context={(*api).clone()}>
            <div class="app-container">
                <NavBar current={resolution.route} {on_navigate} />
                <main class="main-content">
                    { (resolution.render)() }
                </main>
            </div>
        </ContextProvider<ApiHandle>>
    }
}
