// Route table binding paths to page components

use std::cell::OnceCell;
use wellbeing_core::{Binding, Route};
use yew::prelude::*;

use crate::pages;

/// Renders a page
pub type PageRenderer = fn() -> Html;

/// Produces a route's page renderer on first navigation
pub type PageLoader = fn(Route) -> PageRenderer;

/// How a route obtains its page
#[derive(Clone, Copy)]
pub enum PageBinding {
    Eager(PageRenderer),
    Lazy(PageLoader),
}

struct RouteEntry {
    route: Route,
    binding: PageBinding,
    resolved: OnceCell<PageRenderer>,
}

/// Result of matching a location
#[derive(Clone, Copy)]
pub struct Resolution {
    /// Matched route, `None` for unknown paths
    pub route: Option<Route>,
    pub render: PageRenderer,
}

/// Literal path table with eager and lazy page bindings.
///
/// Unknown paths resolve to the not-found page.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    not_found: PageRenderer,
}

impl RouteTable {
    /// The application's table
    pub fn new() -> Self {
        let bindings = Route::ALL
            .into_iter()
            .map(|route| (route, page_binding(route)))
            .collect();
        Self::from_bindings(bindings, pages::not_found::render)
    }

    pub fn from_bindings(bindings: Vec<(Route, PageBinding)>, not_found: PageRenderer) -> Self {
        let entries = bindings
            .into_iter()
            .map(|(route, binding)| {
                let resolved = OnceCell::new();
                if let PageBinding::Eager(render) = binding {
                    let _ = resolved.set(render);
                }
                RouteEntry {
                    route,
                    binding,
                    resolved,
                }
            })
            .collect();

        Self { entries, not_found }
    }

    /// Match `location` and return the page to render
    pub fn resolve(&self, location: &str) -> Resolution {
        let entry = Route::recognize(location)
            .and_then(|route| self.entries.iter().find(|entry| entry.route == route));

        let Some(entry) = entry else {
            tracing::debug!(location, "no route matched");
            return Resolution {
                route: None,
                render: self.not_found,
            };
        };

        let render = *entry.resolved.get_or_init(|| {
            match entry.binding {
                PageBinding::Lazy(load) => {
                    tracing::debug!(route = entry.route.name(), "loading page");
                    load(entry.route)
                }
                PageBinding::Eager(render) => render,
            }
        });

        Resolution {
            route: Some(entry.route),
            render,
        }
    }

    /// Whether the route's page has been resolved
    pub fn is_loaded(&self, route: Route) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.route == route && entry.resolved.get().is_some())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn page_binding(route: Route) -> PageBinding {
    match route.binding() {
        Binding::Eager => PageBinding::Eager(page_renderer(route)),
        Binding::Lazy => PageBinding::Lazy(page_renderer),
    }
}

fn page_renderer(route: Route) -> PageRenderer {
    match route {
        Route::Home => pages::home::render,
        Route::BreathingSpace => pages::breathing::render,
        Route::FlipCards => pages::flip_cards::render,
        Route::SpeechCheck => pages::speech_check::render,
        Route::CursorBuddy => pages::cursor_buddy::render,
        Route::AiPredict => pages::ai_predict::render,
        Route::HealthInsights => pages::health_insights::render,
        Route::MetricsDashboard => pages::metrics::render,
        Route::Game => pages::game::render,
        Route::Music => pages::music::render,
    }
}
