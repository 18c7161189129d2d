// Client-side route table

/// How a route's page is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Page resolved when the route table is built
    Eager,
    /// Page resolved on first navigation to the route
    Lazy,
}

/// Pages reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    BreathingSpace,
    FlipCards,
    SpeechCheck,
    CursorBuddy,
    AiPredict,
    HealthInsights,
    MetricsDashboard,
    Game,
    Music,
}

impl Route {
    /// Every route, in table order
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::BreathingSpace,
        Route::FlipCards,
        Route::SpeechCheck,
        Route::CursorBuddy,
        Route::AiPredict,
        Route::HealthInsights,
        Route::MetricsDashboard,
        Route::Game,
        Route::Music,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::BreathingSpace => "/breathing",
            Route::FlipCards => "/flip-cards",
            Route::SpeechCheck => "/speech-check",
            Route::CursorBuddy => "/cursor-buddy",
            Route::AiPredict => "/ai-predict",
            Route::HealthInsights => "/about/health-insights",
            Route::MetricsDashboard => "/metrics",
            Route::Game => "/game",
            Route::Music => "/music",
        }
    }

    /// Route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::BreathingSpace => "BreathingSpace",
            Route::FlipCards => "FlipCards",
            Route::SpeechCheck => "speech-check",
            Route::CursorBuddy => "cursor-buddy",
            Route::AiPredict => "aiPredict",
            Route::HealthInsights => "HealthInsights",
            Route::MetricsDashboard => "MetricsDashboard",
            Route::Game => "Game",
            Route::Music => "Music",
        }
    }

    /// Document title set on navigation, if the route defines one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::HealthInsights => Some("Health Insights"),
            _ => None,
        }
    }

    pub fn binding(&self) -> Binding {
        match self {
            Route::HealthInsights | Route::MetricsDashboard | Route::Game | Route::Music => {
                Binding::Lazy
            }
            _ => Binding::Eager,
        }
    }

    /// Match a location against the table.
    ///
    /// Only the path component is compared, literally. Query string and
    /// fragment are ignored. Returns `None` for unknown paths.
    pub fn recognize(location: &str) -> Option<Route> {
        let path = location
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };

        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}
