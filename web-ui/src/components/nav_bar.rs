// Navigation bar

use wellbeing_core::Route;
use yew::prelude::*;

fn label(route: Route) -> &'static str {
    match route {
        Route::Home => "ホーム",
        Route::BreathingSpace => "呼吸スペース",
        Route::FlipCards => "フリップカード",
        Route::SpeechCheck => "スピーチチェック",
        Route::CursorBuddy => "カーソルバディ",
        Route::AiPredict => "AI予測",
        Route::HealthInsights => "健康インサイト",
        Route::MetricsDashboard => "メトリクス",
        Route::Game => "ゲーム",
        Route::Music => "音楽",
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// Active route, `None` on the not-found page
    pub current: Option<Route>,
    pub on_navigate: Callback<String>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let render_link = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route.path().to_string());
        });
        let active = props.current == Some(route);

        html! {
            <a
                class={classes!("nav-link", active.then(|| "active"))}
                href={route.path()}
                key={route.name()}
                {onclick}
            >
                { label(route) }
            </a>
        }
    };

    html! {
        <nav class="nav-bar">
            { for Route::ALL.into_iter().map(render_link) }
        </nav>
    }
}
