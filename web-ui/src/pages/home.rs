// Home page: backend status, random tip and open data

use crate::components::{display_text, MessageArea, RequestView};
use crate::context::use_api;
use crate::errors::UiError;
use crate::messages::{message_from_ui_error, Message};
use crate::remote::{run_request, RequestState};
use yew::prelude::*;

pub fn render() -> Html {
    html! { <Home /> }
}

/// Parse a coordinate typed by the user
fn parse_coordinate(label: &str, raw: &str, max: f64) -> Result<f64, UiError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| UiError::InvalidInput(format!("{}を数値で入力してください", label)))?;
    if !value.is_finite() || value.abs() > max {
        return Err(UiError::InvalidInput(format!(
            "{}は-{}から{}の範囲で入力してください",
            label, max, max
        )));
    }
    Ok(value)
}

#[function_component(Home)]
pub fn home() -> Html {
    let api = use_api();
    let health = use_state(RequestState::default);
    let tip = use_state(RequestState::default);
    let mood = use_state(String::new);
    let lat = use_state(String::new);
    let lon = use_state(String::new);
    let weather = use_state(RequestState::default);
    let air = use_state(RequestState::default);
    let daylight = use_state(RequestState::default);
    let message = use_state(|| None::<Message>);

    {
        let api = api.clone();
        let health = health.clone();
        use_effect_with((), move |_| {
            run_request(health, async move { api.health().await });
            || ()
        });
    }

    let on_mood_input = {
        let mood = mood.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            mood.set(input.value());
        })
    };

    let on_tip = {
        let api = api.clone();
        let tip = tip.clone();
        let mood = mood.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let mood = mood.trim().to_string();
            run_request(tip.clone(), async move {
                let mood = (!mood.is_empty()).then_some(mood.as_str());
                api.random_tip(mood).await
            });
        })
    };

    let on_coordinate_input = |target: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            target.set(input.value());
        })
    };

    let on_open_data = {
        let api = api.clone();
        let (lat, lon) = (lat.clone(), lon.clone());
        let (weather, air, daylight) = (weather.clone(), air.clone(), daylight.clone());
        let message = message.clone();
        Callback::from(move |_| {
            let coordinates = parse_coordinate("緯度", &lat, 90.0)
                .and_then(|lat| Ok((lat, parse_coordinate("経度", &lon, 180.0)?)));
            let (lat, lon) = match coordinates {
                Ok(coordinates) => coordinates,
                Err(e) => {
                    message.set(Some(message_from_ui_error(&e)));
                    return;
                }
            };
            message.set(None);

            let api_weather = api.clone();
            run_request(weather.clone(), async move { api_weather.open_meteo(lat, lon).await });
            let api_air = api.clone();
            run_request(air.clone(), async move { api_air.air_quality(lat, lon).await });
            let api_daylight = api.clone();
            run_request(daylight.clone(), async move { api_daylight.daylight(lat, lon).await });
        })
    };

    let health_badge = match &*health {
        RequestState::Loaded(_) => html! { <span class="badge ok">{ "バックエンド: 正常" }</span> },
        RequestState::Failed(_) => html! { <span class="badge error">{ "バックエンド: 接続できません" }</span> },
        _ => html! { <span class="badge">{ "バックエンド: 確認中..." }</span> },
    };

    let render_tip = Callback::from(|value: serde_json::Value| {
        html! { <blockquote class="tip">{ display_text(&value, &["tip", "text", "content"]) }</blockquote> }
    });

    html! {
        <div class="page home">
            <h1>{ "ウェルビーイング・ダッシュボード" }</h1>
            { health_badge }

            <section class="tip-panel">
                <h2>{ "今日のヒント" }</h2>
                <input
                    type="text"
                    placeholder="気分 (例: calm)"
                    value={(*mood).clone()}
                    oninput={on_mood_input}
                />
                <button onclick={on_tip} disabled={tip.is_loading()}>{ "ヒントをもらう" }</button>
                <RequestView state={(*tip).clone()} render={render_tip} />
            </section>

            <section class="open-data-panel">
                <h2>{ "天気・空気・日照" }</h2>
                <input type="text" placeholder="緯度" value={(*lat).clone()} oninput={on_coordinate_input(lat.clone())} />
                <input type="text" placeholder="経度" value={(*lon).clone()} oninput={on_coordinate_input(lon.clone())} />
                <button onclick={on_open_data}>{ "取得" }</button>
                <MessageArea message={(*message).clone()} />
                <h3>{ "天気" }</h3>
                <RequestView state={(*weather).clone()} />
                <h3>{ "空気質" }</h3>
                <RequestView state={(*air).clone()} />
                <h3>{ "日照" }</h3>
                <RequestView state={(*daylight).clone()} />
            </section>
        </div>
    }
}
