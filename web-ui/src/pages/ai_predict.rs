// AI predict: JSON records or an xlsx sheet

use crate::components::{MessageArea, RequestView};
use crate::context::use_api;
use crate::errors::UiError;
use crate::files::{read_file, selected_file};
use crate::messages::{message_from_ui_error, Message};
use crate::remote::{run_request, RequestState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <AiPredict /> }
}

/// Parse the records textarea
fn parse_records(text: &str) -> Result<serde_json::Value, UiError> {
    if text.trim().is_empty() {
        return Err(UiError::InvalidInput("レコードを入力してください".to_string()));
    }
    serde_json::from_str(text)
        .map_err(|e| UiError::InvalidInput(format!("JSONの形式が正しくありません ({})", e)))
}

#[function_component(AiPredict)]
pub fn ai_predict() -> Html {
    let api = use_api();
    let records = use_state(String::new);
    let file = use_state(|| None::<web_sys::File>);
    let prediction = use_state(RequestState::default);
    let message = use_state(|| None::<Message>);

    let on_records_input = {
        let records = records.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            records.set(input.value());
        })
    };

    let on_predict_json = {
        let api = api.clone();
        let records = records.clone();
        let prediction = prediction.clone();
        let message = message.clone();
        Callback::from(move |_| match parse_records(&records) {
            Ok(payload) => {
                message.set(None);
                let api = api.clone();
                run_request(prediction.clone(), async move {
                    api.ai_predict_json(&payload).await
                });
            }
            Err(e) => message.set(Some(message_from_ui_error(&e))),
        })
    };

    let on_file = {
        let file = file.clone();
        Callback::from(move |e: Event| file.set(selected_file(&e)))
    };

    let on_predict_xlsx = {
        let api = api.clone();
        let file = file.clone();
        let prediction = prediction.clone();
        let message = message.clone();
        Callback::from(move |_| {
            let Some(selected) = (*file).clone() else {
                message.set(Some(Message::warning("Excelファイルを選択してください")));
                return;
            };
            message.set(None);
            prediction.set(RequestState::Loading);

            let api = api.clone();
            let prediction = prediction.clone();
            let message = message.clone();
            spawn_local(async move {
                match read_file(&selected).await {
                    Ok(upload) => {
                        prediction.set(RequestState::from_result(api.ai_predict_xlsx(upload).await));
                    }
                    Err(e) => {
                        tracing::error!("failed to read spreadsheet: {}", e);
                        prediction.set(RequestState::Idle);
                        message.set(Some(message_from_ui_error(&e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="page ai-predict">
            <h1>{ "AI予測" }</h1>
            <section>
                <h2>{ "JSONで予測" }</h2>
                <textarea
                    class="records-input"
                    placeholder={r#"[{"sleep_hours": 7, "screen_time": 3}]"#}
                    value={(*records).clone()}
                    oninput={on_records_input}
                />
                <button onclick={on_predict_json} disabled={prediction.is_loading()}>{ "予測する" }</button>
            </section>
            <section>
                <h2>{ "Excelで予測" }</h2>
                <input type="file" accept=".xlsx" onchange={on_file} />
                <button onclick={on_predict_xlsx} disabled={prediction.is_loading()}>{ "アップロード" }</button>
            </section>
            <MessageArea message={(*message).clone()} />
            <RequestView state={(*prediction).clone()} />
        </div>
    }
}
