// Speech check: upload a recording for analysis

use crate::components::{MessageArea, RequestView};
use crate::context::use_api;
use crate::files::{read_file, selected_file};
use crate::messages::{message_from_ui_error, Message};
use crate::remote::RequestState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <SpeechCheck /> }
}

#[function_component(SpeechCheck)]
pub fn speech_check() -> Html {
    let api = use_api();
    let file = use_state(|| None::<web_sys::File>);
    let analysis = use_state(RequestState::default);
    let message = use_state(|| None::<Message>);

    let on_file = {
        let file = file.clone();
        Callback::from(move |e: Event| file.set(selected_file(&e)))
    };

    let on_analyze = {
        let api = api.clone();
        let file = file.clone();
        let analysis = analysis.clone();
        let message = message.clone();
        Callback::from(move |_| {
            let Some(selected) = (*file).clone() else {
                message.set(Some(Message::warning("音声ファイルを選択してください")));
                return;
            };
            message.set(None);
            analysis.set(RequestState::Loading);

            let api = api.clone();
            let analysis = analysis.clone();
            let message = message.clone();
            spawn_local(async move {
                match read_file(&selected).await {
                    Ok(upload) => {
                        analysis.set(RequestState::from_result(api.speech_analyze(upload).await));
                    }
                    Err(e) => {
                        tracing::error!("failed to read recording: {}", e);
                        analysis.set(RequestState::Idle);
                        message.set(Some(message_from_ui_error(&e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="page speech-check">
            <h1>{ "スピーチチェック" }</h1>
            <input type="file" accept="audio/*" onchange={on_file} />
            <button onclick={on_analyze} disabled={analysis.is_loading()}>{ "分析する" }</button>
            <MessageArea message={(*message).clone()} />
            <RequestView state={(*analysis).clone()} />
        </div>
    }
}
