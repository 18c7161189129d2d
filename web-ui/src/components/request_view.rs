// Loading / result / error display for one API call

use crate::components::{JsonView, MessageArea};
use crate::remote::RequestState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequestViewProps {
    pub state: RequestState,
    /// Custom rendering of a loaded value; pretty JSON when absent
    #[prop_or_default]
    pub render: Option<Callback<serde_json::Value, Html>>,
}

#[function_component(RequestView)]
pub fn request_view(props: &RequestViewProps) -> Html {
    match &props.state {
        RequestState::Idle => html! {},
        RequestState::Loading => html! { <div class="loading">{ "読み込み中..." }</div> },
        RequestState::Loaded(value) => match &props.render {
            Some(render) => render.emit(value.clone()),
            None => html! { <JsonView value={value.clone()} /> },
        },
        RequestState::Failed(message) => html! { <MessageArea message={Some(message.clone())} /> },
    }
}
