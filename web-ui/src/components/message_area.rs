// Message area

use crate::messages::{get_message_class, Message};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
    pub message: Option<Message>,
}

#[function_component(MessageArea)]
pub fn message_area(props: &MessageAreaProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="message-area">
                <div class={get_message_class(message.level)}>{ &message.text }</div>
            </div>
        },
        None => html! {},
    }
}
