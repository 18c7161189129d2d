// Pretty-printed JSON and text extraction

use serde_json::Value;
use yew::prelude::*;

/// First string (or number) found under `keys`, else the compact JSON text
pub fn display_text(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(|field| match field {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
}

#[derive(Properties, PartialEq)]
pub struct JsonViewProps {
    pub value: Value,
}

#[function_component(JsonView)]
pub fn json_view(props: &JsonViewProps) -> Html {
    let text = serde_json::to_string_pretty(&props.value).unwrap_or_else(|_| props.value.to_string());
    html! {
        <pre class="json-view">{ text }</pre>
    }
}
