// Cursor buddy: a companion that follows the pointer

use yew::prelude::*;

pub fn render() -> Html {
    html! { <CursorBuddyPage /> }
}

/// Pointer position inside an area whose top-left corner is at `origin`
fn relative_position(client: (i32, i32), origin: (f64, f64)) -> (i32, i32) {
    let x = f64::from(client.0) - origin.0;
    let y = f64::from(client.1) - origin.1;
    (x.round() as i32, y.round() as i32)
}

#[function_component(CursorBuddyPage)]
pub fn cursor_buddy_page() -> Html {
    let position = use_state(|| (0, 0));
    let area = use_node_ref();

    // client coordinates stay in the area's frame even over the buddy itself
    let on_move = {
        let position = position.clone();
        let area = area.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = area.cast::<web_sys::Element>() {
                let rect = element.get_bounding_client_rect();
                position.set(relative_position(
                    (e.client_x(), e.client_y()),
                    (rect.left(), rect.top()),
                ));
            }
        })
    };

    let (x, y) = *position;
    let style = format!("transform: translate({}px, {}px);", x, y);

    html! {
        <div class="page cursor-buddy">
            <h1>{ "カーソルバディ" }</h1>
            <div class="buddy-area" ref={area} onmousemove={on_move}>
                <div class="buddy" {style}>{ "🐣" }</div>
            </div>
        </div>
    }
}
