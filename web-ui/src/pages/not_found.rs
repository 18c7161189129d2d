// Shown for paths missing from the route table

use yew::prelude::*;

pub fn render() -> Html {
    html! {
        <div class="page not-found">
            <h1>{ "ページが見つかりません" }</h1>
            <a href="/">{ "ホームへ戻る" }</a>
        </div>
    }
}
