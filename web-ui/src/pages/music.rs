// Music: ambient sound suggestions

use yew::prelude::*;

pub fn render() -> Html {
    html! { <MusicView /> }
}

const TRACKS: [(&str, &str); 4] = [
    ("雨音", "一定のリズムで集中を助けます"),
    ("波の音", "呼吸をゆっくり整えたいときに"),
    ("森の朝", "鳥のさえずりで気分転換"),
    ("焚き火", "寝る前のリラックスに"),
];

#[function_component(MusicView)]
pub fn music_view() -> Html {
    let selected = use_state(|| None::<usize>);

    let render_track = |(index, (title, description)): (usize, &(&str, &str))| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_| selected.set(Some(index)))
        };
        let active = *selected == Some(index);

        html! {
            <li class={classes!("track", active.then(|| "active"))} key={index} {onclick}>
                <strong>{ *title }</strong>
                <span>{ *description }</span>
            </li>
        }
    };

    html! {
        <div class="page music">
            <h1>{ "音楽" }</h1>
            <ul class="track-list">
                { for TRACKS.iter().enumerate().map(render_track) }
            </ul>
        </div>
    }
}
