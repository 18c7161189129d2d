// Bubble game: pop bubbles before time runs out

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <GameView /> }
}

const ROUND_SECONDS: u32 = 30;

#[function_component(GameView)]
pub fn game_view() -> Html {
    let score = use_state(|| 0u32);
    let remaining = use_state(|| 0u32);
    let best = use_state(|| 0u32);

    let playing = *remaining > 0;

    {
        let remaining = remaining.clone();
        use_effect_with(playing, move |playing| {
            let interval = playing.then(|| {
                let setter = remaining.setter();
                let mut left = *remaining;
                Interval::new(1_000, move || {
                    left = left.saturating_sub(1);
                    setter.set(left);
                })
            });
            move || drop(interval)
        });
    }

    {
        let score = *score;
        let best = best.clone();
        use_effect_with(playing, move |playing| {
            if !*playing && score > *best {
                best.set(score);
            }
            || ()
        });
    }

    let on_start = {
        let score = score.clone();
        let remaining = remaining.clone();
        Callback::from(move |_| {
            score.set(0);
            remaining.set(ROUND_SECONDS);
        })
    };

    let on_pop = {
        let score = score.clone();
        Callback::from(move |_| {
            if playing {
                score.set(*score + 1);
            }
        })
    };

    html! {
        <div class="page game">
            <h1>{ "バブルゲーム" }</h1>
            <p>{ format!("スコア: {} / ベスト: {}", *score, *best) }</p>
            <p>{ format!("残り{}秒", *remaining) }</p>
            if playing {
                <button class="bubble" onclick={on_pop}>{ "🫧" }</button>
            } else {
                <button onclick={on_start}>{ "スタート" }</button>
            }
        </div>
    }
}
