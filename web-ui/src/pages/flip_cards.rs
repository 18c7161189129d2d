// Flip cards: load a deck and flip cards on click

use crate::components::{display_text, RequestView};
use crate::context::use_api;
use crate::remote::{run_request, RequestState};
use std::collections::HashSet;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <FlipCards /> }
}

#[function_component(FlipCards)]
pub fn flip_cards() -> Html {
    let api = use_api();
    let deck = use_state(RequestState::default);
    let flipped = use_state(HashSet::<usize>::new);

    let load = {
        let api = api.clone();
        let deck = deck.clone();
        let flipped = flipped.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            flipped.set(HashSet::new());
            run_request(deck.clone(), async move { api.flip_cards(None).await });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let render_deck = {
        let flipped = flipped.clone();
        Callback::from(move |value: serde_json::Value| {
            let cards = match &value {
                serde_json::Value::Array(cards) => cards.clone(),
                other => other
                    .get("items")
                    .and_then(|items| items.as_array())
                    .cloned()
                    .unwrap_or_default(),
            };

            let render_card = |(index, card): (usize, &serde_json::Value)| {
                let is_flipped = flipped.contains(&index);
                let onclick = {
                    let flipped = flipped.clone();
                    Callback::from(move |_| {
                        let mut next = (*flipped).clone();
                        if !next.remove(&index) {
                            next.insert(index);
                        }
                        flipped.set(next);
                    })
                };
                let text = if is_flipped {
                    display_text(card, &["back", "answer", "content"])
                } else {
                    display_text(card, &["front", "question", "title"])
                };

                html! {
                    <div class={classes!("flip-card", is_flipped.then(|| "flipped"))} key={index} {onclick}>
                        { text }
                    </div>
                }
            };

            html! {
                <div class="card-grid">
                    { for cards.iter().enumerate().map(render_card) }
                </div>
            }
        })
    };

    html! {
        <div class="page flip-cards">
            <h1>{ "フリップカード" }</h1>
            <button onclick={load.reform(|_: MouseEvent| ())}>{ "シャッフル" }</button>
            <RequestView state={(*deck).clone()} render={render_deck} />
        </div>
    }
}
