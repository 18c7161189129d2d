// Health insights: disease search with paging

use crate::components::{display_text, RequestView};
use crate::context::use_api;
use crate::remote::{run_request, RequestState};
use serde_json::Value;
use wellbeing_core::SearchOptions;
use yew::prelude::*;

pub fn render() -> Html {
    html! { <HealthInsights /> }
}

/// Range label such as "全120件中 31-60件"
fn page_summary(value: &Value) -> Option<String> {
    let total = value.get("total")?.as_u64()?;
    let count = value.get("count")?.as_u64()?;
    let offset = value.get("offset")?.as_u64()?;
    if count == 0 {
        return Some(format!("全{}件", total));
    }
    Some(format!("全{}件中 {}-{}件", total, offset + 1, offset + count))
}

/// Query and paging behind the results on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SearchState {
    query: String,
    options: SearchOptions,
}

enum SearchAction {
    /// New search from the input box, starting at the first page
    Submit(String),
    Previous,
    Next,
}

impl SearchState {
    /// Paging keeps the submitted query, not the live input
    fn apply(&self, action: SearchAction) -> Self {
        match action {
            SearchAction::Submit(query) => Self {
                query,
                options: SearchOptions::default(),
            },
            SearchAction::Previous => Self {
                query: self.query.clone(),
                options: self.options.previous_page(),
            },
            SearchAction::Next => Self {
                query: self.query.clone(),
                options: self.options.next_page(),
            },
        }
    }
}

#[function_component(HealthInsights)]
pub fn health_insights() -> Html {
    let api = use_api();
    let query = use_state(String::new);
    let search_state = use_state(SearchState::default);
    let results = use_state(RequestState::default);

    let search = {
        let api = api.clone();
        let search_state = search_state.clone();
        let results = results.clone();
        Callback::from(move |action: SearchAction| {
            let next = search_state.apply(action);
            search_state.set(next.clone());
            let api = api.clone();
            run_request(results.clone(), async move {
                api.search_health_impact(&next.query, next.options).await
            });
        })
    };

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        search.reform(move |e: SubmitEvent| {
            e.prevent_default();
            SearchAction::Submit((*query).clone())
        })
    };
    let on_previous = search.reform(|_: MouseEvent| SearchAction::Previous);
    let on_next = search.reform(|_: MouseEvent| SearchAction::Next);

    let current = search_state.options;

    let has_more = results
        .value()
        .and_then(|value| {
            let total = value.get("total")?.as_u64()?;
            Some(u64::from(current.offset) + u64::from(current.limit) < total)
        })
        .unwrap_or(false);

    let render_results = Callback::from(|value: Value| {
        let items = value
            .get("items")
            .and_then(|items| items.as_array())
            .cloned()
            .unwrap_or_default();

        html! {
            <div class="search-results">
                if let Some(summary) = page_summary(&value) {
                    <p class="summary">{ summary }</p>
                }
                if items.is_empty() {
                    <p class="placeholder">{ "該当する結果はありません" }</p>
                }
                <ul>
                    { for items.iter().map(|item| html! {
                        <li>
                            <strong>{ display_text(item, &["disease", "name", "title"]) }</strong>
                            <span class="impact">{ display_text(item, &["impact", "description", "summary"]) }</span>
                        </li>
                    }) }
                </ul>
            </div>
        }
    });

    html! {
        <div class="page health-insights">
            <h1>{ "Health Insights" }</h1>
            <form onsubmit={on_submit}>
                <input
                    type="search"
                    placeholder="病名・症状で検索"
                    value={(*query).clone()}
                    oninput={on_query_input}
                />
                <button type="submit" disabled={results.is_loading()}>{ "検索" }</button>
            </form>
            <RequestView state={(*results).clone()} render={render_results} />
            <div class="pager">
                <button onclick={on_previous} disabled={current.offset == 0}>{ "前へ" }</button>
                <button onclick={on_next} disabled={!has_more}>{ "次へ" }</button>
            </div>
        </div>
    }
}
