// Metrics dashboard: the four aggregated metrics

use crate::components::RequestView;
use crate::context::use_api;
use crate::remote::{run_request, RequestState};
use wellbeing_core::{MetricKind, MetricsQuery};
use yew::prelude::*;

pub fn render() -> Html {
    html! { <MetricsDashboard /> }
}

#[derive(Properties, PartialEq)]
struct MetricPanelProps {
    kind: MetricKind,
}

#[function_component(MetricPanel)]
fn metric_panel(props: &MetricPanelProps) -> Html {
    let api = use_api();
    let state = use_state(RequestState::default);

    {
        let state = state.clone();
        use_effect_with(props.kind, move |kind| {
            let kind = *kind;
            run_request(state, async move { api.metrics(kind, &MetricsQuery::new()).await });
            || ()
        });
    }

    html! {
        <section class="metric-panel">
            <h2>{ props.kind.label() }</h2>
            <RequestView state={(*state).clone()} />
        </section>
    }
}

#[function_component(MetricsDashboard)]
pub fn metrics_dashboard() -> Html {
    html! {
        <div class="page metrics">
            <h1>{ "メトリクス" }</h1>
            <div class="metric-grid">
                { for MetricKind::ALL.into_iter().map(|kind| html! {
                    <MetricPanel key={kind.slug()} {kind} />
                }) }
            </div>
        </div>
    }
}
