use common::FeedCostsView;
use yew::prelude::*;

use crate::components::charts::{bar_traces, chart_layout, PlotlyChart};
use super::MonthSelect;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: FeedCostsView,
    pub on_month: Callback<String>,
}

#[function_component(FeedCostsPage)]
pub fn feed_costs_page(props: &Props) -> Html {
    let view = &props.view;

    html! {
        <div class="flex flex-col gap-4">
            <MonthSelect
                months={view.months.clone()}
                selected={Some(view.selected_month.clone())}
                on_change={props.on_month.clone()}
            />

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{&view.heading}</h3>
                    <ul>
                        {for view.costs.iter().map(|cost| html! { <li>{cost.display_line()}</li> })}
                    </ul>
                </div>
            </div>

            <PlotlyChart
                id="chart-feed-costs"
                data={bar_traces(&view.bar_chart)}
                layout={chart_layout(&view.bar_chart.title, "Product", "Cost")}
            />
        </div>
    }
}
