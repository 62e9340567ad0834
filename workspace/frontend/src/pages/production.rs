use common::ProductionView;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::charts::{bar_traces, box_traces, chart_layout, histogram_traces, PlotlyChart};
use super::MonthSelect;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: ProductionView,
    pub on_month: Callback<String>,
    /// Receives the text of a chosen CSV file
    pub on_upload: Callback<String>,
}

#[function_component(ProductionPage)]
pub fn production_page(props: &Props) -> Html {
    let view = &props.view;
    let toast_ctx = use_context::<ToastContext>();

    let on_file = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            log::debug!("Reading {} ({} bytes)", file.name(), file.size());

            let on_upload = on_upload.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(file.text()).await.map(|text| text.as_string()) {
                    Ok(Some(text)) => on_upload.emit(text),
                    _ => {
                        log::error!("Failed to read {}", file.name());
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(format!("Could not read {}", file.name()));
                        }
                    }
                }
            });
        })
    };

    let month = view.selected_month.clone().unwrap_or_default();

    html! {
        <div class="flex flex-col gap-4">
            <label class="form-control w-full max-w-md">
                <div class="label"><span class="label-text">{"Choose a CSV file"}</span></div>
                <input type="file" accept=".csv" class="file-input file-input-bordered" onchange={on_file} />
            </label>

            {if let Some(notice) = &view.notice {
                html! {
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{notice}</span>
                    </div>
                }
            } else {
                html! {}
            }}

            <MonthSelect
                months={view.months.clone()}
                selected={view.selected_month.clone()}
                on_change={props.on_month.clone()}
            />

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{&view.heading}</h3>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra table-sm">
                            <thead>
                                <tr>
                                    <th>{"tank"}</th>
                                    <th>{"gross_millions"}</th>
                                    <th>{"production_month"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for view.records.iter().map(|record| html! {
                                    <tr>
                                        <td>{&record.tank}</td>
                                        <td>{record.gross_millions.map(|g| g.to_string()).unwrap_or_else(|| "NaN".to_string())}</td>
                                        <td>{&record.production_month}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <PlotlyChart
                id="chart-gross-by-tank"
                data={bar_traces(&view.bar_chart)}
                layout={chart_layout(&view.bar_chart.title, "tank", "gross_millions")}
            />
            <PlotlyChart
                id="chart-gross-histogram"
                data={histogram_traces(&view.histogram)}
                layout={chart_layout(&view.histogram.title, "gross_millions", "count")}
            />
            <PlotlyChart
                id="chart-gross-box"
                data={box_traces(&view.box_plot)}
                layout={chart_layout(&view.box_plot.title, "", "gross_millions")}
            />
            <p class="text-xs text-gray-500">{format!("{} rows for {}", view.records.len(), month)}</p>
        </div>
    }
}
