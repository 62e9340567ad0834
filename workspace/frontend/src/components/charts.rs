use common::{BarSeries, BoxPlot, Histogram};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub fn bar_traces(series: &BarSeries) -> Value {
    json!([{
        "x": series.labels,
        "y": series.values,
        "type": "bar",
        "marker": {"color": "#0ea5e9"}
    }])
}

/// Pre-binned histogram drawn as touching bars centred on each bin
pub fn histogram_traces(histogram: &Histogram) -> Value {
    let centers: Vec<f64> = histogram.bins.iter().map(|b| (b.start + b.end) / 2.0).collect();
    let widths: Vec<f64> = histogram.bins.iter().map(|b| b.end - b.start).collect();
    let counts: Vec<u32> = histogram.bins.iter().map(|b| b.count).collect();

    json!([{
        "x": centers,
        "y": counts,
        "width": widths,
        "type": "bar",
        "marker": {"color": "#14b8a6", "line": {"color": "#0f766e", "width": 1}}
    }])
}

pub fn box_traces(plot: &BoxPlot) -> Value {
    json!([{
        "y": plot.values,
        "type": "box",
        "boxpoints": "all",
        "jitter": 0.3,
        "name": "gross_millions",
        "marker": {"color": "#6366f1"}
    }])
}

pub fn chart_layout(title: &str, x_title: &str, y_title: &str) -> Value {
    json!({
        "title": {"text": title},
        "margin": {"t": 40, "r": 10, "l": 50, "b": 50},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "bargap": 0,
        "xaxis": {"title": {"text": x_title}, "showgrid": false},
        "yaxis": {"title": {"text": y_title}, "showgrid": true, "gridcolor": "#eee"}
    })
}

fn to_js(value: &Value) -> Option<JsValue> {
    match value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(js) => Some(js),
        Err(e) => {
            log::error!("Failed to convert chart data: {}", e);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub id: AttrValue,
    pub data: Value,
    pub layout: Value,
    #[prop_or(320)]
    pub height: u32,
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with((props.data.clone(), props.layout.clone()), move |(data, layout)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let config = json!({"responsive": true, "displayModeBar": false});
                let div_id = element.id();
                if let (false, Some(data), Some(layout), Some(config)) =
                    (div_id.is_empty(), to_js(data), to_js(layout), to_js(&config))
                {
                    log::trace!("Drawing chart {}", div_id);
                    newPlot(&div_id, data, layout, config);
                }
            }
            || ()
        });
    }

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container"
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::HistogramBin;

    #[test]
    fn test_bar_traces_pair_labels_and_values() {
        let series = BarSeries {
            title: "Gross Millions by Tank for January".to_string(),
            labels: vec!["Tank 1".to_string(), "Tank 2".to_string()],
            values: vec![3.0, 4.0],
        };

        let traces = bar_traces(&series);
        assert_eq!(traces[0]["x"], json!(["Tank 1", "Tank 2"]));
        assert_eq!(traces[0]["y"], json!([3.0, 4.0]));
        assert_eq!(traces[0]["type"], "bar");
    }

    #[test]
    fn test_histogram_traces_use_bin_centers() {
        let histogram = Histogram {
            title: "Distribution".to_string(),
            bins: vec![
                HistogramBin { start: 0.0, end: 2.0, count: 3 },
                HistogramBin { start: 2.0, end: 4.0, count: 1 },
            ],
        };

        let traces = histogram_traces(&histogram);
        assert_eq!(traces[0]["x"], json!([1.0, 3.0]));
        assert_eq!(traces[0]["width"], json!([2.0, 2.0]));
        assert_eq!(traces[0]["y"], json!([3, 1]));
    }

    #[test]
    fn test_layout_carries_title() {
        let layout = chart_layout("Product Costs for March", "Product", "Cost");
        assert_eq!(layout["title"]["text"], "Product Costs for March");
    }
}
