use common::analytics::CHART_TITLE;
use common::{HazardCounts, Report};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::interop::to_js;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn resize_plot(element: &Element);
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsChartProps {
    pub reports: Rc<Vec<Report>>,
    pub visible: bool,
}

/// Bar chart of report counts per hazard type, redrawn whenever the report
/// list changes.
#[function_component(AnalyticsChart)]
pub fn analytics_chart(props: &AnalyticsChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.reports.clone(), move |reports| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let counts = HazardCounts::from_reports(reports);
                let series = counts.chart_series();
                log::debug!("Charting {} reports across {} types", counts.total(), series.labels.len());

                let trace = serde_json::json!([{
                    "x": series.labels,
                    "y": series.values,
                    "type": "bar",
                    "name": "Number of Reports",
                    "marker": {
                        "color": series.fill_colors,
                        "line": {"color": series.border_colors, "width": 1}
                    }
                }]);

                let layout = serde_json::json!({
                    "title": {"text": CHART_TITLE},
                    "margin": {"t": 40, "r": 10, "l": 40, "b": 40},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "yaxis": {"rangemode": "tozero", "dtick": 1}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(&div_id, to_js(&trace), to_js(&layout), to_js(&config));
                }
            }
            || ()
        });
    }

    // Drawn while hidden, the plot has no size until re-laid out
    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.visible, move |visible| {
            if *visible {
                if let Some(element) = chart_ref.cast::<Element>() {
                    resize_plot(&element);
                }
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id="analyticsChart" class="chart-container" style="height: 350px;"></div>
    }
}
