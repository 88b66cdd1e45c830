use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use common::ChartDataset;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub div_id: AttrValue,
    pub dataset: ChartDataset,
    pub color: AttrValue,
}

/// One-trace line chart rendered through the plotly.js global.
#[function_component(PriceChart)]
pub fn price_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let dataset = props.dataset.clone();
    let div_id = props.div_id.to_string();
    let color = props.color.to_string();

    use_effect_with(
        (container_ref.clone(), dataset, div_id, color),
        move |(container_ref, dataset, div_id, color)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                // Set the ID on the element
                element.set_id(div_id);

                let trace = Scatter::new(dataset.labels.clone(), dataset.values.clone())
                    .mode(Mode::Lines)
                    .name(&dataset.label)
                    .line(plotly::common::Line::new().color(color.clone()).width(2.0));

                let layout = Layout::new()
                    .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Date")))
                    .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Close")))
                    .height(400);

                // Serialize trace to JSON and parse as JS object
                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                // Serialize layout to JSON and parse as JS object
                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(div_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
