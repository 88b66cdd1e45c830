use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::{PredictUnit, StockAction, StockQuery};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub query: StockQuery,
    pub loading: bool,
    pub on_action: Callback<StockAction>,
    pub on_fetch: Callback<()>,
}

#[function_component(QueryForm)]
pub fn query_form(props: &Props) -> Html {
    let on_ticker_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(StockAction::SetTicker(input.value()));
        })
    };

    let on_start_date_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(StockAction::SetStartDate(input.value()));
        })
    };

    let on_end_date_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(StockAction::SetEndDate(input.value()));
        })
    };

    let on_predict_value_input = {
        let on_action = props.on_action.clone();
        let current = props.query.predict_value;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Type coercion only: an unparseable edit keeps the last value.
            let value = input.value().parse::<u32>().unwrap_or(current);
            on_action.emit(StockAction::SetPredictValue(value));
        })
    };

    let on_predict_unit_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_action.emit(StockAction::SetPredictUnit(PredictUnit::from_value(
                &select.value(),
            )));
        })
    };

    let on_fetch_click = {
        let on_fetch = props.on_fetch.clone();
        Callback::from(move |_: MouseEvent| on_fetch.emit(()))
    };

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Fetch Historical Data"}</h3>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Stock Ticker"}</span></label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                placeholder="e.g. AAPL"
                                value={props.query.ticker.clone()}
                                oninput={on_ticker_input}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Start Date"}</span></label>
                            <input
                                type="date"
                                class="input input-bordered w-full"
                                value={props.query.start_date.clone()}
                                oninput={on_start_date_input}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"End Date"}</span></label>
                            <input
                                type="date"
                                class="input input-bordered w-full"
                                value={props.query.end_date.clone()}
                                oninput={on_end_date_input}
                            />
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Predict Future Prices"}</h3>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Prediction Range"}</span></label>
                            <input
                                type="number"
                                min="1"
                                class="input input-bordered w-full"
                                value={props.query.predict_value.to_string()}
                                oninput={on_predict_value_input}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Unit"}</span></label>
                            <select class="select select-bordered w-full" onchange={on_predict_unit_change}>
                                <option value="days" selected={props.query.predict_unit == PredictUnit::Days}>{"Days"}</option>
                                <option value="months" selected={props.query.predict_unit == PredictUnit::Months}>{"Months"}</option>
                                <option value="years" selected={props.query.predict_unit == PredictUnit::Years}>{"Years"}</option>
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="flex justify-center mt-6">
                <button
                    class="btn btn-primary"
                    onclick={on_fetch_click}
                    disabled={props.loading}
                >
                    {if props.loading {
                        html! { <><span class="loading loading-spinner loading-sm"></span>{" Fetching..."}</> }
                    } else {
                        html! { "Fetch Data" }
                    }}
                </button>
            </div>
        </>
    }
}
