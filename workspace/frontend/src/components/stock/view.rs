use yew::prelude::*;

use common::{StockAction, historical_dataset, predicted_dataset};

use super::chart::PriceChart;
use super::query_form::QueryForm;
use crate::api_client::stock::fetch_stock_series;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::Loading;
use crate::components::common::toast::ToastContext;
use crate::state::AppState;

/// The stock page: owns all view state and runs one fetch per button press.
#[function_component(StockView)]
pub fn stock_view() -> Html {
    let state = use_reducer(AppState::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: StockAction| state.dispatch(action))
    };

    let on_fetch = {
        let state = state.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_: ()| {
            // The button is disabled while loading; this guard keeps the
            // one-request-in-flight invariant even if it fires anyway.
            if state.view.loading {
                return;
            }

            let query = state.view.query.clone();
            log::info!("Fetching stock data for {}", query.ticker);
            state.dispatch(StockAction::FetchStarted);

            let state = state.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_stock_series(&query).await {
                    Ok(series) => state.dispatch(StockAction::FetchSucceeded(series)),
                    Err(e) => {
                        toast_ctx.show_error(format!("Failed to fetch stock data: {}", e));
                        state.dispatch(StockAction::FetchFailed(e));
                    }
                }
            });
        })
    };

    let view = &state.view;
    let historical = historical_dataset(view);
    let predicted = predicted_dataset(view);
    let nothing_fetched = view.historical.is_empty() && view.predicted.is_empty();

    html! {
        <>
            <QueryForm
                query={view.query.clone()}
                loading={view.loading}
                on_action={on_action}
                on_fetch={on_fetch.clone()}
            />

            {if view.loading && nothing_fetched {
                html! { <Loading text={Some("Fetching stock data...".to_string())} /> }
            } else {
                html! {}
            }}

            {match view.last_error.as_ref() {
                // With charts on screen the toast is enough; only an empty
                // page gets the full error display.
                Some(error) if !view.loading && nothing_fetched => html! {
                    <ErrorDisplay message={error.clone()} on_retry={Some(on_fetch)} />
                },
                _ => html! {},
            }}

            <div class="grid grid-cols-1 gap-6 mt-6">
                {if !view.historical.is_empty() {
                    html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{"Historical Stock Prices"}</h3>
                                <PriceChart
                                    div_id="historical-chart"
                                    dataset={historical}
                                    color="rgb(59, 130, 246)"
                                />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if !view.predicted.is_empty() {
                    html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{"Predicted Stock Prices"}</h3>
                                <PriceChart
                                    div_id="prediction-chart"
                                    dataset={predicted}
                                    color="rgb(34, 197, 94)"
                                />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </>
    }
}
