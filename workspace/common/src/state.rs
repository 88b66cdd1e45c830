use crate::{HistoricalPoint, PredictUnit, PredictedPoint, StockQuery, StockSeriesResponse};

/// State transitions of the stock view.
#[derive(Debug, Clone, PartialEq)]
pub enum StockAction {
    SetTicker(String),
    SetStartDate(String),
    SetEndDate(String),
    SetPredictValue(u32),
    SetPredictUnit(PredictUnit),
    FetchStarted,
    FetchSucceeded(StockSeriesResponse),
    FetchFailed(String),
}

/// Everything the stock view renders from.
///
/// Series data survives failed fetches; only a successful response replaces
/// it, wholesale. `label_ticker` is the ticker at the most recent successful
/// fetch completion and is what chart labels use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub query: StockQuery,
    pub historical: Vec<HistoricalPoint>,
    pub predicted: Vec<PredictedPoint>,
    pub label_ticker: Option<String>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl ViewState {
    /// Applies one transition, returning the next state. Last write wins on
    /// the query fields; fetch settlement always clears `loading`.
    pub fn apply(&self, action: StockAction) -> ViewState {
        let mut next = self.clone();
        match action {
            StockAction::SetTicker(value) => next.query.ticker = value,
            StockAction::SetStartDate(value) => next.query.start_date = value,
            StockAction::SetEndDate(value) => next.query.end_date = value,
            StockAction::SetPredictValue(value) => next.query.predict_value = value,
            StockAction::SetPredictUnit(value) => next.query.predict_unit = value,
            StockAction::FetchStarted => {
                next.loading = true;
                next.last_error = None;
            }
            StockAction::FetchSucceeded(response) => {
                next.historical = response.historical_data;
                next.predicted = response.future_predictions;
                next.label_ticker = Some(next.query.ticker.clone());
                next.loading = false;
            }
            StockAction::FetchFailed(error) => {
                next.last_error = Some(error);
                next.loading = false;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradeDate;

    fn success_response() -> StockSeriesResponse {
        StockSeriesResponse {
            historical_data: vec![HistoricalPoint {
                date: TradeDate::Text("2024-06-03".to_string()),
                close: 190.5,
            }],
            future_predictions: vec![],
        }
    }

    #[test]
    fn test_setters_last_write_wins() {
        let state = ViewState::default()
            .apply(StockAction::SetTicker("MSFT".to_string()))
            .apply(StockAction::SetTicker("GOOG".to_string()))
            .apply(StockAction::SetStartDate("2023-01-01".to_string()))
            .apply(StockAction::SetPredictValue(90))
            .apply(StockAction::SetPredictValue(7))
            .apply(StockAction::SetPredictUnit(PredictUnit::Years));

        assert_eq!(state.query.ticker, "GOOG");
        assert_eq!(state.query.start_date, "2023-01-01");
        assert_eq!(state.query.end_date, "2025-02-06");
        assert_eq!(state.query.predict_value, 7);
        assert_eq!(state.query.predict_unit, PredictUnit::Years);
    }

    #[test]
    fn test_fetch_started_sets_loading_and_clears_error() {
        let state = ViewState {
            last_error: Some("HTTP error: 500".to_string()),
            ..ViewState::default()
        };

        let state = state.apply(StockAction::FetchStarted);
        assert!(state.loading);
        assert!(state.last_error.is_none());

        // A repeated start while already loading changes nothing.
        assert_eq!(state.apply(StockAction::FetchStarted), state);
    }

    #[test]
    fn test_success_replaces_series_wholesale() {
        let mut state = ViewState::default().apply(StockAction::FetchStarted);
        state.predicted = vec![PredictedPoint {
            date: TradeDate::Text("2024-01-01".to_string()),
            predicted_close: 1.0,
        }];

        let state = state.apply(StockAction::FetchSucceeded(success_response()));
        assert!(!state.loading);
        assert_eq!(state.historical.len(), 1);
        assert_eq!(state.historical[0].close, 190.5);
        // The old predicted series is not merged into the empty one.
        assert!(state.predicted.is_empty());
        assert_eq!(state.label_ticker.as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_failure_retains_series_and_clears_loading() {
        let before = ViewState::default()
            .apply(StockAction::FetchStarted)
            .apply(StockAction::FetchSucceeded(success_response()));

        let after = before
            .apply(StockAction::FetchStarted)
            .apply(StockAction::FetchFailed("Request failed: connection refused".to_string()));

        assert!(!after.loading);
        assert_eq!(after.historical, before.historical);
        assert_eq!(after.predicted, before.predicted);
        assert_eq!(
            after.last_error.as_deref(),
            Some("Request failed: connection refused")
        );
    }

    #[test]
    fn test_label_ticker_fixed_at_completion() {
        let state = ViewState::default()
            .apply(StockAction::FetchStarted)
            // Edits made while the request is in flight count: the label is
            // the ticker at completion time.
            .apply(StockAction::SetTicker("NVDA".to_string()))
            .apply(StockAction::FetchSucceeded(success_response()));
        assert_eq!(state.label_ticker.as_deref(), Some("NVDA"));

        // Edits after completion do not relabel existing charts.
        let state = state.apply(StockAction::SetTicker("AMD".to_string()));
        assert_eq!(state.label_ticker.as_deref(), Some("NVDA"));
    }
}
