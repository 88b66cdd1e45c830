use crate::ViewState;

/// Inputs for one chart trace, derived from the view state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    /// Series label shown in the chart legend.
    pub label: String,
    /// X-axis labels, dates ascending as received.
    pub labels: Vec<String>,
    /// Y-axis values.
    pub values: Vec<f64>,
}

fn label_ticker(state: &ViewState) -> &str {
    state
        .label_ticker
        .as_deref()
        .unwrap_or(&state.query.ticker)
}

/// Historical close series of the last successful fetch.
pub fn historical_dataset(state: &ViewState) -> ChartDataset {
    ChartDataset {
        label: format!("{} Stock Price", label_ticker(state)),
        labels: state.historical.iter().map(|p| p.date.display()).collect(),
        values: state.historical.iter().map(|p| p.close).collect(),
    }
}

/// Predicted close series of the last successful fetch.
pub fn predicted_dataset(state: &ViewState) -> ChartDataset {
    ChartDataset {
        label: format!("{} Predicted Price", label_ticker(state)),
        labels: state.predicted.iter().map(|p| p.date.display()).collect(),
        values: state.predicted.iter().map(|p| p.predicted_close).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StockAction, StockSeriesResponse, ViewState};

    fn fetched_state() -> ViewState {
        let body = r#"{
            "historicalData": [
                {"date": 1717372800000, "close": 190.5},
                {"date": "2024-06-04", "close": 192.0}
            ],
            "futurePredictions": [
                {"date": "2025-02-07", "predictedClose": 201.25}
            ]
        }"#;
        let response: StockSeriesResponse = serde_json::from_str(body).unwrap();

        ViewState::default()
            .apply(StockAction::FetchStarted)
            .apply(StockAction::FetchSucceeded(response))
    }

    #[test]
    fn test_historical_dataset_order_and_values() {
        let dataset = historical_dataset(&fetched_state());
        assert_eq!(dataset.label, "AAPL Stock Price");
        assert_eq!(dataset.labels, vec!["Jun 03, 2024", "Jun 04, 2024"]);
        assert_eq!(dataset.values, vec![190.5, 192.0]);
    }

    #[test]
    fn test_predicted_dataset() {
        let dataset = predicted_dataset(&fetched_state());
        assert_eq!(dataset.label, "AAPL Predicted Price");
        assert_eq!(dataset.labels, vec!["Feb 07, 2025"]);
        assert_eq!(dataset.values, vec![201.25]);
    }

    #[test]
    fn test_datasets_are_idempotent() {
        let state = fetched_state();
        assert_eq!(historical_dataset(&state), historical_dataset(&state));
        assert_eq!(predicted_dataset(&state), predicted_dataset(&state));
    }

    #[test]
    fn test_labels_ignore_later_ticker_edits() {
        let state = fetched_state().apply(StockAction::SetTicker("TSLA".to_string()));
        assert_eq!(historical_dataset(&state).label, "AAPL Stock Price");
        assert_eq!(predicted_dataset(&state).label, "AAPL Predicted Price");
    }

    #[test]
    fn test_empty_state_uses_current_ticker() {
        // Before any fetch there is nothing to render, but the derivation is
        // still total.
        let state = ViewState::default();
        let dataset = historical_dataset(&state);
        assert_eq!(dataset.label, "AAPL Stock Price");
        assert!(dataset.labels.is_empty());
        assert!(dataset.values.is_empty());
    }
}
