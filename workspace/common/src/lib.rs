//! Transport-layer types mirroring the stock prediction API's payloads,
//! plus the pure view-state core the frontend drives.
//! The wire structs match the endpoint's JSON shapes so the frontend can
//! deserialize responses without duplicating them.

mod dataset;
mod query;
mod state;

pub use dataset::{ChartDataset, historical_dataset, predicted_dataset};
pub use query::{PredictUnit, StockQuery};
pub use state::{StockAction, ViewState};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date field of a series point as the API sends it.
///
/// Historical rows carry the raw aggregate timestamp in epoch milliseconds;
/// prediction rows carry `YYYY-MM-DD` strings. Both forms must deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TradeDate {
    EpochMillis(i64),
    Text(String),
}

impl TradeDate {
    /// Presentable label, e.g. `Jun 03, 2024`. Unrecognized date strings are
    /// displayed verbatim rather than erroring.
    pub fn display(&self) -> String {
        match self {
            TradeDate::EpochMillis(ms) => match DateTime::from_timestamp_millis(*ms) {
                Some(dt) => dt.date_naive().format("%b %d, %Y").to_string(),
                None => {
                    log::warn!("Out-of-range epoch timestamp in series point: {}", ms);
                    ms.to_string()
                }
            },
            TradeDate::Text(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => date.format("%b %d, %Y").to_string(),
                Err(_) => raw.clone(),
            },
        }
    }
}

/// One past closing price. The endpoint also sends `open`/`high`/`low` on
/// historical rows; those are ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: TradeDate,
    pub close: f64,
}

/// One model-predicted closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedPoint {
    pub date: TradeDate,
    #[serde(rename = "predictedClose")]
    pub predicted_close: f64,
}

/// Response body of `GET /stock`. Both fields are optional on the wire;
/// absence means an empty series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockSeriesResponse {
    #[serde(default, rename = "historicalData")]
    pub historical_data: Vec<HistoricalPoint>,
    #[serde(default, rename = "futurePredictions")]
    pub future_predictions: Vec<PredictedPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let body = r#"{
            "historicalData": [{"date": "2024-06-03", "close": 190.5}],
            "futurePredictions": [{"date": "2025-02-07", "predictedClose": 201.25}]
        }"#;

        let response: StockSeriesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.historical_data.len(), 1);
        assert_eq!(response.historical_data[0].close, 190.5);
        assert_eq!(response.future_predictions.len(), 1);
        assert_eq!(response.future_predictions[0].predicted_close, 201.25);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let response: StockSeriesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.historical_data.is_empty());
        assert!(response.future_predictions.is_empty());

        let response: StockSeriesResponse =
            serde_json::from_str(r#"{"historicalData": [{"date": "2024-06-03", "close": 190.5}]}"#)
                .unwrap();
        assert_eq!(response.historical_data.len(), 1);
        assert!(response.future_predictions.is_empty());
    }

    #[test]
    fn test_historical_row_with_epoch_date_and_ohlc_extras() {
        // Shape the backend emits for historical rows: epoch-millis date plus
        // open/high/low fields this model does not keep.
        let body = r#"{
            "historicalData": [
                {"date": 1717372800000, "open": 191.1, "close": 192.25, "high": 193.0, "low": 190.4}
            ]
        }"#;

        let response: StockSeriesResponse = serde_json::from_str(body).unwrap();
        let point = &response.historical_data[0];
        assert_eq!(point.date, TradeDate::EpochMillis(1717372800000));
        assert_eq!(point.close, 192.25);
        assert_eq!(point.date.display(), "Jun 03, 2024");
    }

    #[test]
    fn test_trade_date_display() {
        assert_eq!(
            TradeDate::Text("2024-06-03".to_string()).display(),
            "Jun 03, 2024"
        );
        // Unrecognized strings pass through untouched.
        assert_eq!(
            TradeDate::Text("yesterday".to_string()).display(),
            "yesterday"
        );
    }
}
