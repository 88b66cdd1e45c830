use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of the prediction horizon. Wire form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictUnit {
    #[default]
    Days,
    Months,
    Years,
}

impl PredictUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictUnit::Days => "days",
            PredictUnit::Months => "months",
            PredictUnit::Years => "years",
        }
    }

    /// Parses a `<select>` option value, falling back to days.
    pub fn from_value(value: &str) -> Self {
        match value {
            "months" => PredictUnit::Months,
            "years" => PredictUnit::Years,
            _ => PredictUnit::Days,
        }
    }
}

impl fmt::Display for PredictUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of one fetch, exactly as the user typed them.
/// Type coercion only; malformed values are the endpoint's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuery {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub predict_value: u32,
    pub predict_unit: PredictUnit,
}

impl Default for StockQuery {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2025-02-06".to_string(),
            predict_value: 30,
            predict_unit: PredictUnit::Days,
        }
    }
}

impl StockQuery {
    /// Query-string form understood by the prediction endpoint.
    pub fn to_query_string(&self) -> String {
        format!(
            "ticker={}&start={}&end={}&predict_days={}&predict_unit={}",
            self.ticker, self.start_date, self.end_date, self.predict_value, self.predict_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = StockQuery::default();
        assert_eq!(query.ticker, "AAPL");
        assert_eq!(query.start_date, "2024-06-01");
        assert_eq!(query.end_date, "2025-02-06");
        assert_eq!(query.predict_value, 30);
        assert_eq!(query.predict_unit, PredictUnit::Days);
    }

    #[test]
    fn test_query_string_field_names() {
        let query = StockQuery {
            ticker: "MSFT".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            predict_value: 6,
            predict_unit: PredictUnit::Months,
        };

        assert_eq!(
            query.to_query_string(),
            "ticker=MSFT&start=2024-01-01&end=2024-12-31&predict_days=6&predict_unit=months"
        );
    }

    #[test]
    fn test_predict_unit_select_values() {
        for unit in [PredictUnit::Days, PredictUnit::Months, PredictUnit::Years] {
            assert_eq!(PredictUnit::from_value(unit.as_str()), unit);
        }
        assert_eq!(PredictUnit::from_value("fortnights"), PredictUnit::Days);
    }

    #[test]
    fn test_predict_unit_wire_form() {
        assert_eq!(serde_json::to_string(&PredictUnit::Years).unwrap(), "\"years\"");
        let unit: PredictUnit = serde_json::from_str("\"months\"").unwrap();
        assert_eq!(unit, PredictUnit::Months);
    }
}
