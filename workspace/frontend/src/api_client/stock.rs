use common::{StockQuery, StockSeriesResponse};

use crate::api_client;

/// Fetches the historical series and the model's predictions for one query.
pub async fn fetch_stock_series(query: &StockQuery) -> Result<StockSeriesResponse, String> {
    log::trace!(
        "Fetching stock series for {} from {} to {} (horizon {} {})",
        query.ticker,
        query.start_date,
        query.end_date,
        query.predict_value,
        query.predict_unit
    );

    let url = format!("/stock?{}", query.to_query_string());
    let result = api_client::get::<StockSeriesResponse>(&url).await;

    match &result {
        Ok(series) => log::info!(
            "Fetched {} historical and {} predicted points for {}",
            series.historical_data.len(),
            series.future_predictions.len(),
            query.ticker
        ),
        Err(e) => log::error!("Failed to fetch stock series: {}", e),
    }

    result
}
