use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use stockx_core::{models::PriceHistory, Result, StockXError};

#[derive(Debug, Deserialize)]
pub struct BrowseResponse {
    #[serde(rename = "Products")]
    pub products: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    #[serde(rename = "Product")]
    pub product: Value,
}

// Price chart API response types
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    #[serde(rename = "xAxis")]
    pub x_axis: ChartAxis,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Deserialize)]
pub struct ChartAxis {
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartSeries {
    pub data: Vec<f64>,
}

impl TryFrom<ChartResponse> for PriceHistory {
    type Error = StockXError;

    fn try_from(resp: ChartResponse) -> Result<Self> {
        let prices = resp
            .series
            .into_iter()
            .next()
            .ok_or_else(|| StockXError::Shape("chart has no series".to_string()))?
            .data;
        let time_ranges = resp.x_axis.categories;

        if time_ranges.len() != prices.len() {
            return Err(StockXError::Shape(format!(
                "chart has {} labels but {} prices",
                time_ranges.len(),
                prices.len()
            )));
        }

        Ok(PriceHistory {
            time_ranges,
            prices,
        })
    }
}

/// Reads a typed envelope out of a decoded body. A body that does not fit
/// is reported as a shape error, since it already parsed as JSON.
pub fn from_body<T: DeserializeOwned>(body: Value, what: &str) -> Result<T> {
    serde_json::from_value(body).map_err(|e| StockXError::Shape(format!("{}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_converts_to_aligned_history() {
        let body = json!({
            "xAxis": {"categories": ["2022-01", "2022-02", "2022-03"]},
            "series": [{"name": "Price", "data": [180, 175.5, 190]}]
        });
        let chart: ChartResponse = from_body(body, "chart").unwrap();
        let history = PriceHistory::try_from(chart).unwrap();

        assert_eq!(history.time_ranges, vec!["2022-01", "2022-02", "2022-03"]);
        assert_eq!(history.prices, vec![180.0, 175.5, 190.0]);
    }

    #[test]
    fn chart_without_series_is_rejected() {
        let body = json!({"xAxis": {"categories": []}, "series": []});
        let chart: ChartResponse = from_body(body, "chart").unwrap();
        let err = PriceHistory::try_from(chart).unwrap_err();
        assert!(matches!(err, StockXError::Shape(_)));
    }

    #[test]
    fn misaligned_chart_is_rejected() {
        let body = json!({
            "xAxis": {"categories": ["a", "b"]},
            "series": [{"data": [1.0]}]
        });
        let chart: ChartResponse = from_body(body, "chart").unwrap();
        assert!(PriceHistory::try_from(chart).is_err());
    }

    #[test]
    fn missing_envelope_key_is_a_shape_error() {
        let err = from_body::<BrowseResponse>(json!({"error": "blocked"}), "browse").unwrap_err();
        assert!(matches!(err, StockXError::Shape(ref msg) if msg.contains("Products")));
    }
}
