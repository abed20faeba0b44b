use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A product record reduced to the requested fields.
pub type ProductSummary = Map<String, Value>;

/// Fields returned by product lookups unless the caller asks for others.
pub const DEFAULT_PRODUCT_FIELDS: [&str; 6] =
    ["title", "id", "brand", "retailPrice", "urlKey", "market"];

/// Activity categories served by the shared `activity` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityState {
    Sales,
    Asks,
    Bids,
}

impl ActivityState {
    /// Upstream state code for this category.
    pub fn code(&self) -> u16 {
        match self {
            ActivityState::Sales => 480,
            ActivityState::Asks => 400,
            ActivityState::Bids => 300,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ActivityState::Sales => "sales",
            ActivityState::Asks => "asks",
            ActivityState::Bids => "bids",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort options for the sales feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQuery {
    pub sort: String,
    pub order: SortOrder,
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self {
            sort: "createdAt".to_string(),
            order: SortOrder::Desc,
        }
    }
}

/// Parameters for the price chart endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChartQuery {
    /// Passed through verbatim; `"all"` asks for the full history.
    pub start_date: String,
    /// `None` means "today", resolved when the request is built.
    pub end_date: Option<NaiveDate>,
    pub intervals: u32,
}

impl PriceChartQuery {
    pub fn resolved_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for PriceChartQuery {
    fn default() -> Self {
        Self {
            start_date: "all".to_string(),
            end_date: None,
            intervals: 20,
        }
    }
}

/// Price samples aligned by index with their time-range labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub time_ranges: Vec<String>,
    pub prices: Vec<f64>,
}

impl PriceHistory {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates `(label, price)` pairs in upstream order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.time_ranges
            .iter()
            .map(String::as_str)
            .zip(self.prices.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_codes_are_fixed() {
        assert_eq!(ActivityState::Sales.code(), 480);
        assert_eq!(ActivityState::Asks.code(), 400);
        assert_eq!(ActivityState::Bids.code(), 300);
    }

    #[test]
    fn sort_order_renders_upper_case() {
        assert_eq!(SortOrder::Asc.to_string(), "ASC");
        assert_eq!(SortOrder::default().as_str(), "DESC");
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"ASC\"");
    }

    #[test]
    fn sales_query_defaults_to_newest_first() {
        let query = SalesQuery::default();
        assert_eq!(query.sort, "createdAt");
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn chart_query_defaults() {
        let query = PriceChartQuery::default();
        assert_eq!(query.start_date, "all");
        assert_eq!(query.intervals, 20);
        assert!(query.end_date.is_none());
    }

    #[test]
    fn explicit_end_date_wins_over_today() {
        let date = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        let query = PriceChartQuery {
            end_date: Some(date),
            ..Default::default()
        };
        assert_eq!(query.resolved_end_date(), date);
    }

    #[test]
    fn missing_end_date_resolves_to_today() {
        let before = Local::now().date_naive();
        let resolved = PriceChartQuery::default().resolved_end_date();
        let after = Local::now().date_naive();
        assert!(resolved == before || resolved == after);
    }

    #[test]
    fn price_history_points_are_aligned() {
        let history = PriceHistory {
            time_ranges: vec!["Jan".into(), "Feb".into()],
            prices: vec![150.0, 162.5],
        };
        let points: Vec<_> = history.points().collect();
        assert_eq!(points, vec![("Jan", 150.0), ("Feb", 162.5)]);
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
    }
}
