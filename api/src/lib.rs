//! Read-only client for the StockX web API.
//!
//! [`StockXClient`] searches products, looks up product details and price
//! history, and reads the sales, asks and bids feeds for a product.

mod client;
mod config;
mod endpoints;
mod types;

pub use client::StockXClient;
pub use config::{ClientConfig, API_BASE_URL, DEFAULT_USER_AGENT};
pub use stockx_core::models::{
    ActivityState, PriceChartQuery, PriceHistory, ProductSummary, SalesQuery, SortOrder,
    DEFAULT_PRODUCT_FIELDS,
};
pub use stockx_core::{Result, StockXError};
