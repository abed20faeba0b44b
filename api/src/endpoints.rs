use serde_json::Value;
use stockx_core::{
    models::{ActivityState, PriceChartQuery, PriceHistory, ProductSummary, SalesQuery},
    projection::project,
    Result,
};
use tracing::debug;
use url::form_urlencoded;

use crate::{
    client::StockXClient,
    types::{from_body, BrowseResponse, ChartResponse, ProductResponse},
};

impl StockXClient {
    /// Searches the catalogue and projects each hit onto `fields`,
    /// keeping upstream order.
    pub async fn search_products<S: AsRef<str>>(
        &self,
        query: &str,
        page: u32,
        fields: &[S],
    ) -> Result<Vec<ProductSummary>> {
        // Encoded here and again by the query serializer; the browse endpoint
        // expects that wire form.
        let params = vec![("_search", quote_plus(query)), ("page", page.to_string())];

        let body = self.fetch("browse", &params).await?;
        let browse: BrowseResponse = from_body(body, "browse")?;
        debug!(query, page, hits = browse.products.len(), "search completed");

        browse
            .products
            .iter()
            .map(|product| project(product, fields))
            .collect()
    }

    /// Looks up one product by id or URL key, with market data embedded.
    pub async fn get_product<S: AsRef<str>>(
        &self,
        id_or_slug: &str,
        fields: &[S],
    ) -> Result<ProductSummary> {
        let url = format!("products/{}", id_or_slug);
        let params = vec![("includes", "market".to_string())];

        let body = self.fetch(&url, &params).await?;
        let product: ProductResponse = from_body(body, "product")?;

        project(&product.product, fields)
    }

    pub async fn get_past_prices(
        &self,
        product_id: &str,
        query: &PriceChartQuery,
    ) -> Result<PriceHistory> {
        let url = format!("products/{}/chart", product_id);
        let params = vec![
            ("start_date", query.start_date.clone()),
            ("end_date", query.resolved_end_date().format("%Y-%m-%d").to_string()),
            ("intervals", query.intervals.to_string()),
        ];

        let body = self.fetch(&url, &params).await?;
        let chart: ChartResponse = from_body(body, "chart")?;

        PriceHistory::try_from(chart)
    }

    /// Completed sales, ordered by `query.sort` in `query.order`.
    pub async fn get_sales(&self, product_id: &str, query: &SalesQuery) -> Result<Value> {
        let extra = vec![
            ("sort", query.sort.clone()),
            ("order", query.order.as_str().to_string()),
        ];
        self.get_activity(product_id, ActivityState::Sales, extra)
            .await
    }

    /// Open asks for a product.
    pub async fn get_asks(&self, product_id: &str) -> Result<Value> {
        self.get_activity(product_id, ActivityState::Asks, Vec::new())
            .await
    }

    /// Open bids for a product.
    pub async fn get_bids(&self, product_id: &str) -> Result<Value> {
        self.get_activity(product_id, ActivityState::Bids, Vec::new())
            .await
    }

    async fn get_activity(
        &self,
        product_id: &str,
        state: ActivityState,
        extra: Vec<(&str, String)>,
    ) -> Result<Value> {
        let url = format!("products/{}/activity", product_id);
        let params = merge_params(vec![("state", state.code().to_string())], extra);
        debug!(product_id, activity = state.name(), "fetching activity");

        self.fetch(&url, &params).await
    }
}

/// Form-encodes `term` with `~` kept literal and `*` escaped, the way the
/// browse endpoint's own clients encode search terms.
fn quote_plus(term: &str) -> String {
    // `*` only appears for a literal star and `%7E` only for a tilde; a literal
    // `%` is always written as `%25`.
    form_urlencoded::byte_serialize(term.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
        .replace("%7E", "~")
}

/// Appends `extra` to `base`; a key already in `base` takes the extra value.
fn merge_params<'a>(
    mut base: Vec<(&'a str, String)>,
    extra: Vec<(&'a str, String)>,
) -> Vec<(&'a str, String)> {
    for (key, value) in extra {
        match base.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => base.push((key, value)),
        }
    }
    base
}
