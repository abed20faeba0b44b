use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use stockx_core::{Result, StockXError};
use tracing::{debug, trace};
use url::Url;

use crate::config::ClientConfig;

/// Client for the StockX web API.
///
/// Holds only immutable settings and a connection pool, so it can be cloned
/// or shared between tasks freely.
#[derive(Debug, Clone)]
pub struct StockXClient {
    client: Client,
    base_url: Url,
}

impl StockXClient {
    /// Builds a client against the public API, optionally replacing the
    /// default browser user agent.
    pub fn new(user_agent: Option<String>) -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Some(user_agent) = user_agent {
            config.user_agent = user_agent;
        }
        Self::with_config(config)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            StockXError::Config(format!("invalid base URL {}: {}", config.base_url, e))
        })?;

        let mut builder = Client::builder().default_headers(browser_headers(&config.user_agent)?);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StockXError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `resource` against the API root, issues a GET with `query`
    /// and decodes the body as JSON.
    ///
    /// The HTTP status is not inspected: an error page with a JSON body is
    /// returned like any other payload.
    pub async fn fetch(&self, resource: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.resolve(resource)?;
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| StockXError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, resource, "upstream returned non-success status");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StockXError::Network(e.to_string()))?;
        trace!(%status, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|e| StockXError::Decode(e.to_string()))
    }

    fn resolve(&self, resource: &str) -> Result<Url> {
        self.base_url
            .join(resource)
            .map_err(|e| StockXError::Config(format!("cannot resolve {}: {}", resource, e)))
    }
}

/// Header set sent with every request, shaped like a desktop browser fetch.
fn browser_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| StockXError::Config(format!("invalid user agent: {}", e)))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("cross-site"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    Ok(headers)
}
