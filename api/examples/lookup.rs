use stockx_api::{ClientConfig, PriceChartQuery, SalesQuery, StockXClient, DEFAULT_PRODUCT_FIELDS};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "jordan 1".to_string());
    let client = StockXClient::with_config(ClientConfig::from_env()?)?;

    println!("Searching StockX for \"{}\"...\n", query);

    let products = client
        .search_products(&query, 0, &DEFAULT_PRODUCT_FIELDS)
        .await?;
    println!("Found {} products:", products.len());
    for (i, product) in products.iter().enumerate() {
        println!(
            "{}. {} ({}) - retail {}",
            i + 1,
            product["title"],
            product["urlKey"],
            product["retailPrice"]
        );
    }

    let Some(slug) = products.first().and_then(|p| p["urlKey"].as_str()) else {
        return Ok(());
    };

    let history = client
        .get_past_prices(slug, &PriceChartQuery::default())
        .await?;
    println!("\nPrice history for {}:", slug);
    for (label, price) in history.points() {
        println!("  {:<12} ${:.2}", label, price);
    }

    let sales = client.get_sales(slug, &SalesQuery::default()).await?;
    println!("\nLatest sales:\n{}", serde_json::to_string_pretty(&sales)?);

    Ok(())
}
