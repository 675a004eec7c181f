use crate::scraper::{EstateScraper, ScraperError};

mod scraper;
mod store;

#[cfg(test)]
mod tests;

/// Listing pages harvested on each run.
const LISTING_URLS: &[&str] = &["https://www.rightmove.co.uk/properties/135498977#/?channel=RES_NEW"];

#[tokio::main]
async fn main() {
    if let Err(e) = run(LISTING_URLS).await {
        eprintln!("❌ Scrape failed: {e}");
        std::process::exit(1);
    }
}

async fn run(urls: &[&str]) -> Result<(), ScraperError> {
    let scraper = EstateScraper::new()?;
    let records = scraper.collect_property_data(urls).await?;
    store::save_records(store::OUTPUT_FILE, &records)?;
    println!("Data stored in {}", store::OUTPUT_FILE);
    Ok(())
}
