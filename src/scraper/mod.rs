mod extract;
mod models;
mod paths;
mod scraper;
mod scraper_error;

pub use models::PropertyRecord;
pub use scraper::EstateScraper;
pub use scraper_error::ScraperError;
