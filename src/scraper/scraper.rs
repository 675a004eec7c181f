// scraper.rs
use crate::scraper::extract::extract_property_data;
use crate::scraper::models::PropertyRecord;
use crate::scraper::ScraperError;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect, Client};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.94 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct EstateScraper {
    client: Client,
}

/// Response body paired with its final (post-redirect) URL.
struct FetchedPage {
    url: String,
    body: String,
}

impl EstateScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        // Accept-Encoding (gzip, deflate, br) is added by the enabled reqwest
        // features, which also decode the response body.

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(redirect::Policy::limited(10))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch every listing page concurrently and flatten each into a
    /// `PropertyRecord`. Records land in completion order, not input order.
    ///
    /// A transport failure, a non-2xx status, or an unparseable embedded
    /// payload aborts the whole batch; a page merely lacking the embedded
    /// script contributes an all-null record.
    pub async fn collect_property_data(
        &self,
        urls: &[&str],
    ) -> Result<Vec<PropertyRecord>, ScraperError> {
        let mut in_flight: FuturesUnordered<_> =
            urls.iter().map(|url| self.fetch_page(url)).collect();

        let mut records = Vec::with_capacity(urls.len());
        while let Some(page) = in_flight.next().await {
            let page = page?;
            let raw = extract_property_data(&page.body, &page.url)?;
            records.push(PropertyRecord::from_raw(&raw));
        }
        Ok(records)
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(ScraperError::BadStatus(format!("{status} at {final_url}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}
