use scraper::{Html, Selector};
use serde_json::{Map, Value};

use crate::scraper::ScraperError;

/// Marker introducing the server-rendered page state in an inline script.
pub const PAGE_MODEL_MARKER: &str = "PAGE_MODEL = ";

/// Pull the `propertyData` object out of a listing page.
///
/// The page embeds its state as `window.PAGE_MODEL = {...}` inside a
/// `<script>` tag. A page without that script is logged and treated as
/// empty, so the batch keeps going; a script whose payload fails to parse
/// is an error and aborts the run.
pub fn extract_property_data(html: &str, url: &str) -> Result<Value, ScraperError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("script").map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let payload = document
        .select(&selector)
        .filter_map(|el| {
            let text = el.text().collect::<String>();
            text.split_once(PAGE_MODEL_MARKER)
                .map(|(_, rest)| rest.trim().to_string())
        })
        .next();

    let Some(payload) = payload else {
        eprintln!("⚠️ No PAGE_MODEL script found at {url}");
        return Ok(Value::Object(Map::new()));
    };

    let page_model: Value =
        serde_json::from_str(&payload).map_err(|e| ScraperError::JsonParse(format!("{url}: {e}")))?;

    Ok(page_model
        .get("propertyData")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new())))
}
