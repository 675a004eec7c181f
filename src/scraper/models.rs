use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::scraper::paths::lookup;

// propertyData
//  ├── id
//  ├── status
//  │    ├── published
//  │    └── archived
//  ├── contactInfo
//  │    └── telephoneNumbers
//  │         └── localNumber
//  ├── text
//  │    ├── description
//  │    ├── pageTitle
//  │    └── propertyPhrase
//  ├── prices
//  │    ├── primaryPrice
//  │    └── pricePerSqFt
//  └── location
//       ├── latitude
//       └── longitude

/// A listing flattened into the fixed shape we persist. Every field is
/// optional: a source path that does not resolve (or resolves to a value
/// of the wrong type) leaves the field null in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub uid: Option<String>,
    pub is_available: Option<bool>,
    pub is_archived: Option<bool>,
    pub contact_number: Option<String>,
    pub rooms: Option<i64>,
    pub baths: Option<i64>,
    pub listing_type: Option<String>,
    pub estate_type: Option<String>,
    pub attributes: Option<Vec<String>>,
    pub details: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub cost: Option<String>,
    pub rate_per_sqft: Option<String>,
    pub location: Option<Map<String, Value>>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub key_features: Option<Vec<String>>,
    pub record: Option<Map<String, Value>>,
}

impl PropertyRecord {
    /// Flatten a raw `propertyData` object into a `PropertyRecord`.
    pub fn from_raw(raw: &Value) -> Self {
        PropertyRecord {
            uid: string_at(raw, "id"),
            is_available: bool_at(raw, "status.published"),
            is_archived: bool_at(raw, "status.archived"),
            contact_number: string_at(raw, "contactInfo.telephoneNumbers.localNumber"),
            rooms: int_at(raw, "bedrooms"),
            baths: int_at(raw, "bathrooms"),
            listing_type: string_at(raw, "transactionType"),
            estate_type: string_at(raw, "propertySubType"),
            attributes: strings_at(raw, "tags"),
            details: string_at(raw, "text.description"),
            headline: string_at(raw, "text.pageTitle"),
            subheadline: string_at(raw, "text.propertyPhrase"),
            cost: string_at(raw, "prices.primaryPrice"),
            rate_per_sqft: string_at(raw, "prices.pricePerSqFt"),
            location: object_at(raw, "address"),
            lat: float_at(raw, "location.latitude"),
            long: float_at(raw, "location.longitude"),
            key_features: strings_at(raw, "keyFeatures"),
            record: object_at(raw, "listingHistory"),
        }
    }
}

fn string_at(raw: &Value, path: &str) -> Option<String> {
    lookup(raw, path)?.as_str().map(str::to_owned)
}

fn bool_at(raw: &Value, path: &str) -> Option<bool> {
    lookup(raw, path)?.as_bool()
}

fn int_at(raw: &Value, path: &str) -> Option<i64> {
    lookup(raw, path)?.as_i64()
}

fn float_at(raw: &Value, path: &str) -> Option<f64> {
    lookup(raw, path)?.as_f64()
}

fn object_at(raw: &Value, path: &str) -> Option<Map<String, Value>> {
    lookup(raw, path)?.as_object().cloned()
}

fn strings_at(raw: &Value, path: &str) -> Option<Vec<String>> {
    lookup(raw, path)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}
