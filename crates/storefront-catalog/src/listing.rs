//! Normalization of product-listing responses.
//!
//! The listing endpoints have shipped three envelopes over time and all of
//! them are still seen in the wild:
//!
//! - a bare array: `[{...}, {...}]`
//! - `{"data": [...]}`
//! - `{"results": [...]}` (paginated responses)
//!
//! They are checked in that order. Anything else is treated as an empty list.

use serde_json::Value;
use storefront_core::ProductSummary;

/// How many products the not-found page recommends.
pub const RECOMMENDED_LIMIT: usize = 8;

/// Which envelope a listing response used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    Bare,
    Data,
    Results,
    Unrecognized,
}

impl ListingShape {
    #[must_use]
    pub fn of(body: &Value) -> Self {
        if body.is_array() {
            ListingShape::Bare
        } else if body.get("data").is_some_and(Value::is_array) {
            ListingShape::Data
        } else if body.get("results").is_some_and(Value::is_array) {
            ListingShape::Results
        } else {
            ListingShape::Unrecognized
        }
    }
}

impl std::fmt::Display for ListingShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingShape::Bare => write!(f, "bare"),
            ListingShape::Data => write!(f, "data"),
            ListingShape::Results => write!(f, "results"),
            ListingShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Unwraps a listing body and returns at most `limit` products, in order.
///
/// Truncation happens before decoding. Any JSON object becomes a card, with
/// mistyped fields read as absent; other items (e.g. a bare string) are
/// dropped rather than replaced.
#[must_use]
pub fn normalize_listing(body: Value, limit: usize) -> Vec<ProductSummary> {
    let shape = ListingShape::of(&body);
    let items = match (shape, body) {
        (ListingShape::Bare, Value::Array(items)) => items,
        (ListingShape::Data, Value::Object(mut map)) => take_array(&mut map, "data"),
        (ListingShape::Results, Value::Object(mut map)) => take_array(&mut map, "results"),
        _ => {
            tracing::debug!("product listing has no recognized shape");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .take(limit)
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping undecodable product");
                None
            }
        })
        .collect()
}

fn take_array(map: &mut serde_json::Map<String, Value>, key: &str) -> Vec<Value> {
    match map.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
