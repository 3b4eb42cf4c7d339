//! Product summaries as returned by the storefront product API.
//!
//! The API is loose about types: ids arrive as numbers or strings, prices as
//! decimal strings (`"120.00"`) or JSON numbers, and any field may be missing
//! or `null`. Everything here is optional, and a field of the wrong type is
//! read as absent, so that any JSON object still renders as a card.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Subcategory {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Inventory and pricing for one product variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StockRecord {
    /// Regular unit price.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    /// Sale price, honored only when lower than `price`.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discount_price: Option<Decimal>,
}

impl StockRecord {
    /// The price a shopper pays for this stock, if it has one.
    #[must_use]
    pub fn effective_price(&self) -> Option<Decimal> {
        match (self.price, self.discount_price) {
            (Some(price), Some(discount)) if discount > Decimal::ZERO && discount < price => {
                Some(discount)
            }
            (Some(price), _) => Some(price),
            (None, Some(discount)) if discount > Decimal::ZERO => Some(discount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Image URL for the card.
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subcategory: Option<Subcategory>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    /// Stock entries that are not objects are skipped.
    #[serde(default, deserialize_with = "lenient_stocks")]
    pub stocks: Vec<StockRecord>,
}

impl ProductSummary {
    #[must_use]
    pub fn subcategory_name(&self) -> Option<&str> {
        self.subcategory.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// Decodes `T` if the value has the right shape; anything else becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_stocks<'de, D>(deserializer: D) -> Result<Vec<StockRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Accepts JSON numbers and numeric strings; anything else becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => {
            let raw = n.to_string();
            Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .ok()
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    })
}
