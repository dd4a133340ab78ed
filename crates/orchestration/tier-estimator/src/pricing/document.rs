//! Price list document traversal.
//!
//! A price list entry is a nested JSON document. Tiered products (e.g.
//! "First 50 TB / Next 450 TB / Over 500 TB") carry one `pricePerUnit`
//! object per band, at varying depths, so extraction walks the whole tree
//! instead of following a fixed path.

use serde_json::Value;
use tier_error::{PricingError, Result};

/// Key under which the catalog stores unit prices.
pub const PRICE_PER_UNIT_KEY: &str = "pricePerUnit";

/// Currency the estimate is computed in.
pub const CURRENCY: &str = "USD";

/// Collect every value stored under `key`, at any depth.
///
/// Values are returned in document order. When the value under `key` is an
/// array, its elements are collected individually. Matched values are not
/// searched further.
pub fn collect_values<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut found = Vec::new();
    walk(value, key, &mut found);
    found
}

fn walk<'a>(value: &'a Value, key: &str, found: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                if k == key {
                    match v {
                        Value::Array(items) => found.extend(items.iter()),
                        other => found.push(other),
                    }
                } else {
                    walk(v, key, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, key, found);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

/// Parse one `pricePerUnit` value (`{"USD": "0.0230000000"}`).
fn parse_unit_price(value: &Value) -> Result<f64> {
    let amount = value.get(CURRENCY).ok_or_else(|| {
        PricingError::MalformedDocument(format!("{PRICE_PER_UNIT_KEY} has no {CURRENCY}: {value}"))
    })?;

    let parsed = match amount {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    parsed.filter(|p| p.is_finite()).ok_or_else(|| {
        PricingError::MalformedDocument(format!("unparseable {CURRENCY} amount: {amount}")).into()
    })
}

/// The highest unit price found anywhere in a price list document.
///
/// The highest band is the one a bucket pays for its first terabytes, so it
/// is used as the representative rate.
pub fn max_price_per_unit(document: &Value) -> Result<f64> {
    let prices = collect_values(document, PRICE_PER_UNIT_KEY)
        .into_iter()
        .map(parse_unit_price)
        .collect::<Result<Vec<f64>>>()?;

    prices.into_iter().reduce(f64::max).ok_or_else(|| {
        PricingError::MalformedDocument(format!("no {PRICE_PER_UNIT_KEY} in document")).into()
    })
}
