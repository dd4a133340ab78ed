//! Resolving Intelligent-Tiering unit prices for a region.

use tier_error::{PricingError, Result};
use tier_types::{PriceFilter, PriceSet};
use tracing::debug;

use super::PriceCatalog;
use super::document::max_price_per_unit;

/// Service code of S3 in the price list.
pub const S3_SERVICE_CODE: &str = "AmazonS3";

/// The monitoring fee is listed per object; reports use per 1000 objects.
const OBJECTS_PER_MONITORING_UNIT: f64 = 1000.0;

/// Filters for the Intelligent-Tiering frequent access tier storage price.
pub fn frequent_access_filters(region: &str) -> Vec<PriceFilter> {
    storage_tier_filters(region, "Intelligent-Tiering Frequent Access")
}

/// Filters for the Intelligent-Tiering archive instant access tier storage price.
pub fn archive_instant_access_filters(region: &str) -> Vec<PriceFilter> {
    storage_tier_filters(region, "Intelligent-Tiering Archive Instant Access")
}

/// Filters for the Intelligent-Tiering monitoring and automation fee.
pub fn monitoring_filters(region: &str) -> Vec<PriceFilter> {
    vec![
        PriceFilter::term("feeCode", "S3-Monitoring and Automation-ObjectCount"),
        PriceFilter::term("regionCode", region),
        PriceFilter::term("termType", "OnDemand"),
    ]
}

fn storage_tier_filters(region: &str, volume_type: &str) -> Vec<PriceFilter> {
    vec![
        PriceFilter::term("regionCode", region),
        PriceFilter::term("storageClass", "Intelligent-Tiering"),
        PriceFilter::term("termType", "OnDemand"),
        PriceFilter::term("volumeType", volume_type),
    ]
}

/// Look up the unit price of the single product matching `filters`.
///
/// Every page of results is collected first. Anything other than exactly
/// one matching product is an error, as is a product document without a
/// parseable USD unit price. When the product has several price bands the
/// highest one is returned.
pub async fn get_price_per_unit<C>(catalog: &C, filters: &[PriceFilter]) -> Result<f64>
where
    C: PriceCatalog + ?Sized,
{
    let mut price_list = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = catalog
            .get_products_page(S3_SERVICE_CODE, filters, next_token.take())
            .await?;
        price_list.extend(page.price_list);

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    if price_list.len() != 1 {
        return Err(PricingError::Cardinality {
            filters: describe(filters),
            found: price_list.len(),
        }
        .into());
    }

    let document: serde_json::Value = serde_json::from_str(&price_list[0])
        .map_err(|e| PricingError::MalformedDocument(format!("invalid JSON: {e}")))?;

    let price = max_price_per_unit(&document)?;
    debug!(filters = %describe(filters), price, "Resolved unit price");

    Ok(price)
}

/// Resolve all three Intelligent-Tiering prices for `region`.
pub async fn resolve_price_set<C>(catalog: &C, region: &str) -> Result<PriceSet>
where
    C: PriceCatalog + ?Sized,
{
    let frequent_access = get_price_per_unit(catalog, &frequent_access_filters(region)).await?;
    let archive_instant_access =
        get_price_per_unit(catalog, &archive_instant_access_filters(region)).await?;
    let monitoring_per_object = get_price_per_unit(catalog, &monitoring_filters(region)).await?;

    Ok(PriceSet {
        frequent_access_per_gb_month: frequent_access,
        archive_instant_access_per_gb_month: archive_instant_access,
        monitoring_per_1000_objects_month: monitoring_per_object * OBJECTS_PER_MONITORING_UNIT,
    })
}

fn describe(filters: &[PriceFilter]) -> String {
    filters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
