//! Pricing catalog abstraction and the AWS Price List implementation.

use async_trait::async_trait;
use aws_config::{Region, SdkConfig};
use aws_sdk_pricing::Client;
use aws_sdk_pricing::error::DisplayErrorContext;
use aws_sdk_pricing::types::{Filter, FilterType};
use tier_error::{PricingError, Result};
use tier_types::PriceFilter;

/// One page of a product search.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    /// Price list entries, each a JSON document
    pub price_list: Vec<String>,

    /// Token for the next page; `None` when this is the last page
    pub next_token: Option<String>,
}

/// Trait for the pricing catalog service.
#[async_trait]
pub trait PriceCatalog: Send + Sync {
    /// Searches one page of products matching every filter exactly.
    async fn get_products_page(
        &self,
        service_code: &str,
        filters: &[PriceFilter],
        next_token: Option<String>,
    ) -> Result<ProductPage>;
}

/// [`PriceCatalog`] backed by the AWS Price List query API.
pub struct AwsPriceCatalog {
    client: Client,
}

impl AwsPriceCatalog {
    /// Create a catalog client pinned to the pricing endpoint region.
    pub fn new(sdk_config: &SdkConfig, pricing_region: &str) -> Self {
        let config = aws_sdk_pricing::config::Builder::from(sdk_config)
            .region(Region::new(pricing_region.to_string()))
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }
}

#[async_trait]
impl PriceCatalog for AwsPriceCatalog {
    async fn get_products_page(
        &self,
        service_code: &str,
        filters: &[PriceFilter],
        next_token: Option<String>,
    ) -> Result<ProductPage> {
        let filters = filters
            .iter()
            .map(|f| {
                Filter::builder()
                    .r#type(FilterType::TermMatch)
                    .field(&f.field)
                    .value(&f.value)
                    .build()
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PricingError::Request(format!("invalid filter: {e}")))?;

        let resp = self
            .client
            .get_products()
            .service_code(service_code)
            .set_filters(Some(filters))
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| PricingError::Request(DisplayErrorContext(&e).to_string()))?;

        Ok(ProductPage {
            price_list: resp.price_list().to_vec(),
            next_token: resp
                .next_token()
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        })
    }
}
