//! HTTP client for the IOWS store availability endpoint.
//!
//! One `GET` per (store, product) pair. A 404 surfaces as
//! [`IowsError::NotFound`] so the aggregation engine can report zero stock;
//! every other failure is returned as-is. Requests are never retried.

use std::time::Duration;

use reqwest::{Client, Url};

use stockcheck_core::{AppConfig, Availability, AvailabilityFetcher};

use crate::error::IowsError;
use crate::locale::language_for_country;
use crate::types::IowsAvailabilityResponse;

const IOWS_ACCEPT: &str = "application/vnd.ikea.iows+json;version=1.0";

/// Client for the IOWS retail availability API.
///
/// Use [`IowsClient::new`] with the application config, or
/// [`IowsClient::with_base_url`] to point at a mock server in tests.
pub struct IowsClient {
    client: Client,
    base_url: Url,
    consumer: String,
    contract: String,
}

impl IowsClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IowsError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`IowsError::InvalidBaseUrl`] if the configured base URL is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, IowsError> {
        Self::with_base_url(
            &config.iows_base_url,
            &config.iows_consumer,
            &config.iows_contract,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`IowsError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`IowsError::InvalidBaseUrl`] if `base_url` cannot serve as a base.
    pub fn with_base_url(
        base_url: &str,
        consumer: &str,
        contract: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, IowsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so path segments append instead of
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| IowsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(IowsError::InvalidBaseUrl {
                base_url: normalised,
                reason: "URL cannot be a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            consumer: consumer.to_owned(),
            contract: contract.to_owned(),
        })
    }

    /// Fetches the availability of `product_id` at store `store_code`.
    ///
    /// # Errors
    ///
    /// - [`IowsError::NotFound`] on HTTP 404.
    /// - [`IowsError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`IowsError::Http`] on network or TLS failure.
    /// - [`IowsError::Deserialize`] / [`IowsError::MalformedResponse`] if the
    ///   body does not have the expected shape.
    /// - [`IowsError::InvalidRequest`] if an identifier is blank.
    pub async fn get_store_product_availability(
        &self,
        country_code: &str,
        store_code: &str,
        product_id: &str,
    ) -> Result<Availability, IowsError> {
        let url = self.availability_url(country_code, store_code, product_id)?;
        tracing::debug!(%url, store_code, product_id, "requesting availability");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, IOWS_ACCEPT)
            .header("Consumer", &self.consumer)
            .header("Contract", &self.contract)
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(IowsError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(IowsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let context = format!("store {store_code} product {product_id}");
        let parsed = serde_json::from_str::<IowsAvailabilityResponse>(&body).map_err(|e| {
            IowsError::Deserialize {
                context: context.clone(),
                source: e,
            }
        })?;

        parsed
            .stock_availability
            .retail_item_availability
            .to_availability()
            .map_err(|reason| IowsError::MalformedResponse { context, reason })
    }

    /// Builds `{base}/{country}/{language}/stores/{store}/availability/ART/{product}`.
    fn availability_url(
        &self,
        country_code: &str,
        store_code: &str,
        product_id: &str,
    ) -> Result<Url, IowsError> {
        let country = country_code.trim().to_ascii_lowercase();
        let store_code = store_code.trim();
        let product_id = product_id.trim();

        for (label, value) in [
            ("country code", country.as_str()),
            ("store code", store_code),
            ("product id", product_id),
        ] {
            if value.is_empty() {
                return Err(IowsError::InvalidRequest(format!("{label} must not be empty")));
            }
        }

        let language = language_for_country(&country);
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| IowsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend([
                country.as_str(),
                language,
                "stores",
                store_code,
                "availability",
                "ART",
                product_id,
            ]);
        Ok(url)
    }
}

impl AvailabilityFetcher for IowsClient {
    type Error = IowsError;

    async fn fetch(
        &self,
        store_code: &str,
        product_id: &str,
        country_code: &str,
    ) -> Result<Availability, IowsError> {
        self.get_store_product_availability(country_code, store_code, product_id)
            .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
