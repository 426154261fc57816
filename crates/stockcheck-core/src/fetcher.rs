//! Boundary to the remote inventory service.

use std::future::Future;

use crate::model::Availability;

/// Classification the engine needs from a fetch failure.
pub trait FetchErrorKind {
    /// `true` when the service reported that the product or store does not
    /// exist (HTTP 404). The engine turns these into zero stock.
    fn is_not_found(&self) -> bool;
}

/// Issues one availability request for a product at a store.
///
/// Implementations must be shareable across concurrent requests.
pub trait AvailabilityFetcher: Send + Sync {
    type Error: FetchErrorKind + std::error::Error + Send + Sync + 'static;

    fn fetch(
        &self,
        store_code: &str,
        product_id: &str,
        country_code: &str,
    ) -> impl Future<Output = Result<Availability, Self::Error>> + Send;
}
