//! Availability aggregation engine.
//!
//! Fans one fetch out per work item, turns "not found" failures into zero
//! stock, and assembles the results in plan order. Any other failure aborts
//! the whole batch.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::directory::StoreDirectory;
use crate::fetcher::{AvailabilityFetcher, FetchErrorKind};
use crate::model::{AggregatedResult, Availability, WorkItem};
use crate::plan::build_plan;
use crate::selector::StoreSelector;

/// Tuning knobs for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Upper bound on in-flight requests. `None` dispatches the whole batch
    /// at once.
    pub max_concurrent_requests: Option<usize>,
}

impl EngineOptions {
    /// Options with an in-flight cap; `0` means unbounded.
    #[must_use]
    pub fn with_max_concurrent_requests(limit: usize) -> Self {
        Self {
            max_concurrent_requests: (limit > 0).then_some(limit),
        }
    }

    fn concurrency_for(&self, batch_len: usize) -> usize {
        self.max_concurrent_requests
            .unwrap_or(batch_len)
            .min(batch_len)
            .max(1)
    }
}

/// Resolves stores for `selector`, builds the work plan and resolves it.
///
/// This is the typed entry point of the engine. An empty product list or a
/// selector matching no stores yields `Ok(vec![])`.
///
/// # Errors
///
/// Returns the first non-"not found" error reported by `fetcher`; no
/// partial results are returned in that case.
pub async fn resolve_all<F, S>(
    fetcher: &F,
    directory: &StoreDirectory,
    product_ids: &[S],
    selector: &StoreSelector,
    country_code: &str,
    options: &EngineOptions,
) -> Result<Vec<AggregatedResult>, F::Error>
where
    F: AvailabilityFetcher,
    S: AsRef<str>,
{
    let stores = directory.resolve(selector, country_code);
    if stores.is_empty() {
        tracing::warn!(country_code, ?selector, "no stores matched the selection");
    }

    let plan = build_plan(product_ids, &stores);
    resolve_plan(fetcher, plan, country_code, options).await
}

/// Fetches availability for every work item and returns one result per item.
///
/// `result[i]` always corresponds to `plan[i]`, whatever order the fetches
/// complete in.
///
/// # Errors
///
/// Returns the first error, in completion order, whose failure is not
/// classified as "not found". In-flight requests are dropped and no partial
/// results are returned.
pub async fn resolve_plan<F>(
    fetcher: &F,
    plan: Vec<WorkItem>,
    country_code: &str,
    options: &EngineOptions,
) -> Result<Vec<AggregatedResult>, F::Error>
where
    F: AvailabilityFetcher,
{
    let requests = plan.len();
    if requests == 0 {
        return Ok(Vec::new());
    }

    let concurrency = options.concurrency_for(requests);
    tracing::info!(requests, concurrency, country_code, "resolving availability batch");

    let mut resolved: Vec<(usize, AggregatedResult, bool)> =
        stream::iter(plan.into_iter().enumerate())
            .map(|(index, item)| resolve_item(fetcher, index, item, country_code))
            .buffer_unordered(concurrency)
            .try_collect()
            .await?;
    resolved.sort_unstable_by_key(|(index, _, _)| *index);

    let not_found = resolved.iter().filter(|(_, _, missing)| *missing).count();
    tracing::info!(requests, not_found, "availability batch complete");

    Ok(resolved.into_iter().map(|(_, result, _)| result).collect())
}

/// Fetches one item, tagged with its plan index. The flag is `true` when the
/// result was substituted for a "not found" failure.
async fn resolve_item<F>(
    fetcher: &F,
    index: usize,
    item: WorkItem,
    country_code: &str,
) -> Result<(usize, AggregatedResult, bool), F::Error>
where
    F: AvailabilityFetcher,
{
    let outcome = fetcher
        .fetch(&item.store.bu_code, &item.product_id, country_code)
        .await;

    let (availability, missing) = match outcome {
        Ok(availability) => (availability, false),
        Err(err) if err.is_not_found() => {
            tracing::debug!(
                product_id = %item.product_id,
                bu_code = %item.store.bu_code,
                "product not found at store; reporting zero stock"
            );
            (Availability::not_found(), true)
        }
        Err(err) => {
            tracing::error!(
                product_id = %item.product_id,
                bu_code = %item.store.bu_code,
                error = %err,
                "availability request failed; aborting batch"
            );
            return Err(err);
        }
    };

    Ok((
        index,
        AggregatedResult {
            product_id: item.product_id,
            store: item.store,
            availability,
        },
        missing,
    ))
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
