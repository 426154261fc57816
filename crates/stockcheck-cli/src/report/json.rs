use anyhow::Context;

use stockcheck_core::AggregatedResult;

pub(super) fn render(results: &[AggregatedResult]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(results).context("failed to serialize results as JSON")
}
