use anyhow::Context;

use stockcheck_core::AggregatedResult;

const HEADER: [&str; 7] = [
    "product_id",
    "country_code",
    "bu_code",
    "store_name",
    "stock",
    "probability",
    "restock_date",
];

pub(super) fn render(results: &[AggregatedResult]) -> anyhow::Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .context("failed to write CSV header")?;

    for r in results {
        let stock = r.availability.stock.to_string();
        let restock_date = r
            .availability
            .restock_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        writer
            .write_record([
                r.product_id.as_str(),
                r.store.country_code.as_str(),
                r.store.bu_code.as_str(),
                r.store.name.as_str(),
                stock.as_str(),
                r.availability.probability.as_str(),
                restock_date.as_str(),
            ])
            .with_context(|| format!("failed to write CSV row for {}", r.product_id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))?;
    let mut out = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}
