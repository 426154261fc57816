use stockcheck_core::AggregatedResult;

const EMPTY_REPORT: &str = "No availability results.";

/// One table per (country, product) group, groups in order of first
/// appearance and rows in result order.
pub(super) fn render(results: &[AggregatedResult]) -> String {
    if results.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let mut groups: Vec<((&str, &str), Vec<&AggregatedResult>)> = Vec::new();
    for r in results {
        let key = (r.store.country_code.as_str(), r.product_id.as_str());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, rows)) => rows.push(r),
            None => groups.push((key, vec![r])),
        }
    }

    let mut out = String::new();
    for (i, ((country_code, product_id), rows)) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_group(&mut out, country_code, product_id, rows);
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_group(
    out: &mut String,
    country_code: &str,
    product_id: &str,
    rows: &[&AggregatedResult],
) {
    let code_w = rows
        .iter()
        .map(|r| r.store.bu_code.chars().count())
        .max()
        .unwrap_or(0)
        .max("CODE".len());
    let name_w = rows
        .iter()
        .map(|r| r.store.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("STORE".len());

    out.push_str(&format!(
        "{} / {product_id}\n",
        country_code.to_ascii_uppercase()
    ));
    out.push_str(&format!(
        "  {:<code_w$}  {:<name_w$}  {:>5}  {:<11}  RESTOCK\n",
        "CODE", "STORE", "STOCK", "PROBABILITY"
    ));
    for r in rows {
        let probability = if r.availability.probability.is_empty() {
            "-"
        } else {
            r.availability.probability.as_str()
        };
        let restock = r
            .availability
            .restock_date
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
        out.push_str(&format!(
            "  {:<code_w$}  {:<name_w$}  {:>5}  {:<11}  {restock}\n",
            r.store.bu_code, r.store.name, r.availability.stock, probability
        ));
    }
}
