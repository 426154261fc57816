mod report;
mod selection;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use report::ReportFormat;
use stockcheck_core::{load_store_directory, resolve_all, EngineOptions, StoreSelector};
use stockcheck_iows::IowsClient;

#[derive(Debug, Parser)]
#[command(name = "stockcheck")]
#[command(
    about = "Check the stock availability of one or more products in the stores of a country",
    long_about = "Requests the availability of one or multiple products in specific \
                  countries and/or stores. Use the options to filter the results."
)]
struct Cli {
    /// Product ids to check. Duplicates are ignored.
    product_ids: Vec<String>,

    /// Country code of the stores to check (defaults to STOCKCHECK_DEFAULT_COUNTRY).
    #[arg(short, long)]
    country: Option<String>,

    /// Comma separated store codes, or a single search term matched against
    /// store codes and names within the country.
    #[arg(short, long)]
    store: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    reporter: ReportFormat,

    /// Maximum number of availability requests in flight; 0 for unlimited.
    #[arg(long)]
    max_concurrent: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = stockcheck_core::load_app_config().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let directory = load_store_directory(&config.stores_path).with_context(|| {
        format!(
            "failed to load store directory from {}",
            config.stores_path.display()
        )
    })?;

    let country_code = cli
        .country
        .as_deref()
        .map_or_else(|| config.default_country.clone(), |c| c.trim().to_ascii_lowercase());
    let selector = selection::store_selector(cli.store.as_deref());

    if let StoreSelector::ByIds(ids) = &selector {
        let resolved = directory.stores_by_id(ids.as_slice()).len();
        if resolved < ids.len() {
            tracing::warn!(
                requested = ids.len(),
                resolved,
                "some store codes are not in the store directory and were skipped"
            );
        }
    }

    let client = IowsClient::new(&config).context("failed to build IOWS client")?;
    let options = EngineOptions::with_max_concurrent_requests(
        cli.max_concurrent.unwrap_or(config.max_concurrent_requests),
    );

    let results = resolve_all(
        &client,
        &directory,
        cli.product_ids.as_slice(),
        &selector,
        &country_code,
        &options,
    )
    .await
    .context("availability check failed")?;

    println!("{}", report::render(cli.reporter, &results)?);

    Ok(())
}

#[cfg(test)]
mod tests;
