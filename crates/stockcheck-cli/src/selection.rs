//! Maps the `--store` argument onto a [`StoreSelector`].

use stockcheck_core::{dedupe, StoreSelector};

/// No value selects every store in the country; a comma separated value is a
/// list of store codes; anything else is a single search term.
pub(crate) fn store_selector(store_arg: Option<&str>) -> StoreSelector {
    match store_arg.map(str::trim) {
        None | Some("") => StoreSelector::ByCountry,
        Some(value) if value.contains(',') => StoreSelector::ByIds(split_store_list(value)),
        Some(value) => StoreSelector::ByQuery(vec![value.to_owned()]),
    }
}

fn split_store_list(raw: &str) -> Vec<String> {
    let codes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect();
    dedupe(&codes)
}
