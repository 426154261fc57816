//! Work-plan construction: one [`WorkItem`] per (product, store) pair.

use std::collections::HashSet;
use std::hash::Hash;

use crate::model::{StoreRecord, WorkItem};

/// Distinct values in order of first appearance.
#[must_use]
pub fn dedupe<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    dedupe_by_key(items, |item| item).into_iter().cloned().collect()
}

/// Items whose key was not seen before, in order of first appearance.
fn dedupe_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash + ?Sized + 'a,
    F: Fn(&'a T) -> &'a K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| seen.insert(key(*item))).collect()
}

/// Cross-joins deduplicated products with deduplicated stores, product-major.
///
/// Stores are deduplicated by `bu_code`, first occurrence wins. An empty
/// product or store list yields an empty plan.
#[must_use]
pub fn build_plan<S: AsRef<str>>(product_ids: &[S], stores: &[StoreRecord]) -> Vec<WorkItem> {
    let products = dedupe_by_key::<_, str, _>(product_ids, AsRef::as_ref);
    let stores = dedupe_by_key(stores, |store| store.bu_code.as_str());

    let mut plan = Vec::with_capacity(products.len() * stores.len());
    for product_id in products {
        for store in &stores {
            plan.push(WorkItem {
                product_id: product_id.as_ref().to_owned(),
                store: (*store).clone(),
            });
        }
    }
    plan
}
