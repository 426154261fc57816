//! Read-only store directory and its three lookup shapes.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::model::StoreRecord;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct StoresFile {
    pub stores: Vec<StoreRecord>,
}

/// Immutable table of [`StoreRecord`]s keyed by business-unit code.
///
/// Built once at startup and shared by reference; every query is a pure read.
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory {
    stores: Vec<StoreRecord>,
    by_code: HashMap<String, usize>,
}

impl StoreDirectory {
    /// Builds a directory from records. When two records share a `bu_code`
    /// the first one is indexed.
    #[must_use]
    pub fn new(stores: Vec<StoreRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(stores.len());
        for (idx, store) in stores.iter().enumerate() {
            by_code.entry(store.bu_code.clone()).or_insert(idx);
        }
        Self { stores, by_code }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    #[must_use]
    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    /// All stores in the given country. Unknown codes yield an empty vec.
    #[must_use]
    pub fn find_by_country_code(&self, code: &str) -> Vec<StoreRecord> {
        let code = code.trim();
        self.stores
            .iter()
            .filter(|s| s.country_code.eq_ignore_ascii_case(code))
            .cloned()
            .collect()
    }

    /// Stores whose code or name contains any of `terms` (ASCII
    /// case-insensitive), optionally restricted to one country.
    ///
    /// Results are the union over all terms in discovery order: term order
    /// first, then directory order. Each store appears at most once. Blank
    /// terms match nothing.
    #[must_use]
    pub fn stores_matching_query<S: AsRef<str>>(
        &self,
        terms: &[S],
        country_code: Option<&str>,
    ) -> Vec<StoreRecord> {
        let country_code = country_code.map(str::trim).filter(|c| !c.is_empty());
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        for term in terms {
            let needle = term.as_ref().trim().to_lowercase();
            if needle.is_empty() {
                continue;
            }
            for store in &self.stores {
                if let Some(cc) = country_code {
                    if !store.country_code.eq_ignore_ascii_case(cc) {
                        continue;
                    }
                }
                let hit = store.bu_code.to_lowercase().contains(&needle)
                    || store.name.to_lowercase().contains(&needle);
                if hit && seen.insert(store.bu_code.as_str()) {
                    matches.push(store.clone());
                }
            }
        }

        matches
    }

    /// Stores for the given codes, in the order given, duplicates removed.
    ///
    /// Codes missing from the directory are silently omitted; callers that
    /// need strict validation compare the returned length with the input.
    #[must_use]
    pub fn stores_by_id<S: AsRef<str>>(&self, ids: &[S]) -> Vec<StoreRecord> {
        let mut seen: HashSet<usize> = HashSet::new();
        ids.iter()
            .filter_map(|id| self.by_code.get(id.as_ref().trim()).copied())
            .filter(|idx| seen.insert(*idx))
            .map(|idx| self.stores[idx].clone())
            .collect()
    }
}

/// Load and validate the store directory from a YAML file.
///
/// Country codes are normalised to lowercase.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_store_directory(path: &Path) -> Result<StoreDirectory, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let directory = parse_store_directory(&content)?;
    tracing::debug!(
        path = %path.display(),
        stores = directory.len(),
        "loaded store directory"
    );
    Ok(directory)
}

pub(crate) fn parse_store_directory(content: &str) -> Result<StoreDirectory, ConfigError> {
    let mut stores_file: StoresFile = serde_yaml::from_str(content)?;

    for store in &mut stores_file.stores {
        store.bu_code = store.bu_code.trim().to_string();
        store.country_code = store.country_code.trim().to_ascii_lowercase();
    }

    validate_stores(&stores_file)?;

    Ok(StoreDirectory::new(stores_file.stores))
}

fn validate_stores(stores_file: &StoresFile) -> Result<(), ConfigError> {
    let mut seen_codes = HashSet::new();

    for store in &stores_file.stores {
        if store.bu_code.is_empty() {
            return Err(ConfigError::Validation(format!(
                "store '{}' has an empty bu_code",
                store.name
            )));
        }

        if store.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "store {} has an empty name",
                store.bu_code
            )));
        }

        if store.country_code.is_empty() {
            return Err(ConfigError::Validation(format!(
                "store {} ('{}') has an empty country_code",
                store.bu_code, store.name
            )));
        }

        if !seen_codes.insert(store.bu_code.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate bu_code: '{}'",
                store.bu_code
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
