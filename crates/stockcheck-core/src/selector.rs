//! How a run chooses its stores.

use crate::directory::StoreDirectory;
use crate::model::StoreRecord;

/// Store-selection mode for one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSelector {
    /// Every store in the run's country.
    ByCountry,
    /// Free-text terms matched against store codes and names within the
    /// run's country.
    ByQuery(Vec<String>),
    /// Explicit business-unit codes. Not restricted to the run's country.
    ByIds(Vec<String>),
}

impl StoreDirectory {
    /// Resolves `selector` against this directory.
    #[must_use]
    pub fn resolve(&self, selector: &StoreSelector, country_code: &str) -> Vec<StoreRecord> {
        match selector {
            StoreSelector::ByCountry => self.find_by_country_code(country_code),
            StoreSelector::ByQuery(terms) => {
                self.stores_matching_query(terms.as_slice(), Some(country_code))
            }
            StoreSelector::ByIds(ids) => self.stores_by_id(ids.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(bu_code: &str, country_code: &str, name: &str) -> StoreRecord {
        StoreRecord {
            bu_code: bu_code.to_string(),
            country_code: country_code.to_string(),
            name: name.to_string(),
            country: None,
            coordinates: None,
        }
    }

    fn directory() -> StoreDirectory {
        StoreDirectory::new(vec![
            store("421", "de", "Berlin-Spandau"),
            store("148", "de", "Hamburg-Altona"),
            store("186", "at", "Wien-Nord"),
        ])
    }

    #[test]
    fn by_country_uses_run_country() {
        let stores = directory().resolve(&StoreSelector::ByCountry, "at");
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].bu_code, "186");
    }

    #[test]
    fn by_query_is_scoped_to_run_country() {
        let selector = StoreSelector::ByQuery(vec!["-".to_string()]);
        let stores = directory().resolve(&selector, "de");
        assert_eq!(stores.len(), 2);
    }

    #[test]
    fn by_ids_ignores_run_country() {
        let selector = StoreSelector::ByIds(vec!["186".to_string(), "421".to_string()]);
        let stores = directory().resolve(&selector, "de");
        let codes: Vec<_> = stores.iter().map(|s| s.bu_code.as_str()).collect();
        assert_eq!(codes, vec!["186", "421"]);
    }
}
