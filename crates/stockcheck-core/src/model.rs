//! Domain types shared by the directory, the plan builder and the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One physical retail location from the store directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Business-unit code; the key used in availability requests.
    pub bu_code: String,
    /// Lowercase country code (e.g. `"de"`).
    pub country_code: String,
    /// Display name, e.g. `"Berlin-Tempelhof"`.
    pub name: String,
    /// Country display name, if the directory provides one.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Stock level of one product at one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub stock: u32,
    /// Provider confidence code (`"HIGH"`, `"MEDIUM"`, `"LOW"`), empty when unknown.
    pub probability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restock_date: Option<NaiveDate>,
}

impl Availability {
    #[must_use]
    pub fn new(stock: u32, probability: impl Into<String>) -> Self {
        Self {
            stock,
            probability: probability.into(),
            restock_date: None,
        }
    }

    /// The outcome substituted when the inventory service does not know the
    /// product at a store: zero stock and an empty probability.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(0, "")
    }
}

/// A single (product, store) pair awaiting one availability request.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub product_id: String,
    pub store: StoreRecord,
}

/// The resolved outcome of one [`WorkItem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedResult {
    pub product_id: String,
    pub store: StoreRecord,
    pub availability: Availability,
}
