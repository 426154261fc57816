//! IOWS availability response types.
//!
//! ## Observed shape
//!
//! ```json
//! {
//!   "StockAvailability": {
//!     "RetailItemAvailability": {
//!       "AvailableStock": { "$": "27" },
//!       "InStockProbabilityCode": { "$": "HIGH" },
//!       "ItemNo": { "$": "40299687" },
//!       "RestockDateTime": { "$": "2024-03-01" }
//!     }
//!   }
//! }
//! ```
//!
//! Every leaf is wrapped in an object whose value sits under `"$"`. Values
//! arrive as strings or numbers depending on the field and the country, so
//! they are kept as raw JSON and converted on demand.

use chrono::NaiveDate;
use serde::Deserialize;

use stockcheck_core::Availability;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IowsAvailabilityResponse {
    pub stock_availability: StockAvailability,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockAvailability {
    pub retail_item_availability: RetailItemAvailability,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetailItemAvailability {
    #[serde(default)]
    pub available_stock: Option<Wrapped>,
    #[serde(default)]
    pub in_stock_probability_code: Option<Wrapped>,
    #[serde(default)]
    pub item_no: Option<Wrapped>,
    #[serde(default)]
    pub restock_date_time: Option<Wrapped>,
}

/// A `{ "$": value }` leaf.
#[derive(Debug, Clone, Deserialize)]
pub struct Wrapped {
    #[serde(rename = "$")]
    pub value: serde_json::Value,
}

impl Wrapped {
    fn as_text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::String(s) => Some(s.trim().to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl RetailItemAvailability {
    /// Converts the raw record into an [`Availability`].
    ///
    /// A missing stock leaf counts as zero and a missing probability as
    /// empty. An unparseable restock date is dropped.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when the stock value is present
    /// but not a non-negative integer.
    pub fn to_availability(&self) -> Result<Availability, String> {
        let stock = match self.available_stock.as_ref().and_then(Wrapped::as_text) {
            None => 0,
            Some(raw) if raw.is_empty() => 0,
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| format!("AvailableStock \"{raw}\" is not a stock count: {e}"))?,
        };

        let probability = self
            .in_stock_probability_code
            .as_ref()
            .and_then(Wrapped::as_text)
            .unwrap_or_default();

        let restock_date = self
            .restock_date_time
            .as_ref()
            .and_then(Wrapped::as_text)
            .and_then(|raw| parse_restock_date(&raw));

        Ok(Availability {
            stock,
            probability,
            restock_date,
        })
    }
}

/// Accepts `YYYY-MM-DD` optionally followed by a time part.
fn parse_restock_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
