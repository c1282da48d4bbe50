//! Read-only order registry.
//!
//! Orders are loaded once from a CSV file keyed by `order_id` and never
//! mutated afterwards. A missing source file degrades to an empty store so
//! lookups miss instead of failing startup.

use std::path::Path;

use ahash::AHashMap;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single order record.
///
/// All fields are kept as text; the status value is compared
/// case-insensitively where branching logic inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Current status (Processing, Shipped, Delivered, Cancelled, ...).
    pub status: String,
    /// Estimated delivery date.
    pub eta: String,
    /// Total amount.
    pub total: String,
    /// Shipping provider name.
    pub shipping_provider: String,
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    order_id: String,
    status: String,
    eta: String,
    total: String,
    shipping_provider: String,
}

/// Read-only lookup table of orders keyed by order id.
///
/// The key is matched exactly and case-sensitively, preserving whatever
/// format the source data uses.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: AHashMap<String, OrderRecord>,
}

impl OrderStore {
    /// Create an empty store. Every lookup misses.
    pub fn empty() -> Self {
        OrderStore::default()
    }

    /// Create a store from pre-built records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, OrderRecord)>,
    {
        OrderStore {
            orders: records.into_iter().collect(),
        }
    }

    /// Load the order registry from a CSV file.
    ///
    /// Expected headers: `order_id,status,eta,total,shipping_provider`.
    /// A missing file yields an empty store; a file that exists but cannot
    /// be parsed is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "order source {} not found, using empty registry",
                path.display()
            );
            return Ok(OrderStore::empty());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut orders = AHashMap::new();
        for record in reader.deserialize() {
            let row: OrderRow = record?;
            orders.insert(
                row.order_id,
                OrderRecord {
                    status: row.status,
                    eta: row.eta,
                    total: row.total,
                    shipping_provider: row.shipping_provider,
                },
            );
        }

        log::info!("loaded {} order records", orders.len());
        Ok(OrderStore { orders })
    }

    /// Look up an order by its exact id.
    pub fn get(&self, order_id: &str) -> Option<&OrderRecord> {
        self.orders.get(order_id)
    }

    /// Get the number of orders in the store.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn record(status: &str) -> OrderRecord {
        OrderRecord {
            status: status.to_string(),
            eta: "2026-09-05".to_string(),
            total: "$49.99".to_string(),
            shipping_provider: "DHL".to_string(),
        }
    }

    #[test]
    fn test_load_from_csv() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("orders.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "order_id,status,eta,total,shipping_provider").unwrap();
        writeln!(file, "123456,Processing,2026-09-05,$49.99,DHL").unwrap();
        writeln!(file, "777777,Shipped,2026-09-02,$12.00,UPS").unwrap();

        let store = OrderStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("123456").unwrap().status, "Processing");
        assert_eq!(store.get("777777").unwrap().shipping_provider, "UPS");
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = OrderStore::load(dir.path().join("absent.csv")).unwrap();
        assert!(store.is_empty());
        assert!(store.get("123456").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_exact() {
        let store = OrderStore::from_records(vec![("AB1234".to_string(), record("Processing"))]);
        assert!(store.get("AB1234").is_some());
        assert!(store.get("ab1234").is_none());
        assert!(store.get("AB123").is_none());
    }
}
