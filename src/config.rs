//! Generator configuration.
//!
//! Every constant the generator needs lives here. `GeneratorConfig::default()`
//! is the stock retail dataset; a YAML file can override any subset of keys.

use crate::schema::Table;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default output file name, created in the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "igendata.sql";

/// Closed id range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub start: i64,
    pub end: i64,
}

impl IdRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of ids in the range: `Some(0)` when inverted, `None` when
    /// the count does not fit in `usize`
    pub fn count(&self) -> Option<usize> {
        if self.end < self.start {
            return Some(0);
        }
        let span = self.end.abs_diff(self.start).checked_add(1)?;
        usize::try_from(span).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// Row counts, id ranges and value bounds for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Rows in Orders, STAFF_ORDERS links and ORDER_PRODUCTS groups
    pub order_total: usize,
    /// Rows in STAFF
    pub staff_total: usize,
    /// Rows in INVENTORY
    pub inv_total: usize,
    /// COLLECTIONS ids
    pub collection_ids: IdRange,
    /// DELIVERIES ids
    pub delivery_ids: IdRange,
    pub min_year: u16,
    pub max_year: u16,
    /// Consecutive order ids sharing one order type
    pub type_block: usize,
    /// Upper bound of the per-order product count
    pub max_products_per_order: usize,
    pub stock_range: (i64, i64),
    pub price_range: (i64, i64),
    pub person_name_len: i32,
    pub product_name_len: i32,
    pub address_token_len: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            order_total: 300,
            staff_total: 10,
            inv_total: 100,
            collection_ids: IdRange::new(100, 199),
            delivery_ids: IdRange::new(200, 299),
            min_year: 2001,
            max_year: 2020,
            type_block: 100,
            max_products_per_order: 10,
            stock_range: (5, 5000),
            price_range: (200, 500),
            person_name_len: 10,
            product_name_len: 15,
            address_token_len: 5,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file. Keys not present keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Reject configurations that cannot be generated.
    ///
    /// Runs before any row is produced so an invalid setup never leaves a
    /// partial output file behind.
    pub fn validate(&self) -> anyhow::Result<()> {
        for table in Table::ALL {
            self.validate_table(table)?;
        }
        Ok(())
    }

    /// Check only what generating `table` depends on
    pub fn validate_table(&self, table: Table) -> anyhow::Result<()> {
        match table {
            Table::Staff => {}
            Table::Inventory => {
                check_bounds("stock_range", self.stock_range)?;
                check_bounds("price_range", self.price_range)?;
            }
            Table::Orders => {
                if self.type_block == 0 {
                    anyhow::bail!("type_block must be greater than 0");
                }
                self.check_years()?;
            }
            Table::Collections => {
                check_id_range("collection_ids", self.collection_ids)?;
                self.check_years()?;
            }
            Table::Deliveries => {
                check_id_range("delivery_ids", self.delivery_ids)?;
                self.check_years()?;
            }
            Table::StaffOrders => {
                if self.order_total > 0 && self.staff_total == 0 {
                    anyhow::bail!("staff_total must be at least 1 when orders are generated");
                }
            }
            Table::OrderProducts => {
                if self.order_total > 0 && self.max_products_per_order == 0 {
                    anyhow::bail!("max_products_per_order must be at least 1");
                }
                if self.order_total > 0 && self.max_products_per_order > self.inv_total {
                    anyhow::bail!(
                        "max_products_per_order ({}) exceeds inv_total ({}): cannot sample that many distinct products",
                        self.max_products_per_order,
                        self.inv_total
                    );
                }
            }
        }
        Ok(())
    }

    fn check_years(&self) -> anyhow::Result<()> {
        if self.min_year > self.max_year {
            anyhow::bail!(
                "min_year ({}) is after max_year ({})",
                self.min_year,
                self.max_year
            );
        }
        Ok(())
    }
}

fn check_bounds(name: &str, (min, max): (i64, i64)) -> anyhow::Result<()> {
    if min > max {
        anyhow::bail!("{} is inverted: {} > {}", name, min, max);
    }
    Ok(())
}

fn check_id_range(name: &str, range: IdRange) -> anyhow::Result<()> {
    match range.count() {
        Some(0) => anyhow::bail!(
            "{} range is empty: {}..={}",
            name,
            range.start,
            range.end
        ),
        None => anyhow::bail!(
            "{} range is too wide: {}..={}",
            name,
            range.start,
            range.end
        ),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_dataset() {
        let config = GeneratorConfig::default();
        assert_eq!(config.order_total, 300);
        assert_eq!(config.staff_total, 10);
        assert_eq!(config.inv_total, 100);
        assert_eq!(config.collection_ids, IdRange::new(100, 199));
        assert_eq!(config.delivery_ids, IdRange::new(200, 299));
        assert_eq!((config.min_year, config.max_year), (2001, 2020));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_id_range_count() {
        assert_eq!(IdRange::new(100, 199).count(), Some(100));
        assert_eq!(IdRange::new(5, 5).count(), Some(1));
        assert_eq!(IdRange::new(10, 9).count(), Some(0));
        assert_eq!(IdRange::new(-5, 4).count(), Some(10));
        assert_eq!(IdRange::new(i64::MIN, i64::MAX).count(), None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
order_total: 30
staff_total: 3
collection_ids:
  start: 1000
  end: 1009
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.order_total, 30);
        assert_eq!(config.staff_total, 3);
        assert_eq!(config.collection_ids.count(), Some(10));
        assert_eq!(config.inv_total, 100);
        assert_eq!(config.delivery_ids, IdRange::new(200, 299));
    }

    #[test]
    fn test_rejects_oversized_product_sample() {
        let config = GeneratorConfig {
            inv_total: 5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds inv_total"));
    }

    #[test]
    fn test_rejects_missing_staff() {
        let config = GeneratorConfig {
            staff_total: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let no_orders = GeneratorConfig {
            staff_total: 0,
            order_total: 0,
            ..Default::default()
        };
        assert!(no_orders.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let years = GeneratorConfig {
            min_year: 2021,
            max_year: 2020,
            ..Default::default()
        };
        assert!(years.validate().is_err());

        let ids = GeneratorConfig {
            delivery_ids: IdRange::new(300, 200),
            ..Default::default()
        };
        assert!(ids.validate().is_err());

        let price = GeneratorConfig {
            price_range: (500, 200),
            ..Default::default()
        };
        assert!(price.validate().is_err());
    }

    #[test]
    fn test_rejects_range_too_wide_to_count() {
        let config = GeneratorConfig {
            collection_ids: IdRange::new(i64::MIN, i64::MAX),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too wide"), "{}", err);

        let yaml = "delivery_ids:\n  start: -9223372036854775808\n  end: 9223372036854775807\n";
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("delivery_ids range is too wide"), "{}", err);
    }

    #[test]
    fn test_validate_table_checks_only_its_inputs() {
        let config = GeneratorConfig {
            staff_total: 0,
            type_block: 0,
            ..Default::default()
        };
        assert!(config.validate_table(Table::Staff).is_ok());
        assert!(config.validate_table(Table::Inventory).is_ok());
        assert!(config.validate_table(Table::Orders).is_err());
        assert!(config.validate_table(Table::StaffOrders).is_err());
    }
}
