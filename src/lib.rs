//! Synthetic data generator for the retail order-management schema.
//!
//! Produces STAFF, INVENTORY, Orders, COLLECTIONS, DELIVERIES, STAFF_ORDERS
//! and ORDER_PRODUCTS rows whose ids line up across tables, rendered as one
//! INSERT statement per line.
//!
//! # Example
//!
//! ```rust
//! use retail_datagen::{render_to_string, Generator, GeneratorConfig};
//!
//! // Same seed, same output
//! let mut gen = Generator::new(42, GeneratorConfig::default());
//! let data = gen.generate().unwrap();
//!
//! let sql = render_to_string(&data);
//! assert!(sql.starts_with("INSERT INTO STAFF VALUES (0, '"));
//! ```

pub mod config;
pub mod fake;
pub mod generator;
pub mod renderer;
pub mod schema;
pub mod writer;

pub use config::{GeneratorConfig, IdRange, DEFAULT_OUTPUT_FILE};
pub use generator::{GeneratedData, Generator, Row, SqlValue, TableData};
pub use renderer::{render_statement, render_to_string};
pub use schema::{OrderType, Table};
pub use writer::{write_output, OutputWriter};
