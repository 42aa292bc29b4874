//! Tax-table configuration for the payroll engine.
//!
//! Bracket tables and flat rates are legally defined constants loaded once
//! and shared read-only across all calculations. They can come from the
//! built-in 2024 tables or from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::TableLoader;
//!
//! let loader = TableLoader::load("./config/tables_2024.yaml").unwrap();
//! println!("INSS ceiling: {}", loader.tables().inss_ceiling);
//! ```

mod loader;
mod types;

pub use loader::TableLoader;
pub use types::{TaxBracket, TaxTables};
