//! Tax-table loading functionality.
//!
//! This module provides the [`TableLoader`] type for loading tax tables from
//! a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TaxTables;

/// Loads and provides access to validated tax tables.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::TableLoader;
///
/// let loader = TableLoader::load("./config/tables_2024.yaml")?;
/// println!("INSS ceiling: {}", loader.tables().inss_ceiling);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableLoader {
    tables: TaxTables,
}

impl TableLoader {
    /// Loads tax tables from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `TableLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The tables fail validation (`InvalidTaxTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let tables: TaxTables =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        tables.validate()?;

        Ok(Self { tables })
    }

    /// Returns the loaded tax tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Consumes the loader and returns the tables.
    pub fn into_tables(self) -> TaxTables {
        self.tables
    }
}
