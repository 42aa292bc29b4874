//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxTables;

/// Shared application state.
///
/// Holds the tax tables, which are read-only after startup and safe for
/// unsynchronized concurrent reads across requests.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<TaxTables>,
}

impl AppState {
    /// Creates a new application state with the given tax tables.
    pub fn new(tables: TaxTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the tax tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }
}
