//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading regime
//! metadata and effective-dated tax tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RegimeMetadata, TaxTable};

/// Loads and provides access to the payroll tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every tax table once at load time, and answers
/// effective-date lookups for the calculation path.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt/
/// ├── regime.yaml          # Regime metadata
/// └── tables/
///     └── 2024-01-01.yaml  # Tax tables effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let table = loader.table_for(date).unwrap();
/// println!("Levy rate: {}", table.employer_levy.rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    regime: RegimeMetadata,
    tables: Vec<TaxTable>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any tax table fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime_path = path.join("regime.yaml");
        let regime = Self::load_yaml::<RegimeMetadata>(&regime_path)?;

        let tables_dir = path.join("tables");
        let mut tables = Self::load_tables(&tables_dir)?;

        for table in &tables {
            table.validate()?;
        }
        tables.sort_by_key(|t| t.effective_date);

        Ok(Self { regime, tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all table files from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<TaxTable>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<TaxTable>(&path)?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.regime
    }

    /// Returns all loaded tables, ordered by effective date.
    pub fn tables(&self) -> &[TaxTable] {
        &self.tables
    }

    /// Gets the tax table effective for a competência date.
    ///
    /// The method finds the most recent table whose effective date is on
    /// or before the given date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TableNotFound`] when every loaded table
    /// became effective after the requested date.
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&TaxTable> {
        self.tables
            .iter()
            .rev()
            .find(|t| t.effective_date <= date)
            .ok_or(EngineError::TableNotFound { date })
    }

    /// Gets the most recent tax table.
    ///
    /// Loading guarantees at least one table, so this cannot fail.
    pub fn latest_table(&self) -> &TaxTable {
        self.tables
            .last()
            .expect("ConfigLoader::load guarantees at least one table")
    }
}
