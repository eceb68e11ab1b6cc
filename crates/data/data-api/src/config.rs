//! Dataset configuration types.

use std::path::{Path, PathBuf};

use data_spi::{DATE_COLUMN, TARGET_COLUMN};
use serde::{Deserialize, Serialize};

/// Dataset path used when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "uk.csv";

/// Configuration for reading the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// CSV file path
    pub path: PathBuf,
    /// Name of the date column
    pub date_column: String,
    /// Name of the target column
    pub target_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl DatasetConfig {
    /// Create a configuration for a CSV file with the standard columns.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            date_column: DATE_COLUMN.to_string(),
            target_column: TARGET_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

/// Builder for DatasetConfig.
#[derive(Debug, Default)]
pub struct DatasetConfigBuilder {
    path: Option<PathBuf>,
    date_column: Option<String>,
    target_column: Option<String>,
    delimiter: Option<u8>,
}

impl DatasetConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSV path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the date column name.
    pub fn date_column(mut self, name: &str) -> Self {
        self.date_column = Some(name.to_string());
        self
    }

    /// Override the target column name.
    pub fn target_column(mut self, name: &str) -> Self {
        self.target_column = Some(name.to_string());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<DatasetConfig, &'static str> {
        let path = self.path.ok_or("path is required")?;
        let mut config = DatasetConfig::new(path);
        if let Some(date_column) = self.date_column {
            config.date_column = date_column;
        }
        if let Some(target_column) = self.target_column {
            config.target_column = target_column;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        Ok(config)
    }
}
