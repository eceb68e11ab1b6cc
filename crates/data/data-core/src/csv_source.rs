//! CSV data source
//!
//! Reads the historical rate dataset from a delimited file. Rows where any
//! field is missing are dropped; everything that remains must parse.
//!
//! # Example
//!
//! ```rust,no_run
//! use data_core::CsvDataSource;
//! use data_spi::DataSource;
//!
//! let dataset = CsvDataSource::from_path("uk.csv").load().unwrap();
//! println!("Loaded {} rows", dataset.len());
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use data_api::DatasetConfig;
use data_spi::{
    parse_date, DataError, DataSource, Dataset, FeatureVector, HistoricalRecord, Result,
    FEATURE_COLUMNS, FEATURE_COUNT,
};

/// Field values treated as missing.
const NULL_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    target: usize,
    features: [usize; FEATURE_COUNT],
}

/// CSV-backed historical dataset.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    config: DatasetConfig,
    name: String,
}

impl CsvDataSource {
    /// Create a data source from a configuration.
    pub fn new(config: DatasetConfig) -> Self {
        let name = config.path.display().to_string();
        Self { config, name }
    }

    /// Create a data source for a path with the standard columns.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(DatasetConfig::new(path))
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Parse a dataset from any reader, using this source's column settings.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DataError::Csv(e.to_string()))?
            .clone();
        let columns = self.resolve_columns(&headers)?;
        let width = headers.len();

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| DataError::Csv(e.to_string()))?;
            let line = record.position().map_or(i + 2, |p| p.line() as usize);

            if record.len() < width || record.iter().any(is_null_like) {
                dropped += 1;
                continue;
            }

            records.push(parse_record(&record, &columns, line, &self.config)?);
        }

        if dropped > 0 {
            tracing::debug!(source = %self.name, dropped, "dropped incomplete rows");
        }

        if records.is_empty() {
            return Err(DataError::NoData);
        }

        tracing::info!(
            source = %self.name,
            rows = records.len(),
            dropped,
            "loaded historical dataset"
        );

        Ok(Dataset::new(records))
    }

    fn resolve_columns(&self, headers: &StringRecord) -> Result<ColumnIndex> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };

        let date = find(&self.config.date_column)?;
        let target = find(&self.config.target_column)?;
        let mut features = [0usize; FEATURE_COUNT];
        for (slot, name) in features.iter_mut().zip(FEATURE_COLUMNS.iter()) {
            *slot = find(name)?;
        }

        Ok(ColumnIndex {
            date,
            target,
            features,
        })
    }
}

impl DataSource for CsvDataSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Dataset> {
        let file = File::open(&self.config.path).map_err(|e| DataError::Io {
            path: self.name.clone(),
            reason: e.to_string(),
        })?;
        self.read_from(BufReader::new(file))
    }
}

fn is_null_like(field: &str) -> bool {
    let field = field.trim();
    NULL_MARKERS.contains(&field)
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnIndex,
    line: usize,
    config: &DatasetConfig,
) -> Result<HistoricalRecord> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let date = parse_date(field(columns.date))?;
    let target = parse_number(field(columns.target), line, &config.target_column)?;

    let mut values = [0.0; FEATURE_COUNT];
    for ((value, &idx), name) in values
        .iter_mut()
        .zip(columns.features.iter())
        .zip(FEATURE_COLUMNS.iter())
    {
        *value = parse_number(field(idx), line, name)?;
    }

    Ok(HistoricalRecord::new(date, target, FeatureVector::new(values)))
}

fn parse_number(raw: &str, row: usize, column: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataError::ParseError {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
