//! Data Source Service Provider Interface
//!
//! Defines traits and types for loading the historical rate dataset.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{
    parse_date, Dataset, FeatureVector, HistoricalRecord, DATE_COLUMN, FEATURE_COLUMNS,
    FEATURE_COUNT, TARGET_COLUMN,
};

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(Dataset);

    impl DataSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        fn load(&self) -> Result<Dataset> {
            if self.0.is_empty() {
                return Err(DataError::NoData);
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_feature_columns_are_unique() {
        for (i, a) in FEATURE_COLUMNS.iter().enumerate() {
            for b in FEATURE_COLUMNS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(!FEATURE_COLUMNS.contains(&TARGET_COLUMN));
        assert!(!FEATURE_COLUMNS.contains(&DATE_COLUMN));
    }

    #[test]
    fn test_data_source_as_trait_object() {
        let record = HistoricalRecord::new(
            parse_date("2020-01-01").unwrap(),
            0.75,
            FeatureVector::new([1.0; FEATURE_COUNT]),
        );
        let source: Box<dyn DataSource> = Box::new(StaticSource(Dataset::new(vec![record])));

        assert_eq!(source.name(), "static");
        assert_eq!(source.load().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_source_reports_no_data() {
        let source = StaticSource(Dataset::default());
        assert_eq!(source.load().unwrap_err(), DataError::NoData);
    }
}
