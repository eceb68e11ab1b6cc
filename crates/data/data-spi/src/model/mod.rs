//! Dataset model types

mod date;
mod feature;
mod record;

pub use date::parse_date;
pub use feature::{FeatureVector, DATE_COLUMN, FEATURE_COLUMNS, FEATURE_COUNT, TARGET_COLUMN};
pub use record::{Dataset, HistoricalRecord};
