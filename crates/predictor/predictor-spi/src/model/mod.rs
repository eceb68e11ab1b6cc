//! Request, response and summary models

mod request;
mod response;
mod summary;

pub use request::PredictionRequest;
pub use response::{PredictionResponse, TreeMetrics};
pub use summary::{ModelSummary, TreeSummary};
