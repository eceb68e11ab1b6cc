//! Contract traits for rate predictors

mod rate_predictor;

pub use rate_predictor::RatePredictor;
