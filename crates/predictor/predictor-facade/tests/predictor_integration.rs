//! Integration tests for the predictor stack

use data_facade::{parse_date, Dataset, FeatureVector, HistoricalRecord};
use predictor_facade::prelude::*;
use predictor_facade::{PredictionService, TreeMetrics};

/// Five years of monthly rates drifting down from 5% towards 0.5%
fn rate_dataset() -> Dataset {
    let records = (0..60)
        .map(|i| {
            let k = i as f64;
            let libor = 5.0 - 4.5 / (1.0 + (-(k - 30.0) / 5.0).exp());
            let bank = (libor - 0.2 + 0.03 * (k * 1.7).sin()).max(0.1);
            let features = FeatureVector::new([
                libor + 2.5 + 0.1 * (k * 0.4).cos(),
                libor + 1.8,
                bank + 1.0,
                bank + 3.5 + 0.05 * (k * 0.9).sin(),
                libor,
                3.0 + 0.4 * (k * 0.21).sin(),
            ]);
            let date = parse_date(&format!("{}-{:02}-28", 2005 + i / 12, i % 12 + 1)).unwrap();
            HistoricalRecord::new(date, bank, features)
        })
        .collect();
    Dataset::new(records)
}

fn service() -> PredictionService {
    PredictionService::train(&rate_dataset(), PredictorConfig::default()).unwrap()
}

fn decimals(value: f64, places: i32) -> bool {
    let factor = 10f64.powi(places);
    ((value * factor).round() - value * factor).abs() < 1e-6
}

#[test]
fn test_training_row_predicts_its_target() {
    let dataset = rate_dataset();
    let service = service();
    let record = &dataset.records()[17];

    let response = service
        .predict(&PredictionRequest::new(
            record.features.to_vec(),
            record.date.to_string(),
        ))
        .unwrap();

    assert!((response.tree_prediction - record.target).abs() <= 0.0005 + 1e-12);
}

#[test]
fn test_identical_requests_identical_responses() {
    let service = service();
    let request = PredictionRequest::new(vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4], "2024-05-01");

    let first = service.predict(&request).unwrap();
    let second = service.predict(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_two_trainings_agree() {
    let request = PredictionRequest::new(vec![6.0, 5.0, 4.0, 7.0, 3.5, 3.2], "2009-06-30");

    let a = service().predict(&request).unwrap();
    let b = service().predict(&request).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_response_is_rounded() {
    let response = service()
        .predict(&PredictionRequest::new(
            vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4],
            "2024-05-01",
        ))
        .unwrap();

    assert!(decimals(response.tree_prediction, 3));
    assert!(decimals(response.prophet_prediction, 3));
    assert!(decimals(response.combined_rate, 3));
    assert!(decimals(response.confidence_interval[0], 3));
    assert!(decimals(response.confidence_interval[1], 3));
    assert!(decimals(response.tree_metrics.mse, 4));
    assert!(decimals(response.tree_metrics.mae, 4));
    assert!(decimals(response.tree_metrics.r2, 4));
}

#[test]
fn test_time_series_outputs_are_non_negative() {
    let service = service();
    // Very low inputs far past the history push the raw forecast below zero
    let requests = [
        PredictionRequest::new(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0], "2030-01-01"),
        PredictionRequest::new(vec![-5.0, -5.0, -5.0, -5.0, -5.0, -5.0], "2012-01-01"),
        PredictionRequest::new(vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4], "2024-05-01"),
    ];

    for request in &requests {
        let response = service.predict(request).unwrap();
        assert!(response.prophet_prediction >= 0.0);
        assert!(response.confidence_interval[0] >= 0.0);
        assert!(response.confidence_interval[1] >= response.confidence_interval[0]);
    }
}

#[test]
fn test_blend_rule_negative_forecast_returns_tree() {
    let service = service();
    let response = service
        .predict(&PredictionRequest::new(vec![-5.0; 6], "2012-01-01"))
        .unwrap();

    assert_eq!(response.prophet_prediction, 0.0);
    assert!((response.combined_rate - response.tree_prediction).abs() <= 0.0015);
}

#[test]
fn test_blend_rule_positive_forecast_is_weighted() {
    let service = service();
    let response = service
        .predict(&PredictionRequest::new(
            vec![7.5, 6.8, 6.5, 9.0, 5.0, 3.0],
            "2005-06-28",
        ))
        .unwrap();

    assert!(response.prophet_prediction > 0.0005);
    let expected = 0.6 * response.prophet_prediction + 0.4 * response.tree_prediction;
    assert!((response.combined_rate - expected).abs() <= 0.0015);
}

#[test]
fn test_metrics_are_constant_across_requests() {
    let service = service();
    let a = service
        .predict(&PredictionRequest::new(vec![1.0; 6], "2010-01-01"))
        .unwrap();
    let b = service
        .predict(&PredictionRequest::new(vec![9.0; 6], "2031-12-31"))
        .unwrap();

    assert_eq!(a.tree_metrics, b.tree_metrics);
    assert_eq!(
        a.tree_metrics,
        TreeMetrics {
            mse: 0.0,
            mae: 0.0,
            r2: 1.0
        }
    );
}

#[test]
fn test_wrong_feature_count() {
    let service = service();
    for features in [vec![], vec![1.0; 5], vec![1.0; 7]] {
        let actual = features.len();
        let err = service
            .predict(&PredictionRequest::new(features, "2024-05-01"))
            .unwrap_err();
        assert_eq!(
            err,
            PredictorError::InvalidFeatureCount {
                expected: 6,
                actual
            }
        );
        assert!(err.is_client_error());
    }
}

#[test]
fn test_invalid_date() {
    let err = service()
        .predict(&PredictionRequest::new(vec![1.0; 6], "next tuesday"))
        .unwrap_err();
    assert!(matches!(err, PredictorError::InvalidDate(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_summary() {
    let summary = service().summary();

    assert_eq!(summary.records, 60);
    assert_eq!(summary.first_date.to_string(), "2005-01-28");
    assert_eq!(summary.last_date.to_string(), "2009-12-28");
    assert_eq!(summary.target, "Bank_Rate");
    assert_eq!(summary.features[4], "LIBOR_3m");
    assert_eq!(summary.forecaster.regressors, summary.features);
    let importance: f64 = summary.tree.feature_importances.iter().sum();
    assert!((importance - 1.0).abs() < 1e-9);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["first_date"], "2005-01-28");
}

#[test]
fn test_service_as_trait_object() {
    let predictor: Box<dyn RatePredictor> = Box::new(service());
    let response = predictor
        .predict(&PredictionRequest::new(
            vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4],
            "2024-05-01",
        ))
        .unwrap();
    assert!(response.combined_rate.is_finite());
}
