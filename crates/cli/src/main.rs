//! # ratecast-cli
//!
//! Command-line interface for training the rate models and running single
//! predictions without the HTTP server.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use data_facade::{CsvDataSource, DataSource, DEFAULT_DATASET_PATH};
use predictor_facade::{PredictionRequest, PredictionService, PredictorConfig, RatePredictor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ratecast")]
#[command(about = "Interest rate prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the models and print their summary
    Train {
        /// Historical rates CSV
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        data: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Train the models and predict one date
    Predict {
        /// Historical rates CSV
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        data: PathBuf,

        /// Date to predict (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Six comma-separated rates in training order
        #[arg(short, long, value_delimiter = ',', num_args = 1, allow_hyphen_values = true)]
        features: Vec<f64>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn train(data: &Path) -> anyhow::Result<PredictionService> {
    tracing::info!("Loading dataset from {}", data.display());
    let dataset = CsvDataSource::from_path(data)
        .load()
        .with_context(|| format!("failed to load {}", data.display()))?;
    let service = PredictionService::train(&dataset, PredictorConfig::default())
        .context("failed to train models")?;
    Ok(service)
}

/// Print pretty JSON, or write it to a file.
fn write_json(json: &serde_json::Value, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(&mut file, json)?;
            println!("Results written to {:?}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(json)?),
    }
    Ok(())
}

fn run_train(data: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let service = train(&data)?;
    let summary = service.summary();

    println!(
        "Trained on {} records ({} to {})",
        summary.records, summary.first_date, summary.last_date
    );
    println!(
        "Tree: depth {}, {} leaves, mse {:.4}, mae {:.4}, r2 {:.4}",
        summary.tree.depth,
        summary.tree.n_leaves,
        summary.tree_metrics.mse,
        summary.tree_metrics.mae,
        summary.tree_metrics.r2
    );

    write_json(&serde_json::to_value(&summary)?, output.as_deref())
}

fn run_predict(
    data: PathBuf,
    date: String,
    features: Vec<f64>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let service = train(&data)?;
    tracing::info!(date = %date, features = features.len(), "Running prediction");
    let response = service.predict(&PredictionRequest::new(features, date))?;
    write_json(&serde_json::to_value(&response)?, output.as_deref())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train { data, output } => run_train(data, output),
        Commands::Predict {
            data,
            date,
            features,
            output,
        } => run_predict(data, date, features, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from([
            "ratecast",
            "predict",
            "--data",
            "rates.csv",
            "--date",
            "2024-05-01",
            "--features",
            "4.5,3.1,2.9,4.2,0.8,1.4",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict {
                data,
                date,
                features,
                output,
            } => {
                assert_eq!(data, PathBuf::from("rates.csv"));
                assert_eq!(date, "2024-05-01");
                assert_eq!(features, vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4]);
                assert!(output.is_none());
            }
            Commands::Train { .. } => panic!("expected predict"),
        }
    }

    #[test]
    fn test_parse_negative_feature() {
        let cli = Cli::try_parse_from([
            "ratecast",
            "predict",
            "--date",
            "2024-05-01",
            "--features",
            "-0.1,3.1,2.9,4.2,0.8,1.4",
        ])
        .unwrap();
        match cli.command {
            Commands::Predict { features, data, .. } => {
                assert_eq!(features[0], -0.1);
                assert_eq!(data, PathBuf::from("uk.csv"));
            }
            Commands::Train { .. } => panic!("expected predict"),
        }
    }

    #[test]
    fn test_train_defaults_to_uk_csv() {
        let cli = Cli::try_parse_from(["ratecast", "train"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Train { ref data, output: None } if data == Path::new("uk.csv")
        ));
    }

    #[test]
    fn test_non_numeric_feature_is_rejected() {
        let result = Cli::try_parse_from([
            "ratecast",
            "predict",
            "--date",
            "2024-05-01",
            "--features",
            "a,b",
        ]);
        assert!(result.is_err());
    }
}
