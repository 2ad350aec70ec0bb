//! Offline trainer
//!
//! Reads the training CSV, fits the classifier with a fixed seed and writes
//! the artifact. Any failure is fatal; there is no retry and no partial
//! output.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diabetes_predictor::config::Config;
use diabetes_predictor::{dataset, model};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diabetes_predictor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let data = dataset::load_csv(&config.data_path)
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;
    tracing::info!(
        "Loaded {} rows from {}",
        data.targets.len(),
        config.data_path.display()
    );

    let outcome = model::train(data).context("training classifier")?;
    tracing::info!(
        "Training complete, holdout accuracy: {:.3}",
        outcome.holdout_accuracy
    );

    outcome
        .classifier
        .save(&config.model_path)
        .with_context(|| format!("writing artifact to {}", config.model_path.display()))?;
    tracing::info!("✅ Model trained and saved to {}", config.model_path.display());

    Ok(())
}
