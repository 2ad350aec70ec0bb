//! Classifier wrapper - training, artifact serialization, inference
//!
//! All fitting and probability estimation is delegated to `linfa-logistic`;
//! this module owns the artifact lifecycle (train once, write once, load at
//! startup, read-only thereafter) and the rounding of probabilities into the
//! percentage the API reports.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use linfa::prelude::*;
use linfa::Dataset;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::Ix1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::FeatureVector;

/// Fixed shuffle seed, so repeated training runs on the same dataset are
/// reproducible.
pub const TRAIN_SEED: u64 = 42;

/// Iteration cap for the logistic solver.
pub const MAX_ITERATIONS: u64 = 200;

/// Fraction of the dataset used for fitting; the rest is the holdout.
pub const TRAIN_RATIO: f32 = 0.8;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not access model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode or decode model artifact: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("model fitting failed: {0}")]
    Fit(#[from] linfa_logistic::error::Error),

    #[error("holdout evaluation failed: {0}")]
    Evaluation(#[from] linfa::Error),

    #[error("model produced no output")]
    EmptyPrediction,
}

/// Outcome of a prediction for a single feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Binary label: 1 = positive class (diabetic)
    pub label: usize,
    /// Positive-class probability as a percentage, rounded to 2 decimals
    pub probability_percent: f64,
}

/// Result of an offline training run.
#[derive(Debug)]
pub struct TrainOutcome {
    pub classifier: Classifier,
    /// Accuracy on the 20% holdout split
    pub holdout_accuracy: f32,
}

/// A fitted binary classifier over the fixed feature schema.
///
/// The serde form of this struct is the on-disk artifact.
#[derive(Debug, Serialize, Deserialize)]
pub struct Classifier {
    inner: FittedLogisticRegression<f64, usize>,
}

impl Classifier {
    /// Predict label and positive-class probability for one feature vector.
    pub fn predict_one(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let input = features.as_row();

        let raw = self
            .inner
            .predict_probabilities(&input)
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyPrediction)?;

        let label = self
            .inner
            .predict(&input)
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyPrediction)?;

        // `predict_probabilities` reports the probability of whichever class
        // the fit mapped to its internal positive side, which is not
        // necessarily outcome = 1. The decision rule picks that side exactly
        // when the value crosses the 0.5 threshold, so the predicted label
        // pins down which class the value refers to.
        let probability = if (label == 1) == (raw >= 0.5) {
            raw
        } else {
            1.0 - raw
        };

        Ok(Prediction {
            label,
            probability_percent: round_percent(probability),
        })
    }

    /// Write the artifact, overwriting any existing file at `path`.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load an artifact produced by [`Classifier::save`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        let classifier = serde_json::from_reader(BufReader::new(file))?;
        Ok(classifier)
    }
}

/// Fit a logistic classifier on `dataset`.
///
/// Shuffles with the fixed seed, splits 80/20, fits on the 80% with a bounded
/// iteration cap and reports accuracy on the 20% holdout.
pub fn train(dataset: Dataset<f64, usize, Ix1>) -> Result<TrainOutcome, ModelError> {
    let mut rng = StdRng::seed_from_u64(TRAIN_SEED);
    let (train, valid) = dataset.shuffle(&mut rng).split_with_ratio(TRAIN_RATIO);

    let fitted = LogisticRegression::default()
        .max_iterations(MAX_ITERATIONS)
        .fit(&train)?;

    let predictions = fitted.predict(&valid);
    let confusion = predictions.confusion_matrix(&valid)?;

    Ok(TrainOutcome {
        classifier: Classifier { inner: fitted },
        holdout_accuracy: confusion.accuracy(),
    })
}

/// Probability in [0, 1] -> percentage in [0, 100], 2 decimals.
fn round_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
