//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
///
/// Defaults reproduce the fixed development setup: port 5000, artifact and
/// dataset paths relative to the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the serialized model artifact
    pub model_path: PathBuf,

    /// Path to the training dataset (trainer only)
    pub data_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("model.json")),

            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/diabetes.csv")),
        }
    }
}
