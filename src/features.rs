//! Feature schema - the fixed ordered input layout
//!
//! The fitted model binds inputs positionally, so the order of
//! `FEATURE_NAMES` is the single source of truth for both training
//! and inference. Never reorder without retraining.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Feature names in the exact order the model expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Total number of input features.
pub const FEATURE_COUNT: usize = 8;

/// Human-readable statement of the input contract, used verbatim in
/// client-error responses.
pub fn schema_requirement() -> String {
    format!(
        "You must provide exactly {} features: {}",
        FEATURE_COUNT,
        FEATURE_NAMES.join(", ")
    )
}

/// Error for inputs that do not match the schema length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFeatureCount {
    pub provided: usize,
}

impl std::fmt::Display for InvalidFeatureCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", schema_requirement())
    }
}

impl std::error::Error for InvalidFeatureCount {}

/// A validated, ordered feature vector.
///
/// Construction goes through [`FeatureVector::from_vec`], so holding one
/// guarantees the length invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Validate a raw sequence against the schema.
    pub fn from_vec(values: Vec<f64>) -> Result<Self, InvalidFeatureCount> {
        let values: [f64; FEATURE_COUNT] = values
            .try_into()
            .map_err(|v: Vec<f64>| InvalidFeatureCount { provided: v.len() })?;
        Ok(Self { values })
    }

    /// View as a single-row matrix for model input.
    pub fn as_row(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, FEATURE_COUNT), |(_, j)| self.values[j])
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }
}

/// Get feature index by name (O(n) but features are few).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|&n| n == name)
}

/// Get feature name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_NAMES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count_matches_names() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_COUNT, 8);
    }

    #[test]
    fn test_from_vec_accepts_exactly_eight() {
        let vector = FeatureVector::from_vec(vec![1.0, 85.0, 66.0, 29.0, 0.0, 26.6, 0.351, 31.0])
            .expect("eight values must validate");
        assert_eq!(vector.get_by_name("Glucose"), Some(85.0));
        assert_eq!(vector.get_by_name("Age"), Some(31.0));
    }

    #[test]
    fn test_from_vec_rejects_wrong_lengths() {
        assert_eq!(
            FeatureVector::from_vec(vec![1.0; 7]),
            Err(InvalidFeatureCount { provided: 7 })
        );
        assert_eq!(
            FeatureVector::from_vec(vec![1.0; 9]),
            Err(InvalidFeatureCount { provided: 9 })
        );
        assert_eq!(
            FeatureVector::from_vec(vec![]),
            Err(InvalidFeatureCount { provided: 0 })
        );
    }

    #[test]
    fn test_error_message_enumerates_all_names() {
        let message = InvalidFeatureCount { provided: 7 }.to_string();
        assert!(message.contains("exactly 8 features"));
        for name in FEATURE_NAMES {
            assert!(message.contains(name), "missing {name} in: {message}");
        }
    }

    #[test]
    fn test_as_row_shape_and_order() {
        let vector =
            FeatureVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        let row = vector.as_row();
        assert_eq!(row.dim(), (1, FEATURE_COUNT));
        assert_eq!(row[[0, 0]], 1.0);
        assert_eq!(row[[0, 7]], 8.0);
    }

    #[test]
    fn test_feature_index_lookup() {
        assert_eq!(feature_index("Pregnancies"), Some(0));
        assert_eq!(feature_index("BMI"), Some(5));
        assert_eq!(feature_index("Age"), Some(7));
        assert_eq!(feature_index("nonexistent"), None);
        assert_eq!(feature_name(1), Some("Glucose"));
        assert_eq!(feature_name(99), None);
    }
}
