//! Price model port: Trait for the pre-trained regression model.
//!
//! This trait abstracts the model format (XGBoost JSON) from the application logic.

use crate::domain::FeatureVector;

/// Error type for model loading and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(String),

    #[error("Malformed model artifact: {0}")]
    Format(String),

    #[error("Unsupported model: {0}")]
    Unsupported(String),

    #[error("Model integrity check failed: {0}")]
    Integrity(String),

    #[error("Expected {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },
}

/// Trait for price inference.
///
/// Implementations are loaded once at startup and never mutated, so
/// `predict` must be free of side effects and safe to call concurrently.
pub trait PriceModel: Send + Sync {
    /// Number of input features the model was trained on.
    fn num_features(&self) -> usize;

    /// Ordered feature names stored in the artifact, if any.
    fn feature_names(&self) -> Option<&[String]>;

    /// Predict a price from an encoded feature vector.
    ///
    /// # Errors
    /// Returns `ModelError::FeatureCount` if the vector length does not
    /// match `num_features()`.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}
