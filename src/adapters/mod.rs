//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external formats:
//! - `xgboost`: XGBoost JSON tree ensembles
//! - `manifest`: SHA-256 digest manifest for model artifacts

pub mod manifest;
pub mod xgboost;

pub use manifest::ModelManifest;
pub use xgboost::XgboostModel;
