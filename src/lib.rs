//! # Autoquote
//!
//! Vehicle price estimation from a pre-trained gradient-boosted tree model.
//!
//! This crate provides:
//! - A one-hot feature encoder over a closed set of vehicle attributes
//! - A read-only evaluator for XGBoost JSON model artifacts
//! - Terminal UI for entering a vehicle and reading back a price
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (VehicleSpec, FeatureSchema, PriceQuote)
//! - `ports`: Trait definitions for external operations (the price model)
//! - `adapters`: Concrete implementations (XGBoost JSON, model manifest)
//! - `application`: Use cases orchestrating domain and ports
//! - `config`: Environment-driven settings
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FeatureSchema, FeatureVector, PriceQuote, UnknownCategoryPolicy, VehicleSpec};

/// Result type for Autoquote operations
pub type Result<T> = std::result::Result<T, AutoquoteError>;

/// Main error type for Autoquote
#[derive(Debug, thiserror::Error)]
pub enum AutoquoteError {
    #[error("Model error: {0}")]
    Model(#[from] ports::ModelError),

    #[error("Encoding failed: {0}")]
    Encode(#[from] domain::EncodeError),

    #[error("Invalid feature schema: {0}")]
    Schema(#[from] domain::SchemaError),

    #[error("Model expects {got} features but the schema has {expected}")]
    SchemaMismatch { expected: usize, got: usize },

    #[error("Invalid vehicle data: {0}")]
    Validation(String),

    #[error("Model produced a non-finite price: {0}")]
    InvalidPrediction(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}
