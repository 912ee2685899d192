//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O.
//! All inputs are closed enums or bounded integers with strict validation.

mod features;
mod quote;
mod vehicle;

pub use features::{
    EncodeError, FeatureSchema, FeatureVector, SchemaError, UnknownCategoryPolicy, FEATURE_COUNT,
    FEATURE_NAMES,
};
pub use quote::{format_usd, PriceQuote};
pub use vehicle::{
    BodySize, BodyStyle, CategoricalField, Drivetrain, EngineAspiration, Make, NumericBounds,
    NumericField, ParseCategoryError, Selection, Transmission, VehicleSpec,
};
