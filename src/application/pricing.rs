//! Pricing service: Orchestrates encoding and model inference.
//!
//! This service coordinates:
//! - Input validation
//! - Feature encoding against the model's schema
//! - Model prediction
//! - Quote construction

use std::sync::Arc;

use crate::domain::{FeatureSchema, FeatureVector, PriceQuote, UnknownCategoryPolicy, VehicleSpec};
use crate::ports::PriceModel;
use crate::AutoquoteError;

/// Service for turning a vehicle spec into a price quote.
///
/// The model handle is constructed once by the entry point and shared
/// read-only; the service holds no other mutable state.
pub struct PricingService<M>
where
    M: PriceModel,
{
    model: Arc<M>,
    schema: FeatureSchema,
    policy: UnknownCategoryPolicy,
}

impl<M> PricingService<M>
where
    M: PriceModel,
{
    /// Create a pricing service for a loaded model.
    ///
    /// Uses the feature names stored in the model when it has them, and
    /// the canonical schema otherwise.
    ///
    /// # Errors
    /// Returns `AutoquoteError::SchemaMismatch` if the schema length does not
    /// match the model's feature count.
    pub fn new(model: Arc<M>, policy: UnknownCategoryPolicy) -> Result<Self, AutoquoteError> {
        let schema = match model.feature_names() {
            Some(names) => {
                tracing::debug!("Using feature order stored in the model");
                FeatureSchema::from_names(names.iter().cloned())?
            }
            None => FeatureSchema::canonical(),
        };

        if schema.len() != model.num_features() {
            return Err(AutoquoteError::SchemaMismatch {
                expected: schema.len(),
                got: model.num_features(),
            });
        }

        let gaps = schema.coverage_gaps();
        if !gaps.is_empty() {
            tracing::warn!(
                "Model schema lacks {} feature(s) the form can produce: {} (policy: {})",
                gaps.len(),
                gaps.join(", "),
                policy
            );
        }

        tracing::info!(
            "Pricing service ready ({} features, unknown categories: {})",
            schema.len(),
            policy
        );

        Ok(Self {
            model,
            schema,
            policy,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[must_use]
    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    /// Form options the model has no slot for.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<String> {
        self.schema.coverage_gaps()
    }

    /// Encode a vehicle with this service's schema and policy.
    ///
    /// # Errors
    /// Returns error if encoding fails under the configured policy.
    pub fn encode(&self, spec: &VehicleSpec) -> Result<FeatureVector, AutoquoteError> {
        Ok(self.schema.encode(spec, self.policy)?)
    }

    /// Price a vehicle.
    ///
    /// Performs the full pipeline:
    /// 1. Validate numeric bounds
    /// 2. Encode into the model's feature order
    /// 3. Predict
    ///
    /// # Errors
    /// Returns error if any step fails or the model output is not finite.
    pub fn quote(&self, spec: VehicleSpec) -> Result<PriceQuote, AutoquoteError> {
        tracing::debug!("Step 1: Validating vehicle input...");
        spec.validate()
            .map_err(|errors| AutoquoteError::Validation(errors.join(", ")))?;

        tracing::debug!("Step 2: Encoding features...");
        let features = self.encode(&spec)?;

        tracing::debug!("Step 3: Running model inference...");
        let price = self.model.predict(&features)?;
        if !price.is_finite() {
            return Err(AutoquoteError::InvalidPrediction(price));
        }

        let quote = PriceQuote::new(price, spec);
        tracing::info!(
            "Quote complete: make={}, body_style={}, price={}",
            spec.make,
            spec.body_style,
            quote.formatted_price()
        );

        Ok(quote)
    }
}
